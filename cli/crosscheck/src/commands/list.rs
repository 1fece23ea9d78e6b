//! `crosscheck list` — built-in platforms and discovered description files.

use std::path::Path;

use anyhow::Result;
use crosscheck_platform::{discover_platforms, PlatformType};

/// Print the built-in platform labels plus any description files found
/// under `root/platforms/`.
pub fn run(root: &Path) -> Result<()> {
    println!("Built-in platforms:");
    println!();
    for (ty, description) in builtin_platforms() {
        println!("  {:<12} {description}", ty.as_str());
    }

    let files = discover_platforms(root)?;
    if !files.is_empty() {
        println!();
        println!("Platform files:");
        println!();
        for (name, path) in files {
            println!("  {name:<12} {}", path.display());
        }
    }

    println!();
    println!("Use 'crosscheck describe <name>' for details.");
    Ok(())
}

fn builtin_platforms() -> Vec<(PlatformType, &'static str)> {
    vec![
        (PlatformType::Unix32, "32-bit Unix (ILP32)"),
        (PlatformType::Unix64, "64-bit Unix (LP64, 8-byte long)"),
        (PlatformType::Win32A, "32-bit Windows, ANSI character encoding"),
        (
            PlatformType::Win32W,
            "32-bit Windows, UNICODE character encoding",
        ),
        (PlatformType::Win64, "64-bit Windows (LLP64, 4-byte long)"),
        (PlatformType::Native, "the system the analyzer was built on"),
        (
            PlatformType::Unspecified,
            "no target; sizes are not meaningful",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_cover_settable_types() {
        let builtins = builtin_platforms();
        assert_eq!(builtins.len(), 7);
        assert!(builtins.iter().all(|(ty, _)| *ty != PlatformType::File));
        assert!(builtins.iter().any(|(ty, _)| *ty == PlatformType::Win64));
    }

    #[test]
    fn list_runs_with_and_without_files() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path()).unwrap();

        let sub = dir.path().join("platforms");
        std::fs::create_dir_all(&sub).unwrap();
        let template = crosscheck_platform::generate_template(PlatformType::Unix32).unwrap();
        std::fs::write(sub.join("board.toml"), template).unwrap();
        run(dir.path()).unwrap();
    }
}
