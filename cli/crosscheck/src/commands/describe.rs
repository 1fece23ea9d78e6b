//! `crosscheck describe` — show the type model of a platform.

use std::path::PathBuf;

use anyhow::{bail, Result};
use crosscheck_platform::{platform_to_toml, Platform, PlatformFile};

/// Resolve a platform and print its field table in the requested format.
pub fn run(name: &str, lookup_dirs: &[PathBuf], debug: bool, format: Option<&str>) -> Result<()> {
    let mut platform = Platform::default();
    platform.set(name, lookup_dirs, debug)?;

    match format {
        None => print_human(&platform),
        Some("toml") => print!("{}", platform_to_toml(&platform)?),
        Some("json") => {
            let file = PlatformFile::from(&platform);
            println!("{}", serde_json::to_string_pretty(&file)?);
        }
        Some(other) => bail!("unknown format: '{other}' (expected 'toml' or 'json')"),
    }
    Ok(())
}

fn print_human(platform: &Platform) {
    println!("=== Platform: {platform} ===");
    println!();
    println!("--- Integer widths (bits) ---");
    println!("  char:       {}", platform.char_bit);
    println!("  short:      {}", platform.short_bit);
    println!("  int:        {}", platform.int_bit);
    println!("  long:       {}", platform.long_bit);
    println!("  long long:  {}", platform.long_long_bit);
    println!();
    println!("--- Type sizes (bytes) ---");
    println!("  bool:         {}", platform.sizeof_bool);
    println!("  short:        {}", platform.sizeof_short);
    println!("  int:          {}", platform.sizeof_int);
    println!("  long:         {}", platform.sizeof_long);
    println!("  long long:    {}", platform.sizeof_long_long);
    println!("  float:        {}", platform.sizeof_float);
    println!("  double:       {}", platform.sizeof_double);
    println!("  long double:  {}", platform.sizeof_long_double);
    println!("  wchar_t:      {}", platform.sizeof_wchar_t);
    println!("  size_t:       {}", platform.sizeof_size_t);
    println!("  pointer:      {}", platform.sizeof_pointer);
    println!();
    println!("--- Character model ---");
    println!("  plain char sign:   {}", platform.default_sign);
    println!(
        "  signed char:       {}..{}",
        platform.signed_char_min(),
        platform.signed_char_max()
    );
    println!("  unsigned char max: {}", platform.unsigned_char_max());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_builtin_formats() {
        run("win64", &[], false, None).unwrap();
        run("unix32", &[], false, Some("toml")).unwrap();
        run("unix64", &[], false, Some("json")).unwrap();
    }

    #[test]
    fn describe_unknown_platform() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run("no-such-board", &[dir.path().to_path_buf()], false, None).is_err());
    }

    #[test]
    fn describe_unknown_format() {
        assert!(run("win64", &[], false, Some("yaml")).is_err());
    }
}
