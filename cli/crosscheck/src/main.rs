//! crosscheck CLI — inspect and resolve target platform type models.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "crosscheck",
    version,
    about = "Target platform type models for cross-compiled C/C++ analysis"
)]
struct Cli {
    /// Log each candidate path probed during platform lookup
    #[arg(long, global = true)]
    debug: bool,
    /// Extra directory to search for platform files (repeatable)
    #[arg(long = "lookup-dir", global = true, value_name = "DIR")]
    lookup_dirs: Vec<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List built-in platforms and discovered platform files
    List,
    /// Show the type model of a platform
    Describe {
        /// Platform name or description file
        name: String,
        /// Output format (default: human-readable, "toml" or "json")
        #[arg(long)]
        format: Option<String>,
    },
    /// Print the limits.h macros visible on a platform
    Defines {
        /// Platform name or description file
        name: String,
        /// Language standard (e.g. c89, c11, c++03, c++17; default: latest C)
        #[arg(long = "std")]
        standard: Option<String>,
    },
    /// Emit a description-file template seeded from a built-in platform
    Template {
        /// Built-in platform name (e.g. unix64)
        preset: String,
    },
    /// Load a description file and report problems
    Check {
        /// Description file path
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.debug);

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Route `log` output to stderr; `--debug` enables the lookup trace.
fn init_logger(debug: bool) {
    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{:5}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
        .expect("failed to configure logging");
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::List => {
            let cwd = std::env::current_dir()?;
            commands::list::run(&cwd)
        }
        Commands::Describe { name, format } => {
            commands::describe::run(&name, &cli.lookup_dirs, cli.debug, format.as_deref())
        }
        Commands::Defines { name, standard } => {
            commands::defines::run(&name, &cli.lookup_dirs, cli.debug, standard.as_deref())
        }
        Commands::Template { preset } => commands::template::run(&preset),
        Commands::Check { file } => commands::check::run(&file),
    }
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn cli_parses_global_flags() {
        let cli = Cli::try_parse_from([
            "crosscheck",
            "--debug",
            "--lookup-dir",
            "/opt/boards",
            "--lookup-dir",
            "/opt/extra",
            "describe",
            "win64",
            "--format",
            "toml",
        ])
        .unwrap();
        assert!(cli.debug);
        assert_eq!(cli.lookup_dirs.len(), 2);
        match cli.command {
            Commands::Describe { name, format } => {
                assert_eq!(name, "win64");
                assert_eq!(format.as_deref(), Some("toml"));
            }
            _ => panic!("expected describe"),
        }
    }

    #[test]
    fn global_flags_accepted_after_subcommand() {
        let cli =
            Cli::try_parse_from(["crosscheck", "defines", "unix32", "--std", "c89", "--debug"])
                .unwrap();
        assert!(cli.debug);
        match cli.command {
            Commands::Defines { name, standard } => {
                assert_eq!(name, "unix32");
                assert_eq!(standard.as_deref(), Some("c89"));
            }
            _ => panic!("expected defines"),
        }
    }

    /// Full workflow: template → check → describe → defines via lookup dir.
    #[test]
    fn template_check_describe_defines_workflow() {
        let dir = tempfile::tempdir().unwrap();
        let template =
            crosscheck_platform::generate_template(crosscheck_platform::PlatformType::Unix32)
                .unwrap();
        std::fs::write(dir.path().join("board.toml"), template).unwrap();

        commands::check::run(&dir.path().join("board.toml")).unwrap();

        let dirs = vec![dir.path().to_path_buf()];
        commands::describe::run("board", &dirs, false, None).unwrap();
        commands::describe::run("board", &dirs, false, Some("toml")).unwrap();
        commands::describe::run("board", &dirs, false, Some("json")).unwrap();
        commands::defines::run("board", &dirs, false, Some("c99")).unwrap();
    }
}
