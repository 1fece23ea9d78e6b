//! `crosscheck defines` — limits.h macros for a platform.

use std::path::PathBuf;

use anyhow::{bail, Result};
use crosscheck_platform::{limits_defines, Platform, Standard};

/// Resolve a platform and print the limit macros `standard` makes visible.
pub fn run(
    name: &str,
    lookup_dirs: &[PathBuf],
    debug: bool,
    standard: Option<&str>,
) -> Result<()> {
    let standard = match standard {
        Some(label) => match Standard::from_name(label) {
            Some(standard) => standard,
            None => bail!("unknown standard: '{label}' (expected e.g. c89, c11, c++03, c++17)"),
        },
        None => Standard::default(),
    };

    let mut platform = Platform::default();
    platform.set(name, lookup_dirs, debug)?;
    println!("{}", limits_defines(&platform, standard));
    Ok(())
}
