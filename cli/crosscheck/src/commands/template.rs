//! `crosscheck template` — description-file template generation.

use anyhow::{bail, Result};
use crosscheck_platform::{generate_template, PlatformType};

/// Print a description-file template seeded from the named built-in
/// platform.
pub fn run(preset: &str) -> Result<()> {
    let ty = match PlatformType::from_name(preset) {
        Some(ty) => ty,
        None => bail!("unknown platform: '{preset}' (see 'crosscheck list')"),
    };
    print!("{}", generate_template(ty)?);
    Ok(())
}
