//! `crosscheck check` — validate a description file.

use std::path::Path;

use anyhow::{Context, Result};
use crosscheck_platform::Platform;

/// Load `file` and report success or the first problem found.
pub fn run(file: &Path) -> Result<()> {
    let mut platform = Platform::default();
    platform
        .load_from_file(file)
        .with_context(|| format!("checking {}", file.display()))?;
    println!(
        "{}: ok ({}-bit int, {}-byte pointer)",
        file.display(),
        platform.int_bit,
        platform.sizeof_pointer
    );
    Ok(())
}
