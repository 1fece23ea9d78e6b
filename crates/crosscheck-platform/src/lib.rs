//! Target platform type model for cross-compiled C/C++ analysis.
//!
//! A [`Platform`] records the integer widths, type sizes, and plain-`char`
//! signedness of the architecture a translation unit is compiled *for*, which
//! is not necessarily the architecture the analyzer runs *on*. Analyses use it
//! to decide whether a constant fits a type, where signed overflow happens,
//! and which `limits.h` macros the target's standard library would define.
//!
//! A descriptor is populated once — from a built-in configuration
//! ([`Platform::set_type`]) or from a description file resolved by name
//! ([`Platform::set`]) — and is treated as read-only afterwards. It is plain
//! data, so a populated value can be shared freely across threads.

pub mod error;
pub mod limits;
pub mod loader;
pub mod platform;
pub mod ranges;
pub mod standards;

pub use error::{PlatformError, Result};
pub use limits::limits_defines;
pub use loader::{discover_platforms, generate_template, platform_to_toml, PlatformFile};
pub use platform::{DefaultSign, Platform, PlatformType};
pub use standards::{CStd, CppStd, Standard};
