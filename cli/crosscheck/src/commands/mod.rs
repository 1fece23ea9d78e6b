//! CLI command implementations.

pub mod check;
pub mod defines;
pub mod describe;
pub mod list;
pub mod template;
