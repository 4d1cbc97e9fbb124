//! CLI command implementations.

pub mod common;
pub mod design;
pub mod filter;
pub mod info;
pub mod presets;
