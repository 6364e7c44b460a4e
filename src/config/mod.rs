//! Navbar configuration.
//!
//! This module defines the [`NavbarConfig`] struct that describes a single
//! navbar, loaded from YAML or JSON. It supports forward-compatible parsing
//! (unknown fields are ignored), defaults for every option, and validation
//! of attribute names.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::NavbarConfig;
pub use operations::ConfigFormat;
pub use types::{BrandSetting, Position, PositionSetting, UrlSetting, Variant};
