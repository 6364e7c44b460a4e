//! NavbarConfig struct definition.

use super::types::*;
use crate::html::Attributes;
use crate::items::NavbarItem;
use serde::{Deserialize, Serialize};

/// Configuration for one navbar.
///
/// Every field is optional. Unknown fields in YAML/JSON input are ignored
/// for forward compatibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    /// Colour variant; only `inverse` is recognized. Anything else is kept
    /// but contributes no class.
    #[serde(alias = "type", skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,

    /// Brand markup, `false` to omit the brand, or unset for the
    /// application's display name.
    #[serde(skip_serializing_if = "BrandSetting::is_unset")]
    pub brand: BrandSetting,

    /// Brand link target, `false` for a non-link brand, or unset for the
    /// application's home URL.
    #[serde(skip_serializing_if = "UrlSetting::is_unset")]
    pub brand_url: UrlSetting,

    /// HTML attributes for the brand element.
    #[serde(alias = "brand_options", skip_serializing_if = "Attributes::is_empty")]
    pub brand_attributes: Attributes,

    /// `top`/`bottom` to pin the navbar to a viewport edge, `false` to disable.
    pub fixed: PositionSetting,

    /// `top`/`bottom` for a static (full-width, scrolling) navbar, `false`
    /// to disable. May be combined with `fixed`; both classes are emitted.
    #[serde(rename = "static")]
    pub static_position: PositionSetting,

    /// Full-width container (`container-fluid`) instead of `container`.
    pub fluid: bool,

    /// Render a toggle button and wrap items in a collapse region.
    #[serde(alias = "collapse")]
    pub collapsible: bool,

    /// HTML attributes for the outer `nav` element.
    #[serde(alias = "html_attributes", skip_serializing_if = "Attributes::is_empty")]
    pub container_attributes: Attributes,

    /// Child items, rendered in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<NavbarItem>,
}
