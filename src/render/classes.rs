//! CSS class derivation.

use crate::config::{NavbarConfig, Variant};

/// Classes for the outer `nav` element, in order: `navbar`, then the
/// variant, fixed and static classes for whichever of those is recognized.
///
/// `fixed` and `static` are independent; when both are set both classes
/// are emitted.
pub fn navbar_classes(config: &NavbarConfig) -> Vec<String> {
    let mut classes = vec!["navbar".to_string()];

    if let Some(variant) = config.variant.as_deref().and_then(Variant::from_str) {
        classes.push(format!("navbar-{}", variant.as_str()));
    }

    if let Some(position) = config.fixed.position() {
        classes.push(format!("navbar-fixed-{}", position.as_str()));
    }

    if let Some(position) = config.static_position.position() {
        classes.push(format!("navbar-static-{}", position.as_str()));
    }

    classes
}

/// Class of the inner width container.
pub fn container_class(fluid: bool) -> &'static str {
    if fluid { "container-fluid" } else { "container" }
}
