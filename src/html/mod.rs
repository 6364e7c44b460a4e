//! HTML assembly helpers.
//!
//! Attributes are kept in insertion order so rendered tags are stable
//! across runs. Attribute values are always encoded; element content is
//! left to the caller, since navbar content is frequently pre-rendered
//! markup.

mod attributes;
mod escape;

pub use attributes::Attributes;
pub use escape::encode;

use std::fmt::{self, Write};

/// Write an opening tag with its attributes, e.g. `<a href="/" class="x">`.
pub fn open_tag(out: &mut dyn Write, tag: &str, attributes: &Attributes) -> fmt::Result {
    write!(out, "<{}", tag)?;
    attributes.write_to(out)?;
    out.write_char('>')
}

/// Write a closing tag, e.g. `</a>`.
pub fn close_tag(out: &mut dyn Write, tag: &str) -> fmt::Result {
    write!(out, "</{}>", tag)
}

/// Write a complete element whose content is inserted verbatim.
pub fn element(
    out: &mut dyn Write,
    tag: &str,
    attributes: &Attributes,
    content: &str,
) -> fmt::Result {
    open_tag(out, tag, attributes)?;
    out.write_str(content)?;
    close_tag(out, tag)
}
