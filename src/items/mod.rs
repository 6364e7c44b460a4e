//! Child items placed inside a navbar.
//!
//! An item is either pre-rendered markup, emitted verbatim, or a
//! descriptor naming a `kind` plus the fields that kind's renderer needs.
//! Kinds are resolved through an [`ItemFactory`]; [`BuiltinItems`] covers
//! the closed set of [`ItemKind`]s shipped with this crate.

mod descriptor;
mod form;
mod menu;
mod registry;
mod text;

pub use descriptor::{ItemDescriptor, NavbarItem};
pub use form::FormItem;
pub use menu::MenuItem;
pub use registry::{Align, BuiltinItems, ItemError, ItemFactory, ItemKind, ItemRenderer};
pub use text::TextItem;
