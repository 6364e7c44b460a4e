//! Item kinds and the factory that resolves them to renderers.

use super::{FormItem, MenuItem, TextItem};
use crate::context::AppContext;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Built-in item kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// A list of navigation links (`ul.nav.navbar-nav`).
    Menu,
    /// A line of text (`p.navbar-text`).
    Text,
    /// An inline form (`form.navbar-form`).
    Form,
}

impl ItemKind {
    pub const ALL: [ItemKind; 3] = [ItemKind::Menu, ItemKind::Text, ItemKind::Form];

    /// Parse a kind from its configuration name.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "menu" => Some(Self::Menu),
            "text" => Some(Self::Text),
            "form" => Some(Self::Form),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Text => "text",
            Self::Form => "form",
        }
    }
}

/// Horizontal placement of an item inside the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    #[default]
    Left,
    Right,
}

impl Align {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Left => "navbar-left",
            Self::Right => "navbar-right",
        }
    }
}

/// Failure while rendering a single item.
#[derive(Error, Debug)]
pub enum ItemError {
    /// The descriptor's fields do not fit the kind.
    #[error("invalid fields for '{kind}' item: {source}")]
    InvalidFields {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The output sink rejected a write.
    #[error("output sink rejected a write")]
    Write(#[from] fmt::Error),
}

impl ItemError {
    pub(crate) fn invalid(kind: ItemKind, source: serde_json::Error) -> Self {
        ItemError::InvalidFields {
            kind: kind.as_str(),
            source,
        }
    }
}

/// Renders one kind of item from its pass-through fields.
pub trait ItemRenderer {
    fn render(
        &self,
        app: &AppContext,
        fields: &Map<String, Value>,
        out: &mut dyn fmt::Write,
    ) -> Result<(), ItemError>;
}

/// Resolves an item `kind` to its renderer.
pub trait ItemFactory {
    /// Returns `None` when the kind is not known to this factory.
    fn resolve(&self, kind: &str) -> Option<&dyn ItemRenderer>;
}

/// Factory for the built-in [`ItemKind`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinItems {
    menu: MenuItem,
    text: TextItem,
    form: FormItem,
}

impl BuiltinItems {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ItemFactory for BuiltinItems {
    fn resolve(&self, kind: &str) -> Option<&dyn ItemRenderer> {
        let renderer: &dyn ItemRenderer = match ItemKind::from_str(kind)? {
            ItemKind::Menu => &self.menu,
            ItemKind::Text => &self.text,
            ItemKind::Form => &self.form,
        };
        Some(renderer)
    }
}

/// Deserialize typed fields for `kind` from a descriptor's field map.
pub(crate) fn parse_fields<T>(kind: ItemKind, fields: &Map<String, Value>) -> Result<T, ItemError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_value(Value::Object(fields.clone())).map_err(|e| ItemError::invalid(kind, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_round_trip() {
        for kind in ItemKind::ALL {
            assert_eq!(ItemKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(ItemKind::from_str("TbMenu"), None);
        assert_eq!(ItemKind::from_str(""), None);
    }

    #[test]
    fn builtin_factory_resolves_known_kinds() {
        let items = BuiltinItems::new();
        assert!(items.resolve("menu").is_some());
        assert!(items.resolve("text").is_some());
        assert!(items.resolve("form").is_some());
        assert!(items.resolve("carousel").is_none());
    }

    #[test]
    fn align_classes() {
        assert_eq!(Align::Left.css_class(), "navbar-left");
        assert_eq!(Align::Right.css_class(), "navbar-right");
        assert_eq!(Align::default(), Align::Left);
    }

    #[test]
    fn invalid_fields_error_names_kind() {
        let source = serde_json::from_str::<u8>("\"x\"").unwrap_err();
        let err = ItemError::invalid(ItemKind::Menu, source);
        assert!(err.to_string().starts_with("invalid fields for 'menu' item"));
    }
}
