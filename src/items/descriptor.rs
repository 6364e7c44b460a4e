//! Item descriptors as they appear in configuration.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of a navbar's `items` list.
///
/// ```yaml
/// items:
///   - '<p class="navbar-text">Signed in</p>'
///   - kind: menu
///     items:
///       - { label: Home, url: / }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavbarItem {
    /// Already-rendered markup, emitted without encoding.
    Markup(String),
    /// A child rendered by the item factory.
    Widget(ItemDescriptor),
}

impl From<&str> for NavbarItem {
    fn from(markup: &str) -> Self {
        NavbarItem::Markup(markup.to_string())
    }
}

impl From<String> for NavbarItem {
    fn from(markup: String) -> Self {
        NavbarItem::Markup(markup)
    }
}

impl From<ItemDescriptor> for NavbarItem {
    fn from(descriptor: ItemDescriptor) -> Self {
        NavbarItem::Widget(descriptor)
    }
}

/// A `kind` plus the fields handed to that kind's renderer.
///
/// `kind` is kept as written. Only a non-empty string names a kind; a
/// descriptor whose `kind` is missing, empty or not a string is skipped
/// when rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<Value>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ItemDescriptor {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(Value::String(kind.into())),
            fields: Map::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// The kind name, if `kind` is a non-empty string.
    pub fn kind_name(&self) -> Option<&str> {
        match &self.kind {
            Some(Value::String(kind)) if !kind.is_empty() => Some(kind),
            _ => None,
        }
    }

    /// Split into the kind name and the remaining pass-through fields.
    pub fn into_parts(self) -> (Option<String>, Map<String, Value>) {
        let kind = self.kind_name().map(str::to_string);
        (kind, self.fields)
    }
}
