//! `text` items: a line of text inside the navbar.

use super::registry::{parse_fields, Align, ItemError, ItemKind, ItemRenderer};
use crate::context::AppContext;
use crate::html::{self, Attributes};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Deserialize)]
struct TextFields {
    text: String,
    #[serde(default)]
    align: Option<Align>,
    #[serde(default = "default_true")]
    encode: bool,
    #[serde(default)]
    html_attributes: Attributes,
}

fn default_true() -> bool {
    true
}

/// Renders `<p class="navbar-text">…</p>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextItem;

impl ItemRenderer for TextItem {
    fn render(
        &self,
        _app: &AppContext,
        fields: &Map<String, Value>,
        out: &mut dyn fmt::Write,
    ) -> Result<(), ItemError> {
        let fields: TextFields = parse_fields(ItemKind::Text, fields)?;

        let mut attrs = fields.html_attributes;
        attrs.append_class("navbar-text");
        if let Some(align) = fields.align {
            attrs.append_class(align.css_class());
        }

        let content = if fields.encode {
            html::encode(&fields.text)
        } else {
            fields.text
        };
        html::element(out, "p", &attrs, &content)?;
        Ok(())
    }
}
