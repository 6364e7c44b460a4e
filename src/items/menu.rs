//! `menu` items: a list of navigation links.

use super::registry::{parse_fields, Align, ItemError, ItemKind, ItemRenderer};
use crate::context::{AppContext, UrlTarget};
use crate::html::{self, Attributes};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Deserialize)]
#[serde(default)]
struct MenuFields {
    items: Vec<MenuEntry>,
    align: Option<Align>,
    encode_label: bool,
    html_attributes: Attributes,
}

impl Default for MenuFields {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            align: None,
            encode_label: true,
            html_attributes: Attributes::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct MenuEntry {
    label: String,
    #[serde(default)]
    url: Option<UrlTarget>,
    #[serde(default)]
    active: bool,
    #[serde(default = "default_true")]
    visible: bool,
    /// Overrides the menu-wide `encode_label`.
    #[serde(default)]
    encode_label: Option<bool>,
    #[serde(default)]
    html_attributes: Attributes,
    #[serde(default)]
    link_attributes: Attributes,
}

fn default_true() -> bool {
    true
}

/// Renders `<ul class="nav navbar-nav">` with one `<li>` per visible entry.
///
/// Entries with a `url` become links; entries without one render their
/// label in a `span`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MenuItem;

impl ItemRenderer for MenuItem {
    fn render(
        &self,
        app: &AppContext,
        fields: &Map<String, Value>,
        out: &mut dyn fmt::Write,
    ) -> Result<(), ItemError> {
        let fields: MenuFields = parse_fields(ItemKind::Menu, fields)?;

        let mut list_attrs = fields.html_attributes;
        list_attrs.append_class("nav navbar-nav");
        if let Some(align) = fields.align {
            list_attrs.append_class(align.css_class());
        }

        html::open_tag(out, "ul", &list_attrs)?;
        for entry in fields.items.into_iter().filter(|e| e.visible) {
            let encode = entry.encode_label.unwrap_or(fields.encode_label);
            render_entry(app, entry, encode, out)?;
        }
        html::close_tag(out, "ul")?;
        Ok(())
    }
}

fn render_entry(
    app: &AppContext,
    entry: MenuEntry,
    encode: bool,
    out: &mut dyn fmt::Write,
) -> fmt::Result {
    let mut item_attrs = entry.html_attributes;
    if entry.active {
        item_attrs.append_class("active");
    }

    let label = if encode {
        html::encode(&entry.label)
    } else {
        entry.label
    };

    html::open_tag(out, "li", &item_attrs)?;
    match entry.url {
        Some(url) => {
            let mut link_attrs = Attributes::new();
            link_attrs.set("href", app.normalize_url(&url));
            for (name, value) in entry.link_attributes.iter() {
                link_attrs.set(name, value);
            }
            html::element(out, "a", &link_attrs, &label)?;
        }
        None => html::element(out, "span", &entry.link_attributes, &label)?,
    }
    html::close_tag(out, "li")
}
