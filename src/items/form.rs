//! `form` items: an inline form inside the navbar.

use super::registry::{parse_fields, Align, ItemError, ItemKind, ItemRenderer};
use crate::context::{AppContext, UrlTarget};
use crate::html::{self, Attributes};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Deserialize)]
#[serde(default)]
struct FormFields {
    action: UrlTarget,
    method: String,
    align: Align,
    content: String,
    html_attributes: Attributes,
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            action: UrlTarget::Literal(String::new()),
            method: "get".to_string(),
            align: Align::Left,
            content: String::new(),
            html_attributes: Attributes::new(),
        }
    }
}

/// Renders `<form class="navbar-form navbar-left">…</form>`.
///
/// `content` is the form's inner markup and is emitted verbatim.
#[derive(Debug, Default, Clone, Copy)]
pub struct FormItem;

impl ItemRenderer for FormItem {
    fn render(
        &self,
        app: &AppContext,
        fields: &Map<String, Value>,
        out: &mut dyn fmt::Write,
    ) -> Result<(), ItemError> {
        let fields: FormFields = parse_fields(ItemKind::Form, fields)?;

        let mut attrs = fields.html_attributes;
        attrs.append_class("navbar-form");
        attrs.append_class(fields.align.css_class());
        attrs.set("action", app.normalize_url(&fields.action));
        attrs.set("method", fields.method);

        html::element(out, "form", &attrs, &fields.content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(app: &AppContext, fields: Value) -> String {
        let Value::Object(fields) = fields else {
            panic!("fields must be an object");
        };
        let mut out = String::new();
        FormItem.render(app, &fields, &mut out).unwrap();
        out
    }

    #[test]
    fn defaults_to_get_on_current_page() {
        let app = AppContext::default().with_current_url("/list");
        let out = render(&app, json!({"content": "<input name=\"q\">"}));
        assert_eq!(
            out,
            r#"<form class="navbar-form navbar-left" action="/list" method="get"><input name="q"></form>"#
        );
    }

    #[test]
    fn route_action_and_right_alignment() {
        let app = AppContext::default().with_base_url("/app");
        let out = render(
            &app,
            json!({
                "action": {"route": "search"},
                "method": "post",
                "align": "right",
                "html_attributes": {"id": "search"}
            }),
        );
        assert_eq!(
            out,
            r#"<form id="search" class="navbar-form navbar-right" action="/app/search" method="post"></form>"#
        );
    }
}
