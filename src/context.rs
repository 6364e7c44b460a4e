//! Application context for rendering.
//!
//! The renderer never reaches into global application state. Everything it
//! needs to know about the hosting application (its display name, where
//! "home" is, how routes map onto URLs) is carried by an [`AppContext`]
//! passed in by the caller.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Default display name used when no application name is configured.
pub const DEFAULT_DISPLAY_NAME: &str = "My Application";

/// Default home URL.
pub const DEFAULT_HOME_URL: &str = "/";

/// Facts about the hosting application that navbar rendering depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContext {
    /// Human-readable application name, used as the default brand.
    pub display_name: String,

    /// URL of the application's home page, used as the default brand link.
    pub home_url: String,

    /// Prefix for route-style URLs (e.g. `/app` or `https://example.com`).
    pub base_url: String,

    /// URL of the page being rendered, if known. An empty literal URL
    /// resolves to this.
    pub current_url: Option<String>,
}

impl Default for AppContext {
    fn default() -> Self {
        Self {
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            home_url: DEFAULT_HOME_URL.to_string(),
            base_url: String::new(),
            current_url: None,
        }
    }
}

impl AppContext {
    pub fn new(display_name: impl Into<String>, home_url: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            home_url: home_url.into(),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_current_url(mut self, current_url: impl Into<String>) -> Self {
        self.current_url = Some(current_url.into());
        self
    }

    /// Resolve a link target to the URL string placed in `href`/`action`.
    pub fn normalize_url(&self, target: &UrlTarget) -> String {
        match target {
            UrlTarget::Literal(url) if url.is_empty() => {
                self.current_url.clone().unwrap_or_default()
            }
            UrlTarget::Literal(url) => url.clone(),
            UrlTarget::Route { route, params } => self.route_url(route, params),
        }
    }

    fn route_url(&self, route: &str, params: &BTreeMap<String, Value>) -> String {
        let base = self.base_url.trim_end_matches('/');
        let route = route.trim_start_matches('/');
        let mut url = format!("{}/{}", base, route);

        if !params.is_empty() {
            let query: Vec<String> = params
                .iter()
                .map(|(key, value)| {
                    format!(
                        "{}={}",
                        urlencoding::encode(key),
                        urlencoding::encode(&param_value(value))
                    )
                })
                .collect();
            url.push('?');
            url.push_str(&query.join("&"));
        }

        url
    }
}

fn param_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// A link target as written in configuration.
///
/// Either a literal URL string, or a route with query parameters:
///
/// ```yaml
/// brand_url: /home
/// # or
/// brand_url: { route: site/page, params: { view: about } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UrlTarget {
    Literal(String),
    Route {
        route: String,
        #[serde(default)]
        params: BTreeMap<String, Value>,
    },
}

impl From<&str> for UrlTarget {
    fn from(url: &str) -> Self {
        UrlTarget::Literal(url.to_string())
    }
}

impl From<String> for UrlTarget {
    fn from(url: String) -> Self {
        UrlTarget::Literal(url)
    }
}
