//! Config loading, validation, and utility operations.

use super::model::NavbarConfig;
use super::types::{BrandSetting, PositionSetting, UrlSetting};
use crate::error::{NavbarError, Result};
use crate::html::Attributes;
use crate::items::ItemDescriptor;
use serde_json::json;
use std::path::Path;

/// On-disk formats a navbar config can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Parse a format name (`yaml`, `yml`, `json`).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_str)
    }
}

impl NavbarConfig {
    /// Load config from a YAML or JSON file, chosen by extension.
    ///
    /// # Returns
    ///
    /// * `Ok(NavbarConfig)` - Successfully loaded and validated config
    /// * `Err(NavbarError::UserError)` - Unsupported file extension
    /// * `Err(NavbarError::IoError)` - File could not be read
    /// * `Err(NavbarError::ConfigError)` - Parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let format = ConfigFormat::from_path(path).ok_or_else(|| {
            NavbarError::UserError(format!(
                "cannot tell the format of '{}': use a .yaml, .yml or .json file",
                path.display()
            ))
        })?;

        let content = std::fs::read_to_string(path).map_err(|e| {
            NavbarError::IoError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::parse(&content, format)
    }

    /// Parse config text in the given format.
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self> {
        match format {
            ConfigFormat::Yaml => Self::from_yaml(content),
            ConfigFormat::Json => Self::from_json(content),
        }
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the default config.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: NavbarConfig = if yaml.trim().is_empty() {
            NavbarConfig::default()
        } else {
            serde_yaml::from_str(yaml)
                .map_err(|e| NavbarError::ConfigError(format!("failed to parse YAML: {}", e)))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: NavbarConfig = serde_json::from_str(json)
            .map_err(|e| NavbarError::ConfigError(format!("failed to parse JSON: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| NavbarError::ConfigError(format!("failed to serialize to YAML: {}", e)))
    }

    /// Serialize config to a pretty-printed JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| NavbarError::ConfigError(format!("failed to serialize to JSON: {}", e)))
    }

    /// Validate config values and return an error on invalid values.
    ///
    /// Validation rules:
    /// - attribute names in `brand_attributes`, `container_attributes` must be
    ///   non-empty and contain no whitespace, quotes, `=`, `<`, `>` or `/`
    ///
    /// Unrecognized `variant`, `fixed` and `static` values and malformed
    /// item descriptors are not errors; rendering ignores or skips them.
    pub fn validate(&self) -> Result<()> {
        validate_attribute_names("brand_attributes", &self.brand_attributes)?;
        validate_attribute_names("container_attributes", &self.container_attributes)?;
        Ok(())
    }

    /// An example configuration exercising every option.
    pub fn sample() -> Self {
        NavbarConfig {
            variant: Some("inverse".to_string()),
            brand: BrandSetting::Markup("Acme".to_string()),
            brand_url: UrlSetting::Url("/".into()),
            brand_attributes: Attributes::new(),
            fixed: PositionSetting::top(),
            static_position: PositionSetting::Disabled,
            fluid: false,
            collapsible: true,
            container_attributes: [("id", "main-navbar")].into_iter().collect(),
            items: vec![
                ItemDescriptor::new("menu")
                    .with_field(
                        "items",
                        json!([
                            {"label": "Home", "url": "/", "active": true},
                            {"label": "About", "url": {"route": "site/page", "params": {"view": "about"}}},
                        ]),
                    )
                    .into(),
                ItemDescriptor::new("form")
                    .with_field("action", "/search")
                    .with_field("align", "right")
                    .with_field(
                        "content",
                        r#"<input type="text" name="q" class="form-control" placeholder="Search">"#,
                    )
                    .into(),
                ItemDescriptor::new("text")
                    .with_field("text", "Signed in as guest")
                    .with_field("align", "right")
                    .into(),
            ],
        }
    }
}

fn validate_attribute_names(field: &str, attributes: &Attributes) -> Result<()> {
    for name in attributes.names() {
        if name.is_empty() {
            return Err(NavbarError::ConfigError(format!(
                "{}: attribute names must be non-empty",
                field
            )));
        }
        if let Some(bad) = name
            .chars()
            .find(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '=' | '<' | '>' | '/'))
        {
            return Err(NavbarError::ConfigError(format!(
                "{}: attribute name '{}' contains invalid character '{}'",
                field, name, bad
            )));
        }
    }
    Ok(())
}
