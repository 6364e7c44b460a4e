//! Tests for config functionality.

use crate::config::{
    BrandSetting, ConfigFormat, NavbarConfig, Position, PositionSetting, UrlSetting, Variant,
};
use crate::context::UrlTarget;
use crate::items::NavbarItem;
use std::path::Path;

#[test]
fn test_default_config() {
    let config = NavbarConfig::default();

    assert!(config.variant.is_none());
    assert_eq!(config.brand, BrandSetting::Unset);
    assert_eq!(config.brand_url, UrlSetting::Unset);
    assert!(config.brand_attributes.is_empty());
    assert_eq!(config.fixed, PositionSetting::Disabled);
    assert_eq!(config.static_position, PositionSetting::Disabled);
    assert!(!config.fluid);
    assert!(!config.collapsible);
    assert!(config.container_attributes.is_empty());
    assert!(config.items.is_empty());
}

#[test]
fn test_parse_empty_yaml() {
    let config = NavbarConfig::from_yaml("").unwrap();
    assert_eq!(config, NavbarConfig::default());
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
variant: inverse
brand: "<img src=\"logo.png\"> Acme"
brand_url: /home
brand_attributes:
  id: logo
fixed: bottom
static: top
fluid: true
collapsible: true
container_attributes:
  id: main
items:
  - "<a>Home</a>"
  - kind: text
    text: Hello
"#;
    let config = NavbarConfig::from_yaml(yaml).unwrap();

    assert_eq!(config.variant.as_deref(), Some("inverse"));
    assert_eq!(
        config.brand,
        BrandSetting::Markup(r#"<img src="logo.png"> Acme"#.to_string())
    );
    assert_eq!(config.brand_url, UrlSetting::Url(UrlTarget::from("/home")));
    assert_eq!(config.brand_attributes.get("id"), Some("logo"));
    assert_eq!(config.fixed.position(), Some(Position::Bottom));
    assert_eq!(config.static_position.position(), Some(Position::Top));
    assert!(config.fluid);
    assert!(config.collapsible);
    assert_eq!(config.container_attributes.get("id"), Some("main"));
    assert_eq!(config.items.len(), 2);
    assert_eq!(config.items[0], NavbarItem::Markup("<a>Home</a>".to_string()));
    assert!(matches!(config.items[1], NavbarItem::Widget(_)));
}

#[test]
fn test_false_disables_brand_and_link() {
    let config = NavbarConfig::from_yaml("brand: false\nbrand_url: false\n").unwrap();
    assert_eq!(config.brand, BrandSetting::Disabled);
    assert_eq!(config.brand_url, UrlSetting::Disabled);
}

#[test]
fn test_true_brand_means_default() {
    let config = NavbarConfig::from_yaml("brand: true\nbrand_url: true\n").unwrap();
    assert_eq!(config.brand, BrandSetting::Unset);
    assert_eq!(config.brand_url, UrlSetting::Unset);
}

#[test]
fn test_route_brand_url() {
    let yaml = r#"
brand_url:
  route: site/index
  params:
    lang: en
"#;
    let config = NavbarConfig::from_yaml(yaml).unwrap();
    assert!(matches!(
        config.brand_url,
        UrlSetting::Url(UrlTarget::Route { .. })
    ));
}

#[test]
fn test_false_positions() {
    let config = NavbarConfig::from_yaml("fixed: false\nstatic: false\n").unwrap();
    assert!(config.fixed.is_disabled());
    assert!(config.static_position.is_disabled());
}

#[test]
fn test_numeric_position_is_kept_as_text() {
    let config = NavbarConfig::from_yaml("fixed: 5\n").unwrap();
    assert_eq!(config.fixed, PositionSetting::Value("5".to_string()));
    assert_eq!(config.fixed.position(), None);
}

#[test]
fn test_numeric_brand_is_markup() {
    let config = NavbarConfig::from_yaml("brand: 2024\n").unwrap();
    assert_eq!(config.brand, BrandSetting::Markup("2024".to_string()));
}

#[test]
fn test_unrecognized_values_are_kept_but_unrecognized() {
    let config = NavbarConfig::from_yaml("variant: purple\nfixed: left\n").unwrap();
    assert_eq!(config.variant.as_deref(), Some("purple"));
    assert_eq!(Variant::from_str("purple"), None);
    assert_eq!(config.fixed, PositionSetting::Value("left".to_string()));
    assert_eq!(config.fixed.position(), None);
}

#[test]
fn test_aliases() {
    let yaml = r#"
type: inverse
collapse: true
html_attributes:
  id: nav
brand_options:
  class: big
"#;
    let config = NavbarConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.variant.as_deref(), Some("inverse"));
    assert!(config.collapsible);
    assert_eq!(config.container_attributes.get("id"), Some("nav"));
    assert_eq!(config.brand_attributes.get("class"), Some("big"));
}

#[test]
fn test_parse_yaml_with_unknown_fields() {
    let yaml = r#"
fluid: true
future_option: 3
nested:
  deep: true
"#;
    let config = NavbarConfig::from_yaml(yaml).unwrap();
    assert!(config.fluid);
}

#[test]
fn test_parse_json() {
    let json = r#"{
        "brand": "Acme",
        "brand_url": "/",
        "fixed": "top",
        "items": ["<a>Home</a>", {"kind": "menu", "items": []}]
    }"#;
    let config = NavbarConfig::from_json(json).unwrap();
    assert_eq!(config.brand, BrandSetting::Markup("Acme".to_string()));
    assert_eq!(config.fixed, PositionSetting::top());
    assert_eq!(config.items.len(), 2);
}

#[test]
fn test_invalid_yaml_is_config_error() {
    let err = NavbarConfig::from_yaml("fluid: [unclosed").unwrap_err();
    assert!(err.to_string().contains("failed to parse YAML"));
    assert_eq!(err.exit_code(), crate::exit_codes::CONFIG_FAILURE);
}

#[test]
fn test_validate_attribute_name_with_space() {
    let yaml = r#"
container_attributes:
  "data toggle": x
"#;
    let err = NavbarConfig::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("container_attributes"));
    assert!(err.to_string().contains("data toggle"));
}

#[test]
fn test_validate_empty_attribute_name() {
    let yaml = r#"
brand_attributes:
  "": x
"#;
    let err = NavbarConfig::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("brand_attributes"));
    assert!(err.to_string().contains("non-empty"));
}

#[test]
fn test_malformed_kinds_are_not_validation_errors() {
    let yaml = r#"
items:
  - kind: ""
  - kind: 7
  - kind: [menu]
"#;
    let config = NavbarConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.items.len(), 3);
    for item in &config.items {
        let NavbarItem::Widget(descriptor) = item else {
            panic!("expected a widget descriptor");
        };
        assert_eq!(descriptor.kind_name(), None);
    }
}

#[test]
fn test_missing_kind_is_not_a_validation_error() {
    let config = NavbarConfig::from_yaml("items:\n  - text: orphan\n").unwrap();
    assert_eq!(config.items.len(), 1);
}

#[test]
fn test_yaml_round_trip_of_sample() {
    let sample = NavbarConfig::sample();
    let yaml = sample.to_yaml().unwrap();
    let parsed = NavbarConfig::from_yaml(&yaml).unwrap();
    assert_eq!(parsed, sample);
}

#[test]
fn test_json_round_trip_of_sample() {
    let sample = NavbarConfig::sample();
    let json = sample.to_json().unwrap();
    let parsed = NavbarConfig::from_json(&json).unwrap();
    assert_eq!(parsed, sample);
}

#[test]
fn test_config_format_from_path() {
    assert_eq!(
        ConfigFormat::from_path(Path::new("nav.yaml")),
        Some(ConfigFormat::Yaml)
    );
    assert_eq!(
        ConfigFormat::from_path(Path::new("nav.YML")),
        Some(ConfigFormat::Yaml)
    );
    assert_eq!(
        ConfigFormat::from_path(Path::new("nav.json")),
        Some(ConfigFormat::Json)
    );
    assert_eq!(ConfigFormat::from_path(Path::new("nav.toml")), None);
    assert_eq!(ConfigFormat::from_path(Path::new("nav")), None);
}

#[test]
fn test_config_load_from_file() {
    use std::io::Write;
    use tempfile::Builder;

    let mut file = Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "brand: Acme").unwrap();
    writeln!(file, "fluid: true").unwrap();

    let config = NavbarConfig::load(file.path()).unwrap();
    assert_eq!(config.brand, BrandSetting::Markup("Acme".to_string()));
    assert!(config.fluid);
}

#[test]
fn test_config_load_json_file() {
    use std::io::Write;
    use tempfile::Builder;

    let mut file = Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"collapsible": true}}"#).unwrap();

    let config = NavbarConfig::load(file.path()).unwrap();
    assert!(config.collapsible);
}

#[test]
fn test_config_load_missing_file() {
    let err = NavbarConfig::load("/nonexistent/path/navbar.yaml").unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
    assert_eq!(err.exit_code(), crate::exit_codes::IO_FAILURE);
}

#[test]
fn test_config_load_unknown_extension() {
    let err = NavbarConfig::load("/tmp/navbar.toml").unwrap_err();
    assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);
}
