//! Brand resolution.

use crate::config::{BrandSetting, UrlSetting};
use crate::context::{AppContext, UrlTarget};
use crate::html::{self, Attributes};
use std::fmt::{self, Write};

/// A brand ready to emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brand {
    /// Markup placed inside the brand element, unencoded.
    pub content: String,
    /// Element attributes. Carries `href` only when the brand is a link.
    pub attributes: Attributes,
    pub is_link: bool,
}

impl Brand {
    /// Resolve the brand settings against the application context.
    ///
    /// Returns `None` when the brand is disabled.
    pub fn resolve(
        app: &AppContext,
        brand: BrandSetting,
        brand_url: UrlSetting,
        mut attributes: Attributes,
    ) -> Option<Brand> {
        let content = match brand {
            BrandSetting::Disabled => return None,
            BrandSetting::Unset => html::encode(&app.display_name),
            BrandSetting::Markup(markup) => markup,
        };

        let href = match brand_url {
            UrlSetting::Disabled => None,
            UrlSetting::Unset => Some(app.normalize_url(&UrlTarget::from(app.home_url.as_str()))),
            UrlSetting::Url(target) => Some(app.normalize_url(&target)),
        };

        let is_link = href.is_some();
        match href {
            Some(href) => attributes.set("href", href),
            // spans cannot carry href
            None => {
                attributes.remove("href");
            }
        }
        attributes.append_class("navbar-brand");

        Some(Brand {
            content,
            attributes,
            is_link,
        })
    }

    /// Write the brand as `<a>` or `<span>`.
    pub fn write_to(&self, out: &mut dyn Write) -> fmt::Result {
        let tag = if self.is_link { "a" } else { "span" };
        html::element(out, tag, &self.attributes, &self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> AppContext {
        AppContext::new("Tom & Jerry", "/index.php")
    }

    fn rendered(brand: &Brand) -> String {
        let mut out = String::new();
        brand.write_to(&mut out).unwrap();
        out
    }

    #[test]
    fn disabled_brand_resolves_to_none() {
        let brand = Brand::resolve(
            &app(),
            BrandSetting::Disabled,
            UrlSetting::Url("/".into()),
            Attributes::new(),
        );
        assert!(brand.is_none());
    }

    #[test]
    fn defaults_come_from_app_context() {
        let brand = Brand::resolve(
            &app(),
            BrandSetting::Unset,
            UrlSetting::Unset,
            Attributes::new(),
        )
        .unwrap();
        assert_eq!(
            rendered(&brand),
            r#"<a href="/index.php" class="navbar-brand">Tom &amp; Jerry</a>"#
        );
    }

    #[test]
    fn markup_is_not_encoded() {
        let brand = Brand::resolve(
            &app(),
            BrandSetting::Markup("<b>Acme</b>".to_string()),
            UrlSetting::Url("/".into()),
            Attributes::new(),
        )
        .unwrap();
        assert_eq!(brand.content, "<b>Acme</b>");
    }

    #[test]
    fn existing_class_is_extended() {
        let attrs: Attributes = [("class", "logo"), ("id", "brand")].into_iter().collect();
        let brand = Brand::resolve(
            &app(),
            BrandSetting::Markup("Acme".to_string()),
            UrlSetting::Url("/home".into()),
            attrs,
        )
        .unwrap();
        assert_eq!(brand.attributes.get("class"), Some("logo navbar-brand"));
        assert_eq!(
            rendered(&brand),
            r#"<a class="logo navbar-brand" id="brand" href="/home">Acme</a>"#
        );
    }

    #[test]
    fn disabled_url_yields_span_without_href() {
        let attrs: Attributes = [("href", "/sneaky")].into_iter().collect();
        let brand = Brand::resolve(
            &app(),
            BrandSetting::Markup("Acme".to_string()),
            UrlSetting::Disabled,
            attrs,
        )
        .unwrap();
        assert!(!brand.is_link);
        assert!(!brand.attributes.contains("href"));
        assert_eq!(rendered(&brand), r#"<span class="navbar-brand">Acme</span>"#);
    }
}
