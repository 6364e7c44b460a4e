//! Navbar rendering.
//!
//! [`NavbarRenderer`] turns a [`NavbarConfig`] into a Bootstrap 3 navbar
//! fragment:
//!
//! ```text
//! nav.navbar
//! └── div.container | div.container-fluid
//!     ├── div.navbar-header
//!     │   ├── button.navbar-toggle      (collapsible only)
//!     │   └── a.navbar-brand | span.navbar-brand
//!     └── div#collapse_N.navbar-collapse (collapsible only)
//!         └── items…
//! ```
//!
//! Collaborators are passed in explicitly: the [`AppContext`] supplies
//! brand defaults, the [`CollapseContainer`] allocates the collapse id and
//! wraps items, and the [`ItemFactory`] renders item descriptors.

mod brand;
mod classes;


pub use brand::Brand;
pub use classes::{container_class, navbar_classes};

use crate::collapse::{self, CollapseContainer, CollapseOptions};
use crate::config::NavbarConfig;
use crate::context::AppContext;
use crate::error::Result;
use crate::html::{self, Attributes};
use crate::items::{ItemError, ItemFactory, NavbarItem};
use std::fmt::Write;
use tracing::{debug, warn};

/// Renders navbars against a fixed set of collaborators.
pub struct NavbarRenderer<'a> {
    app: &'a AppContext,
    collapse: &'a dyn CollapseContainer,
    items: &'a dyn ItemFactory,
}

impl<'a> NavbarRenderer<'a> {
    pub fn new(
        app: &'a AppContext,
        collapse: &'a dyn CollapseContainer,
        items: &'a dyn ItemFactory,
    ) -> Self {
        Self {
            app,
            collapse,
            items,
        }
    }

    /// Render `config` into a new string.
    pub fn render_to_string(&self, config: NavbarConfig) -> Result<String> {
        let mut out = String::new();
        self.render(config, &mut out)?;
        Ok(out)
    }

    /// Stream the navbar for `config` into `out`.
    ///
    /// Exactly one collapse id is allocated per call, whether or not the
    /// navbar is collapsible. Items that cannot be rendered are skipped with
    /// a warning; only a failing sink aborts the render.
    pub fn render(&self, config: NavbarConfig, out: &mut dyn Write) -> std::fmt::Result {
        let classes = navbar_classes(&config).join(" ");
        let NavbarConfig {
            brand,
            brand_url,
            brand_attributes,
            fluid,
            collapsible,
            container_attributes: mut container_attrs,
            items,
            ..
        } = config;

        let brand = Brand::resolve(self.app, brand, brand_url, brand_attributes);
        container_attrs.append_class(&classes);

        html::open_tag(out, "nav", &container_attrs)?;
        write!(out, "<div class=\"{}\">", container_class(fluid))?;

        let collapse_id = self.collapse.next_id();
        debug!(classes = %classes, collapse_id = %collapse_id, "rendering navbar");

        out.write_str("<div class=\"navbar-header\">")?;
        if collapsible {
            write_toggle(out, &collapse_id)?;
        }
        if let Some(brand) = &brand {
            brand.write_to(out)?;
        }
        out.write_str("</div>")?;

        if collapsible {
            let options = CollapseOptions {
                // navbars start collapsed
                toggle: false,
                attributes: Attributes::from_iter([("class", "navbar-collapse")]),
            };
            collapse::with_scope(self.collapse, out, &collapse_id, &options, |out| {
                self.render_items(items, out)
            })?;
        } else {
            self.render_items(items, out)?;
        }

        out.write_str("</div></nav>")
    }

    fn render_items(&self, items: Vec<NavbarItem>, out: &mut dyn Write) -> std::fmt::Result {
        for (index, item) in items.into_iter().enumerate() {
            match item {
                NavbarItem::Markup(markup) => out.write_str(&markup)?,
                NavbarItem::Widget(descriptor) => {
                    let (kind, fields) = descriptor.into_parts();
                    let Some(kind) = kind else {
                        warn!(index, "skipping navbar item without a kind");
                        continue;
                    };
                    let Some(renderer) = self.items.resolve(&kind) else {
                        warn!(index, kind = %kind, "skipping navbar item of unknown kind");
                        continue;
                    };
                    match renderer.render(self.app, &fields, out) {
                        Ok(()) => {}
                        Err(ItemError::Write(e)) => return Err(e),
                        Err(e) => warn!(index, kind = %kind, error = %e, "skipping navbar item"),
                    }
                }
            }
        }
        Ok(())
    }
}

fn write_toggle(out: &mut dyn Write, collapse_id: &str) -> std::fmt::Result {
    write!(
        out,
        "<button type=\"button\" class=\"navbar-toggle\" data-toggle=\"collapse\" data-target=\"#{}\">",
        html::encode(collapse_id)
    )?;
    out.write_str("<span class=\"sr-only\">Toggle navigation</span>")?;
    out.write_str("<span class=\"icon-bar\"></span><span class=\"icon-bar\"></span><span class=\"icon-bar\"></span>")?;
    out.write_str("</button>")
}
