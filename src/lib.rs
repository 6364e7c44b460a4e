//! Navbar: Bootstrap navigation bar rendering.
//!
//! The library renders a Bootstrap 3 navbar from a [`config::NavbarConfig`].
//! Rendering is a plain function of the config and three collaborators:
//!
//! - [`context::AppContext`] for brand defaults and URL normalization
//! - [`collapse::CollapseContainer`] for the collapse region and its id
//! - [`items::ItemFactory`] for child item descriptors
//!
//! ```
//! use navbar::collapse::BootstrapCollapse;
//! use navbar::config::NavbarConfig;
//! use navbar::context::AppContext;
//! use navbar::items::BuiltinItems;
//! use navbar::render::NavbarRenderer;
//!
//! let config = NavbarConfig::from_yaml("brand: Acme\nbrand_url: /\nfixed: top\n")?;
//! let app = AppContext::default();
//! let collapse = BootstrapCollapse::new();
//! let items = BuiltinItems::new();
//!
//! let html = NavbarRenderer::new(&app, &collapse, &items).render_to_string(config)?;
//! assert!(html.starts_with(r#"<nav class="navbar navbar-fixed-top">"#));
//! # Ok::<(), navbar::error::NavbarError>(())
//! ```

pub mod collapse;
pub mod config;
pub mod context;
pub mod error;
pub mod exit_codes;
pub mod html;
pub mod items;
pub mod render;
