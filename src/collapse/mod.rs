//! Collapsible regions.
//!
//! A navbar asks its [`CollapseContainer`] for a fresh element id, points
//! the toggle button at it, and wraps its items in a region opened with
//! [`CollapseContainer::begin`] and closed with [`CollapseContainer::end`].

use crate::html::{self, Attributes};
use std::fmt::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Prefix of ids handed out by [`BootstrapCollapse`].
pub const ID_PREFIX: &str = "collapse_";

/// Options for opening a collapse region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollapseOptions {
    /// Whether the region starts expanded.
    pub toggle: bool,

    /// Extra attributes for the region's element.
    pub attributes: Attributes,
}

/// A toggleable container that can wrap arbitrary markup.
pub trait CollapseContainer {
    /// Allocate an id that has not been handed out before.
    fn next_id(&self) -> String;

    /// Open the region identified by `id`.
    fn begin(&self, out: &mut dyn Write, id: &str, options: &CollapseOptions) -> fmt::Result;

    /// Close the most recently opened region.
    fn end(&self, out: &mut dyn Write) -> fmt::Result;
}

/// Open a region, write `body` into it, then close it.
pub fn with_scope<F>(
    collapse: &dyn CollapseContainer,
    out: &mut dyn Write,
    id: &str,
    options: &CollapseOptions,
    body: F,
) -> fmt::Result
where
    F: FnOnce(&mut dyn Write) -> fmt::Result,
{
    collapse.begin(out, id, options)?;
    body(out)?;
    collapse.end(out)
}

/// Bootstrap 3 collapse region: `<div id="…" class="collapse">`.
///
/// Ids come from an atomic counter, so one instance can be shared by every
/// render in a process (see [`BootstrapCollapse::global`]).
#[derive(Debug, Default)]
pub struct BootstrapCollapse {
    counter: AtomicUsize,
}

static GLOBAL: BootstrapCollapse = BootstrapCollapse::new();

impl BootstrapCollapse {
    pub const fn new() -> Self {
        Self {
            counter: AtomicUsize::new(0),
        }
    }

    /// The process-wide instance.
    pub fn global() -> &'static BootstrapCollapse {
        &GLOBAL
    }
}

impl CollapseContainer for BootstrapCollapse {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{}{}", ID_PREFIX, n)
    }

    fn begin(&self, out: &mut dyn Write, id: &str, options: &CollapseOptions) -> fmt::Result {
        let mut attrs = Attributes::new();
        attrs.set("id", id);
        for (name, value) in options.attributes.iter() {
            if name != "id" {
                attrs.set(name, value);
            }
        }
        attrs.append_class("collapse");
        if options.toggle {
            attrs.append_class("in");
        }
        html::open_tag(out, "div", &attrs)
    }

    fn end(&self, out: &mut dyn Write) -> fmt::Result {
        html::close_tag(out, "div")
    }
}
