//! Implementation of the `navbar render` command.

use crate::cli::{AppArgs, RenderArgs};
use navbar::collapse::BootstrapCollapse;
use navbar::config::NavbarConfig;
use navbar::context::AppContext;
use navbar::error::{NavbarError, Result};
use navbar::items::BuiltinItems;
use navbar::render::NavbarRenderer;
use tracing::info;

/// Execute the `navbar render` command.
///
/// Loads the config, renders it with the built-in item kinds, and writes
/// the fragment to `--output` or stdout.
pub fn cmd_render(args: RenderArgs) -> Result<()> {
    let html = render_file(&args)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", html)).map_err(|e| {
                NavbarError::IoError(format!("failed to write '{}': {}", path.display(), e))
            })?;
            info!(path = %path.display(), bytes = html.len(), "wrote navbar");
        }
        None => println!("{}", html),
    }

    Ok(())
}

fn render_file(args: &RenderArgs) -> Result<String> {
    let config = NavbarConfig::load(&args.config)?;
    let app = app_context(&args.app);
    let items = BuiltinItems::new();

    NavbarRenderer::new(&app, BootstrapCollapse::global(), &items).render_to_string(config)
}

pub(crate) fn app_context(args: &AppArgs) -> AppContext {
    let app = AppContext::new(args.app_name.clone(), args.home_url.clone())
        .with_base_url(args.base_url.clone());
    match &args.current_url {
        Some(url) => app.with_current_url(url.clone()),
        None => app,
    }
}
