//! CLI argument parsing for navbar.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Navbar: render Bootstrap navigation bars from YAML or JSON configuration.
///
/// A config file describes one navbar (brand, placement, collapse behaviour
/// and child items); `render` turns it into an HTML fragment.
#[derive(Parser, Debug)]
#[command(name = "navbar")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for navbar.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a navbar config to HTML.
    ///
    /// Writes the fragment to stdout, or to the file given with --output.
    Render(RenderArgs),

    /// Check a navbar config without rendering it.
    ///
    /// Reports the classes the navbar will carry and any items that
    /// would be skipped.
    Validate(ValidateArgs),

    /// Print an example navbar config.
    Sample(SampleArgs),
}

/// Application facts used for brand defaults and route URLs.
#[derive(clap::Args, Debug, Clone)]
pub struct AppArgs {
    /// Application name shown when the config sets no brand.
    #[arg(long, default_value = navbar::context::DEFAULT_DISPLAY_NAME)]
    pub app_name: String,

    /// Home URL linked when the config sets no brand_url.
    #[arg(long, default_value = navbar::context::DEFAULT_HOME_URL)]
    pub home_url: String,

    /// Prefix for route-style URLs.
    #[arg(long, default_value = "")]
    pub base_url: String,

    /// URL of the page being rendered; empty URLs resolve to it.
    #[arg(long)]
    pub current_url: Option<String>,
}

/// Arguments for the `render` command.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Path to the navbar config (.yaml, .yml or .json).
    pub config: PathBuf,

    #[command(flatten)]
    pub app: AppArgs,

    /// Write the fragment to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `validate` command.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the navbar config (.yaml, .yml or .json).
    pub config: PathBuf,
}

/// Output format for the `sample` command.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleFormat {
    #[default]
    Yaml,
    Json,
}

/// Arguments for the `sample` command.
#[derive(Parser, Debug)]
pub struct SampleArgs {
    /// Format of the printed config.
    #[arg(short, long, value_enum, default_value_t = SampleFormat::Yaml)]
    pub format: SampleFormat,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
