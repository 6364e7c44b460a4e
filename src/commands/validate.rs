//! Implementation of the `navbar validate` command.
//!
//! Loading already rejects malformed configs. This command additionally
//! reports settings that are accepted but have no effect: unrecognized
//! variant or position values, and items that rendering would skip.

use crate::cli::ValidateArgs;
use navbar::config::{NavbarConfig, Position, PositionSetting, Variant};
use navbar::error::Result;
use navbar::items::{BuiltinItems, ItemFactory, NavbarItem};
use navbar::render::navbar_classes;

/// Execute the `navbar validate` command.
pub fn cmd_validate(args: ValidateArgs) -> Result<()> {
    let config = NavbarConfig::load(&args.config)?;
    let warnings = collect_warnings(&config, &BuiltinItems::new());

    println!("Config:  {}", args.config.display());
    println!("Classes: {}", navbar_classes(&config).join(" "));
    println!("Items:   {}", config.items.len());

    if warnings.is_empty() {
        println!("OK");
    } else {
        println!();
        for warning in &warnings {
            println!("warning: {}", warning);
        }
    }

    Ok(())
}

/// Settings in `config` that are accepted but ignored when rendering.
pub(crate) fn collect_warnings(config: &NavbarConfig, items: &dyn ItemFactory) -> Vec<String> {
    let mut warnings = Vec::new();

    if let Some(variant) = &config.variant
        && Variant::from_str(variant).is_none()
    {
        warnings.push(format!(
            "variant '{}' is not recognized (expected 'inverse')",
            variant
        ));
    }

    for (field, setting) in [("fixed", &config.fixed), ("static", &config.static_position)] {
        if let PositionSetting::Value(raw) = setting
            && Position::from_str(raw).is_none()
        {
            warnings.push(format!(
                "{} '{}' is not recognized (expected 'top', 'bottom' or false)",
                field, raw
            ));
        }
    }

    for (index, item) in config.items.iter().enumerate() {
        let NavbarItem::Widget(descriptor) = item else {
            continue;
        };
        match (&descriptor.kind, descriptor.kind_name()) {
            (None, _) => warnings.push(format!("items[{}] has no kind and will be skipped", index)),
            (Some(raw), None) => warnings.push(format!(
                "items[{}] has kind {} which is not a non-empty string and will be skipped",
                index, raw
            )),
            (Some(_), Some(kind)) if items.resolve(kind).is_none() => warnings.push(format!(
                "items[{}] has unknown kind '{}' and will be skipped",
                index, kind
            )),
            (Some(_), Some(_)) => {}
        }
    }

    warnings
}
