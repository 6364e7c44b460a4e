//! Implementation of the `navbar sample` command.

use crate::cli::{SampleArgs, SampleFormat};
use navbar::config::NavbarConfig;
use navbar::error::Result;

/// Execute the `navbar sample` command.
pub fn cmd_sample(args: SampleArgs) -> Result<()> {
    print!("{}", sample_text(args.format)?);
    Ok(())
}

fn sample_text(format: SampleFormat) -> Result<String> {
    let sample = NavbarConfig::sample();
    match format {
        SampleFormat::Yaml => sample.to_yaml(),
        SampleFormat::Json => sample.to_json().map(|json| format!("{}\n", json)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_sample_parses_back() {
        let text = sample_text(SampleFormat::Yaml).unwrap();
        let parsed = NavbarConfig::from_yaml(&text).unwrap();
        assert_eq!(parsed, NavbarConfig::sample());
    }

    #[test]
    fn json_sample_parses_back() {
        let text = sample_text(SampleFormat::Json).unwrap();
        assert!(text.ends_with('\n'));
        let parsed = NavbarConfig::from_json(&text).unwrap();
        assert_eq!(parsed, NavbarConfig::sample());
    }
}
