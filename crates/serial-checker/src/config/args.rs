use std::path::PathBuf;

use anyhow::{Context, Result};

use super::types::{CheckerConfig, ReportFormat};
use super::util::parse_sections;

pub(crate) const USAGE: &str = "usage: serial-checker [--json | --text] [--section <name>]... [--config <path>]";

/// Command-line flags; the last of `--json`/`--text` wins.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub format: Option<ReportFormat>,
    pub sections: Vec<String>,
    pub config: Option<PathBuf>,
    pub help: bool,
}

impl CliArgs {
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => parsed.format = Some(ReportFormat::Json),
                "--text" => parsed.format = Some(ReportFormat::Text),
                "--section" => {
                    let name = args.next().context("--section requires a value")?;
                    parsed.sections.push(name);
                }
                "--config" => {
                    let path = args.next().context("--config requires a value")?;
                    parsed.config = Some(PathBuf::from(path));
                }
                "-h" | "--help" => parsed.help = true,
                other => {
                    if let Some(name) = other.strip_prefix("--section=") {
                        parsed.sections.push(name.to_string());
                    } else if let Some(path) = other.strip_prefix("--config=") {
                        parsed.config = Some(PathBuf::from(path));
                    } else {
                        anyhow::bail!("unrecognized argument `{other}`\n{USAGE}");
                    }
                }
            }
        }
        Ok(parsed)
    }
}

impl CheckerConfig {
    pub(super) fn apply_cli(&mut self, args: &CliArgs) {
        if let Some(format) = args.format {
            self.format = format;
        }
        if !args.sections.is_empty() {
            self.sections = parse_sections(&args.sections);
        }
    }
}
