use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::paths::resolve_config_path;
use super::types::CheckerConfig;
use super::util::{non_empty, parse_format, parse_sections};

impl CheckerConfig {
    pub(super) fn apply_file_config(&mut self, explicit: Option<&Path>) -> Result<bool> {
        let Some(path) = resolve_config_path(explicit)? else {
            return Ok(false);
        };

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("failed reading config file {}", path.display()))?;
        let file_cfg: FileConfig = toml::from_str(&raw)
            .with_context(|| format!("failed parsing TOML config {}", path.display()))?;

        self.apply_file_report(file_cfg.report);
        self.apply_file_identity(file_cfg.identity);
        self.apply_file_logging(file_cfg.logging);
        self.apply_file_linux(file_cfg.linux);

        tracing::debug!(path = %path.display(), "configuration file applied");
        Ok(true)
    }

    fn apply_file_report(&mut self, report: Option<FileReportConfig>) {
        let Some(report) = report else {
            return;
        };

        if let Some(sections) = report.sections {
            self.sections = parse_sections(&sections);
        }
        if let Some(v) = non_empty(report.format) {
            match parse_format(&v) {
                Some(format) => self.format = format,
                None => tracing::warn!(format = %v, "ignoring unknown report format"),
            }
        }
    }

    fn apply_file_identity(&mut self, identity: Option<FileIdentityConfig>) {
        if let Some(v) = identity.and_then(|identity| identity.duplicate_version) {
            self.duplicate_version = v;
        }
    }

    fn apply_file_logging(&mut self, logging: Option<FileLoggingConfig>) {
        if let Some(v) = non_empty(logging.and_then(|logging| logging.level)) {
            self.log_level = v;
        }
    }

    fn apply_file_linux(&mut self, linux: Option<FileLinuxConfig>) {
        let Some(linux) = linux else {
            return;
        };

        if let Some(v) = non_empty(linux.sysfs_root) {
            self.sysfs_root = v.into();
        }
        if let Some(v) = non_empty(linux.procfs_root) {
            self.procfs_root = v.into();
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    #[serde(default)]
    report: Option<FileReportConfig>,
    #[serde(default)]
    identity: Option<FileIdentityConfig>,
    #[serde(default)]
    logging: Option<FileLoggingConfig>,
    #[serde(default)]
    linux: Option<FileLinuxConfig>,
}

#[derive(Debug, Deserialize, Default)]
struct FileReportConfig {
    #[serde(default)]
    sections: Option<Vec<String>>,
    #[serde(default)]
    format: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct FileIdentityConfig {
    #[serde(default)]
    duplicate_version: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
struct FileLoggingConfig {
    #[serde(default)]
    level: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct FileLinuxConfig {
    #[serde(default)]
    sysfs_root: Option<String>,
    #[serde(default)]
    procfs_root: Option<String>,
}
