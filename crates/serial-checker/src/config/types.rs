use std::path::PathBuf;

use inventory::Section;

use super::constants::{DEFAULT_LOG_LEVEL, DEFAULT_PROCFS_ROOT, DEFAULT_SYSFS_ROOT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct CheckerConfig {
    pub sections: Vec<Section>,
    pub format: ReportFormat,
    pub duplicate_version: bool,
    pub log_level: String,
    pub sysfs_root: PathBuf,
    pub procfs_root: PathBuf,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            sections: Section::ALL.to_vec(),
            format: ReportFormat::Text,
            duplicate_version: true,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            sysfs_root: PathBuf::from(DEFAULT_SYSFS_ROOT),
            procfs_root: PathBuf::from(DEFAULT_PROCFS_ROOT),
        }
    }
}
