use super::types::CheckerConfig;
use super::util::{env_non_empty, parse_bool, parse_format, parse_sections, split_csv};

impl CheckerConfig {
    pub(super) fn apply_env_overrides(&mut self) {
        self.apply_env_report();
        self.apply_env_identity();
        self.apply_env_logging();
        self.apply_env_linux();
    }

    fn apply_env_report(&mut self) {
        if let Some(v) = env_non_empty("SERIAL_CHECKER_SECTIONS") {
            self.sections = parse_sections(&split_csv(&v));
        }
        if let Some(v) = env_non_empty("SERIAL_CHECKER_FORMAT") {
            match parse_format(&v) {
                Some(format) => self.format = format,
                None => tracing::warn!(format = %v, "ignoring unknown report format"),
            }
        }
    }

    fn apply_env_identity(&mut self) {
        if let Some(v) = env_non_empty("SERIAL_CHECKER_DUPLICATE_VERSION") {
            self.duplicate_version = parse_bool(&v);
        }
    }

    fn apply_env_logging(&mut self) {
        if let Some(v) = env_non_empty("SERIAL_CHECKER_LOG") {
            self.log_level = v;
        }
    }

    fn apply_env_linux(&mut self) {
        if let Some(v) = env_non_empty("SERIAL_CHECKER_SYSFS_ROOT") {
            self.sysfs_root = v.into();
        }
        if let Some(v) = env_non_empty("SERIAL_CHECKER_PROCFS_ROOT") {
            self.procfs_root = v.into();
        }
    }
}
