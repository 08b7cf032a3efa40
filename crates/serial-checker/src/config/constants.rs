pub(super) const CONFIG_ENV: &str = "SERIAL_CHECKER_CONFIG";
pub(super) const CONFIG_CANDIDATES: [&str; 2] =
    ["./serial-checker.toml", "/etc/serial-checker/checker.toml"];

pub(super) const DEFAULT_LOG_LEVEL: &str = "warn";
pub(super) const DEFAULT_SYSFS_ROOT: &str = "/sys";
pub(super) const DEFAULT_PROCFS_ROOT: &str = "/proc";
