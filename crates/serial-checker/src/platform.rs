use inventory::{HardwareItem, HardwarePlatform, ResolverOptions, Section};

use crate::config::CheckerConfig;

#[cfg(target_os = "linux")]
pub fn detect(config: &CheckerConfig) -> Box<dyn HardwarePlatform> {
    let roots = platform_linux::SysRoots::new(&config.sysfs_root, &config.procfs_root);
    Box::new(platform_linux::LinuxPlatform::new(resolver_options(config)).with_roots(roots))
}

#[cfg(target_os = "windows")]
pub fn detect(config: &CheckerConfig) -> Box<dyn HardwarePlatform> {
    Box::new(platform_windows::WindowsPlatform::new(resolver_options(config)))
}

#[cfg(not(any(target_os = "linux", target_os = "windows")))]
pub fn detect(config: &CheckerConfig) -> Box<dyn HardwarePlatform> {
    let _ = resolver_options(config);
    Box::new(UnsupportedPlatform)
}

fn resolver_options(config: &CheckerConfig) -> ResolverOptions {
    ResolverOptions {
        duplicate_version: config.duplicate_version,
    }
}

/// Hosts without a collector backend report one informational item per
/// section.
#[cfg_attr(any(target_os = "linux", target_os = "windows"), allow(dead_code))]
pub struct UnsupportedPlatform;

impl HardwarePlatform for UnsupportedPlatform {
    fn name(&self) -> &'static str {
        "unsupported"
    }

    fn collect(&self, section: Section) -> Vec<HardwareItem> {
        tracing::warn!(section = section.key(), "hardware collection is a stub on this OS");
        vec![HardwareItem::new(
            section.key(),
            "info",
            "hardware collection is not supported on this platform",
        )]
    }
}
