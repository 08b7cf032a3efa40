//! Platform-linux crate: hardware identity from sysfs and procfs.
//!
//! The kernel exports the raw SMBIOS table and its own decoded DMI
//! attributes, which stand in for the firmware table provider and the
//! firmware configuration store. There is no management query backend.

pub mod collectors;
pub mod dmi_id;
pub mod firmware;
mod sysfs;

use inventory::{
    HardwareItem, HardwarePlatform, IdentityResolver, NoManagementQuery, ResolverOptions, Section,
};

pub use dmi_id::DmiIdStore;
pub use firmware::DmiTableSource;
pub use sysfs::SysRoots;

pub fn platform_name() -> &'static str {
    "linux"
}

#[derive(Debug, Default, Clone)]
pub struct LinuxPlatform {
    roots: SysRoots,
    options: ResolverOptions,
}

impl LinuxPlatform {
    pub fn new(options: ResolverOptions) -> Self {
        Self {
            roots: SysRoots::default(),
            options,
        }
    }

    pub fn with_roots(mut self, roots: SysRoots) -> Self {
        self.roots = roots;
        self
    }

    fn identity(&self) -> Vec<HardwareItem> {
        let store = DmiIdStore::new(self.roots.clone());
        IdentityResolver::new(&store, &NoManagementQuery)
            .with_options(self.options)
            .collect(&DmiTableSource::new(self.roots.clone()))
    }
}

impl HardwarePlatform for LinuxPlatform {
    fn name(&self) -> &'static str {
        platform_name()
    }

    fn collect(&self, section: Section) -> Vec<HardwareItem> {
        match section {
            Section::Bios => self.identity(),
            Section::Cpu => collectors::cpu::collect_cpu(&self.roots),
            Section::Disk => collectors::disk::collect_disks(&self.roots),
            Section::Gpu => collectors::gpu::collect_gpus(&self.roots),
            Section::Network => collectors::nic::collect_nics(&self.roots),
            Section::Monitor => collectors::monitor::collect_monitors(&self.roots),
            Section::Usb => collectors::usb::collect_usb(&self.roots),
            Section::Arp => collectors::arp::collect_arp(&self.roots),
        }
    }
}

#[cfg(test)]
mod tests;
