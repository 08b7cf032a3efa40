//! Platform-windows crate: Windows hardware identity collection.
//!
//! Supplies the collaborators the identity resolver consults (the `RSMB`
//! firmware table, the registry and CIM queries) and the per-section
//! collectors behind [`WindowsPlatform`]. Off Windows every source is a
//! stub, so the crate builds and its parsers test on any host.

pub mod cim;
pub mod collectors;
pub mod firmware;
pub mod registry;
mod windows_cmd;

use inventory::{HardwareItem, HardwarePlatform, IdentityResolver, ResolverOptions, Section};

pub use cim::CimQuery;
pub use firmware::RsmbSource;
pub use registry::RegistryStore;

pub fn platform_name() -> &'static str {
    "windows"
}

#[derive(Debug, Default, Clone)]
pub struct WindowsPlatform {
    options: ResolverOptions,
}

impl WindowsPlatform {
    pub fn new(options: ResolverOptions) -> Self {
        Self { options }
    }

    fn identity(&self) -> Vec<HardwareItem> {
        IdentityResolver::new(&RegistryStore, &CimQuery)
            .with_options(self.options)
            .collect(&RsmbSource)
    }
}

impl HardwarePlatform for WindowsPlatform {
    fn name(&self) -> &'static str {
        platform_name()
    }

    fn collect(&self, section: Section) -> Vec<HardwareItem> {
        match section {
            Section::Bios => self.identity(),
            Section::Cpu => collectors::cpu::collect_cpu(),
            Section::Disk => collectors::disk::collect_disks(),
            Section::Gpu => collectors::gpu::collect_gpus(),
            Section::Network => collectors::nic::collect_nics(),
            Section::Monitor => collectors::monitor::collect_monitors(),
            Section::Usb => collectors::usb::collect_usb(),
            Section::Arp => collectors::arp::collect_arp(),
        }
    }
}
