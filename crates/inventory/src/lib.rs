//! Hardware identity inventory.
//!
//! Platform-independent half of the checker: the item model, the
//! collaborator traits implemented by `platform-windows` and
//! `platform-linux`, the firmware identity resolver with its serial fallback
//! chains, and the pure extractors shared by the per-section collectors.

pub mod devices;
pub mod edid;
pub mod fallback;
pub mod identity;
pub mod instance;
mod item;
pub mod network;
mod section;
pub mod serial;
pub mod sources;

#[cfg(any(test, feature = "test-support"))]
pub mod fixtures;

pub use identity::{IdentityResolver, ResolverOptions};
pub use item::{or_placeholder, HardwareItem};
pub use section::Section;
pub use serial::is_valid_serial;
pub use sources::{ConfigStore, FirmwareTableSource, ManagementQuery, NoManagementQuery};

pub use smbios_table::NOT_PRESENT;

/// A per-OS collector backend.
pub trait HardwarePlatform {
    fn name(&self) -> &'static str;

    /// Collect one section. Never fails: unavailable data is reported as
    /// items carrying sentinel values or a single informational item.
    fn collect(&self, section: Section) -> Vec<HardwareItem>;
}

#[cfg(test)]
mod tests;
