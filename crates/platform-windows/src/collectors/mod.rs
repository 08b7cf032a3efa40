//! Per-section collectors.
//!
//! Each collector gathers raw readings through `reg.exe` or a PowerShell CIM
//! query and hands them to the shared item builders in `inventory`. Parsing
//! is kept in plain functions over the command output so it is testable on
//! any host.

use inventory::HardwareItem;

pub mod arp;
pub mod cpu;
pub mod disk;
pub mod gpu;
pub mod monitor;
pub mod nic;
pub mod usb;

/// Single error item for a section whose source could not be read at all.
pub(crate) fn source_error(category: &str, message: &str) -> Vec<HardwareItem> {
    tracing::warn!(category, message, "hardware source unavailable");
    vec![HardwareItem::new(category, "error", message)]
}
