//! Per-section readers over sysfs and procfs.

pub mod arp;
pub mod cpu;
pub mod disk;
pub mod gpu;
pub mod monitor;
pub mod nic;
pub mod usb;
