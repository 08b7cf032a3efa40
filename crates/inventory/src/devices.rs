//! Item builders for the processor, storage and display-adapter sections.
//!
//! Platforms gather raw readings; the naming and placeholder rules live here
//! so every platform reports the same shape.

use crate::item::{or_placeholder, HardwareItem};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpuReading {
    pub processor: String,
    pub vendor: String,
    pub identifier: String,
    pub mhz: u32,
}

pub fn cpu_items(cpu: &CpuReading) -> Vec<HardwareItem> {
    let mut items = vec![
        HardwareItem::new("cpu", "processor", cpu.processor.as_str()),
        HardwareItem::new("cpu", "vendor", cpu.vendor.as_str()),
        HardwareItem::new("cpu", "identifier", cpu.identifier.as_str()),
    ];
    if cpu.mhz > 0 {
        items.push(HardwareItem::new("cpu", "mhz", cpu.mhz.to_string()));
    }
    items
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskReading {
    pub index: u32,
    pub serial: String,
    pub model: String,
}

pub fn disk_items(disks: &[DiskReading]) -> Vec<HardwareItem> {
    let mut items = Vec::new();
    for disk in disks {
        let notes = format!("physical drive {}", disk.index);
        let serial = disk.serial.trim();
        if !serial.is_empty() {
            items.push(
                HardwareItem::new("disk", format!("serial_{}", disk.index), serial.to_uppercase())
                    .with_notes(notes.as_str()),
            );
        }
        let model = disk.model.trim();
        if !model.is_empty() {
            items.push(
                HardwareItem::new("disk", format!("model_{}", disk.index), model.to_lowercase())
                    .with_notes(notes),
            );
        }
    }
    or_placeholder(
        items,
        "disk",
        "no physical drives found",
        "may require administrator privileges",
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpuReading {
    pub name: String,
    pub driver_version: String,
    pub driver_date: String,
}

pub fn gpu_items(adapters: &[GpuReading]) -> Vec<HardwareItem> {
    let mut items = Vec::new();
    let named = adapters
        .iter()
        .filter(|adapter| crate::serial::is_present(adapter.name.trim()));
    for (index, adapter) in named.enumerate() {
        items.push(HardwareItem::new("gpu", format!("name_{index}"), adapter.name.trim()));
        items.push(HardwareItem::new(
            "gpu",
            format!("driverversion_{index}"),
            adapter.driver_version.as_str(),
        ));
        items.push(HardwareItem::new(
            "gpu",
            format!("driverdate_{index}"),
            adapter.driver_date.as_str(),
        ));
    }
    or_placeholder(items, "gpu", "no display adapters found", "")
}
