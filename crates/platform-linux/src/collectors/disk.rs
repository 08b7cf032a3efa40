//! Physical drives under `/sys/block`.

use std::fs;
use std::path::Path;

use inventory::devices::{disk_items, DiskReading};
use inventory::HardwareItem;

use crate::sysfs::{read_value, sorted_entries, SysRoots};

const DISK_PREFIXES: [&str; 5] = ["sd", "nvme", "vd", "xvd", "hd"];

pub fn collect_disks(roots: &SysRoots) -> Vec<HardwareItem> {
    disk_items(&read_disks(roots))
}

pub(crate) fn read_disks(roots: &SysRoots) -> Vec<DiskReading> {
    sorted_entries(&roots.sys("block"))
        .into_iter()
        .filter(|(name, _)| DISK_PREFIXES.iter().any(|prefix| name.starts_with(prefix)))
        .zip(0u32..)
        .map(|((_, path), index)| {
            let device = path.join("device");
            DiskReading {
                index,
                serial: disk_serial(&device).unwrap_or_default(),
                model: read_value(&device.join("model")).unwrap_or_default(),
            }
        })
        .collect()
}

fn disk_serial(device: &Path) -> Option<String> {
    read_value(&device.join("serial"))
        .or_else(|| fs::read(device.join("vpd_pg80")).ok().and_then(|page| unit_serial(&page)))
}

/// Unit serial number from a SCSI VPD page 0x80.
pub(crate) fn unit_serial(page: &[u8]) -> Option<String> {
    if page.len() < 4 || page[1] != 0x80 {
        return None;
    }
    let len = u16::from_be_bytes([page[2], page[3]]) as usize;
    let body = page.get(4..4 + len).unwrap_or(&page[4..]);
    let serial = String::from_utf8_lossy(body).trim().to_string();
    (!serial.is_empty()).then_some(serial)
}
