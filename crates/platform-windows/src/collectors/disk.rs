//! Physical drive serials and models from `Win32_DiskDrive`.

use inventory::devices::{disk_items, DiskReading};
use inventory::HardwareItem;
#[cfg(any(test, target_os = "windows"))]
use serde_json::Value;

#[cfg(any(test, target_os = "windows"))]
use crate::cim::{json_records, json_str};

pub fn collect_disks() -> Vec<HardwareItem> {
    disk_items(&read_disks())
}

fn read_disks() -> Vec<DiskReading> {
    #[cfg(target_os = "windows")]
    {
        let cmd = "Get-CimInstance Win32_DiskDrive | Select-Object Index,SerialNumber,Model | ConvertTo-Json -Compress";
        crate::cim::run_powershell(cmd)
            .map(|json| parse_disks_json(&json))
            .unwrap_or_default()
    }
    #[cfg(not(target_os = "windows"))]
    {
        tracing::warn!("read_disks is a stub on non-Windows");
        Vec::new()
    }
}

#[cfg(any(test, target_os = "windows"))]
fn parse_disks_json(raw: &str) -> Vec<DiskReading> {
    let mut disks: Vec<DiskReading> = json_records(raw)
        .iter()
        .filter_map(|record| {
            let index = record.get("Index").and_then(Value::as_u64)?;
            Some(DiskReading {
                index: u32::try_from(index).ok()?,
                serial: json_str(record, "SerialNumber").unwrap_or_default(),
                model: json_str(record, "Model").unwrap_or_default(),
            })
        })
        .collect();
    disks.sort_by_key(|disk| disk.index);
    disks
}
