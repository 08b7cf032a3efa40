//! Present USB and USB-storage devices from `Get-PnpDevice`.

use inventory::instance::{usb_items, UsbDevice};
use inventory::HardwareItem;

use crate::collectors::source_error;

#[cfg(any(test, target_os = "windows"))]
use crate::cim::{json_records, json_str};
#[cfg(any(test, target_os = "windows"))]
use inventory::instance::enumerator_of;

pub fn collect_usb() -> Vec<HardwareItem> {
    usb_report(read_devices())
}

fn usb_report(devices: Option<Vec<UsbDevice>>) -> Vec<HardwareItem> {
    match devices {
        Some(devices) => usb_items(&devices),
        None => source_error("usb", "device enumeration failed"),
    }
}

fn read_devices() -> Option<Vec<UsbDevice>> {
    #[cfg(target_os = "windows")]
    {
        let cmd = "Get-PnpDevice -PresentOnly -ErrorAction SilentlyContinue | Where-Object { $_.InstanceId -match '^USB(STOR)?\\\\' } | Select-Object FriendlyName,InstanceId | ConvertTo-Json -Compress";
        crate::cim::run_script(cmd).map(|json| parse_devices_json(&json))
    }
    #[cfg(not(target_os = "windows"))]
    {
        tracing::warn!("read_devices is a stub on non-Windows");
        None
    }
}

#[cfg(any(test, target_os = "windows"))]
fn parse_devices_json(raw: &str) -> Vec<UsbDevice> {
    json_records(raw)
        .iter()
        .filter_map(|record| {
            let instance_id = json_str(record, "InstanceId")?;
            Some(UsbDevice {
                enumerator: enumerator_of(&instance_id).to_string(),
                friendly_name: json_str(record, "FriendlyName"),
                instance_id,
            })
        })
        .collect()
}
