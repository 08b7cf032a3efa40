//! USB devices under `/sys/bus/usb/devices`, described with Windows-style
//! instance ids so serial extraction is shared with the PnP path.

use std::path::Path;

use inventory::instance::{usb_items, UsbDevice};
use inventory::HardwareItem;

use crate::sysfs::{read_value, sorted_entries, SysRoots};

const MASS_STORAGE_CLASS: &str = "08";

pub fn collect_usb(roots: &SysRoots) -> Vec<HardwareItem> {
    usb_items(&read_devices(roots))
}

pub(crate) fn read_devices(roots: &SysRoots) -> Vec<UsbDevice> {
    let entries = sorted_entries(&roots.sys("bus/usb/devices"));
    let mut devices = Vec::new();

    for (name, path) in &entries {
        // Root hubs are `usbN`; interfaces carry a `:config.interface` suffix.
        if name.starts_with("usb") || name.contains(':') {
            continue;
        }
        let (Some(vendor), Some(product_id)) = (
            read_value(&path.join("idVendor")),
            read_value(&path.join("idProduct")),
        ) else {
            continue;
        };
        let serial = read_value(&path.join("serial"));
        let friendly_name = read_value(&path.join("product"));

        let interface_prefix = format!("{name}:");
        let mass_storage = entries.iter().any(|(other, iface)| {
            other.starts_with(&interface_prefix) && is_mass_storage(iface)
        });

        let (enumerator, instance_id) = if mass_storage {
            let manufacturer = read_value(&path.join("manufacturer")).unwrap_or_default();
            let product = friendly_name.clone().unwrap_or_default();
            (
                "USBSTOR",
                format!(
                    "USBSTOR\\Disk&Ven_{}&Prod_{}\\{}&0",
                    token(&manufacturer),
                    token(&product),
                    serial.as_deref().unwrap_or("0")
                ),
            )
        } else {
            let tail = match &serial {
                Some(serial) => serial.clone(),
                None => format!("{}&{}", busnum(path), name),
            };
            (
                "USB",
                format!(
                    "USB\\VID_{}&PID_{}\\{}",
                    vendor.to_uppercase(),
                    product_id.to_uppercase(),
                    tail
                ),
            )
        };

        devices.push(UsbDevice {
            enumerator: enumerator.to_string(),
            friendly_name,
            instance_id,
        });
    }
    devices
}

fn is_mass_storage(interface: &Path) -> bool {
    read_value(&interface.join("bInterfaceClass")).as_deref() == Some(MASS_STORAGE_CLASS)
}

fn busnum(path: &Path) -> String {
    read_value(&path.join("busnum")).unwrap_or_else(|| "0".to_string())
}

/// Instance-id segments cannot hold spaces or separators.
fn token(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
