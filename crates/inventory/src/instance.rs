//! Serial numbers embedded in device instance paths.
//!
//! Instance paths look like `USB\VID_0781&PID_5581\4C530001230101115093`
//! or `USBSTOR\Disk&Ven_SanDisk&Prod_Ultra&Rev_1.00\4C530001230101115093&0`.
//! The last segment carries the serial when the device reports one.

use std::collections::HashSet;

use crate::item::{or_placeholder, HardwareItem};

const DEFAULT_DEVICE_NAME: &str = "usb device";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceClass {
    /// Mass-storage instances (`USBSTOR`).
    Storage,
    /// Any other USB instance.
    Usb,
}

impl InstanceClass {
    /// Class for a bus enumerator name; `None` for non-USB enumerators.
    pub fn from_enumerator(enumerator: &str) -> Option<Self> {
        if enumerator.eq_ignore_ascii_case("USBSTOR") {
            Some(Self::Storage)
        } else if enumerator.eq_ignore_ascii_case("USB") {
            Some(Self::Usb)
        } else {
            None
        }
    }
}

/// Text before the first separator.
pub fn enumerator_of(instance_id: &str) -> &str {
    instance_id.split('\\').next().unwrap_or_default()
}

pub fn serial_from_instance_id(instance_id: &str, class: InstanceClass) -> Option<String> {
    let tail = instance_id.rsplit('\\').next()?;

    let serial = match class {
        InstanceClass::Storage => {
            let cut = match tail.find('&') {
                Some(amp) if amp > 0 => &tail[..amp],
                _ => tail,
            };
            let cut = trim_blanks(cut);
            if cut.chars().all(|c| c == '0') {
                return None;
            }
            cut
        }
        InstanceClass::Usb => {
            if tail.contains('&') {
                return None;
            }
            trim_blanks(tail)
        }
    };

    (!serial.is_empty()).then(|| serial.to_string())
}

fn trim_blanks(value: &str) -> &str {
    value.trim_matches(|c| c == ' ' || c == '\t')
}

/// One present device as reported by the platform's device enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsbDevice {
    pub enumerator: String,
    pub friendly_name: Option<String>,
    pub instance_id: String,
}

/// `usb` items for the USB and USB-storage devices in `devices`, one per
/// instance id.
pub fn usb_items(devices: &[UsbDevice]) -> Vec<HardwareItem> {
    let mut seen = HashSet::new();
    let mut items = Vec::new();

    for device in devices {
        let Some(class) = InstanceClass::from_enumerator(&device.enumerator) else {
            continue;
        };
        if !seen.insert(device.instance_id.as_str()) {
            continue;
        }

        let name = device
            .friendly_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_DEVICE_NAME)
            .to_lowercase();
        let serial = serial_from_instance_id(&device.instance_id, class)
            .map(|serial| serial.to_uppercase())
            .unwrap_or_default();
        items.push(HardwareItem::new("usb", name, serial));
    }

    or_placeholder(items, "usb", "no connected usb devices found", "")
}
