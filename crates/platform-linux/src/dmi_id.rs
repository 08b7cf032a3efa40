//! The kernel's decoded DMI attributes as a configuration store.
//!
//! `/sys/class/dmi/id` mirrors the values Windows keeps under
//! `HARDWARE\DESCRIPTION\System\BIOS`; lookups translate the registry value
//! names to attribute files. Serial attributes are readable by root only.

use inventory::{ConfigStore, NOT_PRESENT};

use crate::sysfs::{read_value, SysRoots};

const DMI_ID_DIR: &str = "class/dmi/id";

#[derive(Debug, Clone, Default)]
pub struct DmiIdStore {
    roots: SysRoots,
}

impl DmiIdStore {
    pub fn new(roots: SysRoots) -> Self {
        Self { roots }
    }
}

fn attribute_for(key: &str) -> Option<&'static str> {
    let attribute = match key {
        "BIOSVendor" => "bios_vendor",
        "BIOSVersion" => "bios_version",
        "BIOSReleaseDate" => "bios_date",
        "SystemManufacturer" => "sys_vendor",
        "SystemProductName" => "product_name",
        "SystemVersion" => "product_version",
        "SystemSerialNumber" => "product_serial",
        "SystemSKU" => "product_sku",
        "SystemFamily" => "product_family",
        "BaseBoardManufacturer" => "board_vendor",
        "BaseBoardProduct" => "board_name",
        "BaseBoardVersion" => "board_version",
        "BaseBoardSerialNumber" | "BaseBoardSerial" => "board_serial",
        _ => return None,
    };
    Some(attribute)
}

impl ConfigStore for DmiIdStore {
    fn read_value(&self, _root: &str, _path: &str, key: &str) -> String {
        let Some(attribute) = attribute_for(key) else {
            tracing::debug!(key, "no DMI attribute for configuration key");
            return NOT_PRESENT.to_string();
        };
        let path = self.roots.sys(DMI_ID_DIR).join(attribute);
        read_value(&path).unwrap_or_else(|| NOT_PRESENT.to_string())
    }
}
