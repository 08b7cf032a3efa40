//! Processor identity from the `CentralProcessor\0` registry key.

use inventory::devices::{cpu_items, CpuReading};
use inventory::{HardwareItem, NOT_PRESENT};

use crate::registry::{read_reg_dword, read_reg_string};

const CPU_KEY: &str = r"HARDWARE\DESCRIPTION\System\CentralProcessor\0";
const HIVE: &str = "HKEY_LOCAL_MACHINE";

pub fn collect_cpu() -> Vec<HardwareItem> {
    let read = |name: &str| {
        read_reg_string(HIVE, CPU_KEY, name)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| NOT_PRESENT.to_string())
    };

    cpu_items(&CpuReading {
        processor: read("ProcessorNameString"),
        vendor: read("VendorIdentifier"),
        identifier: read("Identifier"),
        mhz: read_reg_dword(HIVE, CPU_KEY, "~MHz").unwrap_or(0),
    })
}
