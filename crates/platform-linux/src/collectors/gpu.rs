//! Display controllers on the PCI bus (class `0x03xxxx`).

use inventory::devices::{gpu_items, GpuReading};
use inventory::{HardwareItem, NOT_PRESENT};

use crate::sysfs::{read_trimmed, read_value, sorted_entries, SysRoots};

pub fn collect_gpus(roots: &SysRoots) -> Vec<HardwareItem> {
    gpu_items(&read_adapters(roots))
}

pub(crate) fn read_adapters(roots: &SysRoots) -> Vec<GpuReading> {
    let mut adapters = Vec::new();
    for (_, path) in sorted_entries(&roots.sys("bus/pci/devices")) {
        let class = read_trimmed(&path.join("class")).unwrap_or_default();
        if !class.starts_with("0x03") {
            continue;
        }
        let vendor = read_trimmed(&path.join("vendor")).unwrap_or_default();
        let device = read_trimmed(&path.join("device")).unwrap_or_default();
        let driver = read_trimmed(&path.join("uevent"))
            .and_then(|uevent| driver_from_uevent(&uevent));

        let id = format!(
            "{}:{}",
            vendor.trim_start_matches("0x"),
            device.trim_start_matches("0x")
        );
        let name = match &driver {
            Some(driver) => format!("{driver} ({id})"),
            None => format!("pci {id}"),
        };
        let driver_version = driver
            .as_deref()
            .and_then(|driver| read_value(&roots.sys(&format!("module/{driver}/version"))))
            .unwrap_or_else(|| NOT_PRESENT.to_string());

        adapters.push(GpuReading {
            name,
            driver_version,
            driver_date: NOT_PRESENT.to_string(),
        });
    }
    adapters
}

pub(crate) fn driver_from_uevent(uevent: &str) -> Option<String> {
    uevent
        .lines()
        .find_map(|line| line.strip_prefix("DRIVER="))
        .map(str::trim)
        .filter(|driver| !driver.is_empty())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::driver_from_uevent;

    #[test]
    fn driver_is_read_from_uevent() {
        let uevent = "DRIVER=i915\nPCI_CLASS=30000\nPCI_ID=8086:46A6\n";
        assert_eq!(driver_from_uevent(uevent).as_deref(), Some("i915"));
        assert_eq!(driver_from_uevent("PCI_CLASS=30000\n"), None);
    }
}
