//! Processor description from `/proc/cpuinfo`.

use inventory::devices::{cpu_items, CpuReading};
use inventory::{HardwareItem, NOT_PRESENT};

use crate::sysfs::{read_trimmed, SysRoots};

pub fn collect_cpu(roots: &SysRoots) -> Vec<HardwareItem> {
    let cpuinfo = read_trimmed(&roots.proc("cpuinfo")).unwrap_or_default();
    cpu_items(&parse_cpuinfo(&cpuinfo))
}

/// Reads the first processor block; later blocks repeat the same model.
pub(crate) fn parse_cpuinfo(text: &str) -> CpuReading {
    let mut processor = None;
    let mut vendor = None;
    let mut family = None;
    let mut model = None;
    let mut stepping = None;
    let mut mhz = 0u32;

    for line in text.lines() {
        if line.trim().is_empty() && processor.is_some() {
            break;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        match key.trim() {
            "model name" => processor = Some(value.to_string()),
            "vendor_id" => vendor = Some(value.to_string()),
            "cpu family" => family = Some(value.to_string()),
            "model" => model = Some(value.to_string()),
            "stepping" => stepping = Some(value.to_string()),
            "cpu MHz" => mhz = value.parse::<f64>().map(|v| v.round() as u32).unwrap_or(0),
            _ => {}
        }
    }

    let identifier = match (family, model, stepping) {
        (Some(family), Some(model), Some(stepping)) => {
            format!("Family {family} Model {model} Stepping {stepping}")
        }
        _ => NOT_PRESENT.to_string(),
    };

    CpuReading {
        processor: processor.unwrap_or_else(|| NOT_PRESENT.to_string()),
        vendor: vendor.unwrap_or_else(|| NOT_PRESENT.to_string()),
        identifier,
        mhz,
    }
}
