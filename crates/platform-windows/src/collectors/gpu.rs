//! Display adapters from the display class key.

use inventory::devices::{gpu_items, GpuReading};
use inventory::HardwareItem;

use crate::collectors::source_error;
use crate::registry::{query_reg_tree, RegKey};

const DISPLAY_CLASS_KEY: &str =
    r"SYSTEM\CurrentControlSet\Control\Class\{4d36e968-e325-11ce-bfc1-08002be10318}";

pub fn collect_gpus() -> Vec<HardwareItem> {
    gpu_report(query_reg_tree("HKEY_LOCAL_MACHINE", DISPLAY_CLASS_KEY).as_deref())
}

fn gpu_report(keys: Option<&[RegKey]>) -> Vec<HardwareItem> {
    match keys {
        Some(keys) => gpu_items(&adapters_from_keys(keys)),
        None => source_error("gpu", "could not open registry key"),
    }
}

/// Adapter instances are the numbered direct children of a class key.
pub(crate) fn is_instance_key(key: &RegKey, class_key: &str) -> bool {
    let Some((parent, name)) = key.path.rsplit_once('\\') else {
        return false;
    };
    parent.to_ascii_lowercase().ends_with(&class_key.to_ascii_lowercase())
        && name.starts_with('0')
}

fn adapters_from_keys(keys: &[RegKey]) -> Vec<GpuReading> {
    keys.iter()
        .filter(|key| is_instance_key(key, DISPLAY_CLASS_KEY))
        .filter_map(|key| {
            Some(GpuReading {
                name: key.string("DriverDesc")?.to_string(),
                driver_version: key.string("DriverVersion").unwrap_or_default().to_string(),
                driver_date: key.string("DriverDate").unwrap_or_default().to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{adapters_from_keys, gpu_report, DISPLAY_CLASS_KEY};
    use crate::registry::{RegKey, RegValue};

    fn key(suffix: &str, values: &[(&str, &str)]) -> RegKey {
        RegKey {
            path: format!(r"HKEY_LOCAL_MACHINE\{DISPLAY_CLASS_KEY}\{suffix}"),
            values: values
                .iter()
                .map(|(name, data)| RegValue {
                    name: name.to_string(),
                    kind: "REG_SZ".to_string(),
                    data: data.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn only_numbered_children_with_a_description_count() {
        let keys = vec![
            key("0000", &[("DriverDesc", "Intel(R) UHD Graphics"), ("DriverDate", "1-1-2024")]),
            key("0001", &[("DriverVersion", "1.0")]),
            key("Properties", &[("DriverDesc", "not an adapter")]),
            key(r"0000\Settings", &[("DriverDesc", "nested")]),
        ];
        let adapters = adapters_from_keys(&keys);
        assert_eq!(adapters.len(), 1);
        assert_eq!(adapters[0].name, "Intel(R) UHD Graphics");
        assert_eq!(adapters[0].driver_version, "");
    }

    #[test]
    fn unreadable_class_key_is_an_error_not_an_empty_list() {
        let items = gpu_report(None);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].category, "gpu");
        assert_eq!(items[0].name, "error");
        assert_eq!(items[0].value, "could not open registry key");

        let empty = gpu_report(Some(&[]));
        assert_eq!(empty.len(), 1);
        assert_eq!(empty[0].name, "info");
    }
}
