//! Adapter addresses: configured overrides from the network class key and
//! hardware addresses from `Get-NetAdapter`.

use inventory::network::{nic_items, ConfiguredAddress, KernelAddress};
use inventory::HardwareItem;

#[cfg(any(test, target_os = "windows"))]
use crate::cim::{json_records, json_str};
use crate::collectors::gpu::is_instance_key;
use crate::registry::{query_reg_tree, RegKey};

const NET_CLASS_KEY: &str =
    r"SYSTEM\CurrentControlSet\Control\Class\{4d36e972-e325-11ce-bfc1-08002be10318}";

pub fn collect_nics() -> Vec<HardwareItem> {
    let keys = query_reg_tree("HKEY_LOCAL_MACHINE", NET_CLASS_KEY).unwrap_or_default();
    nic_items(&configured_from_keys(&keys), &read_kernel_addresses())
}

fn configured_from_keys(keys: &[RegKey]) -> Vec<ConfiguredAddress> {
    keys.iter()
        .filter(|key| is_instance_key(key, NET_CLASS_KEY))
        .filter_map(|key| {
            let address = key.string("NetworkAddress")?;
            Some(ConfiguredAddress {
                description: key.string("DriverDesc").unwrap_or_default().to_string(),
                address: address.to_string(),
            })
        })
        .collect()
}

fn read_kernel_addresses() -> Vec<KernelAddress> {
    #[cfg(target_os = "windows")]
    {
        let cmd = "Get-NetAdapter -IncludeHidden -ErrorAction SilentlyContinue | Select-Object InterfaceDescription,MacAddress | ConvertTo-Json -Compress";
        crate::cim::run_powershell(cmd)
            .map(|json| parse_adapters_json(&json))
            .unwrap_or_default()
    }
    #[cfg(not(target_os = "windows"))]
    {
        tracing::warn!("read_kernel_addresses is a stub on non-Windows");
        Vec::new()
    }
}

#[cfg(any(test, target_os = "windows"))]
fn parse_adapters_json(raw: &str) -> Vec<KernelAddress> {
    json_records(raw)
        .iter()
        .filter_map(|record| {
            let address = inventory::network::parse_mac(&json_str(record, "MacAddress")?)?;
            Some(KernelAddress {
                description: json_str(record, "InterfaceDescription").unwrap_or_default(),
                address,
            })
        })
        .collect()
}
