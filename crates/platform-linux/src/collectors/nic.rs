//! Link-layer addresses under `/sys/class/net`.

use inventory::network::{nic_items, parse_mac, ConfiguredAddress, KernelAddress};
use inventory::HardwareItem;

use crate::sysfs::{read_trimmed, sorted_entries, SysRoots};

/// `addr_assign_type` value for an address set from userspace.
const NET_ADDR_SET: &str = "3";

pub fn collect_nics(roots: &SysRoots) -> Vec<HardwareItem> {
    let (configured, kernel) = read_interfaces(roots);
    nic_items(&configured, &kernel)
}

pub(crate) fn read_interfaces(roots: &SysRoots) -> (Vec<ConfiguredAddress>, Vec<KernelAddress>) {
    let mut configured = Vec::new();
    let mut kernel = Vec::new();

    for (name, path) in sorted_entries(&roots.sys("class/net")) {
        if name == "lo" {
            continue;
        }
        let Some(text) = read_trimmed(&path.join("address")) else {
            continue;
        };
        let Some(address) = parse_mac(&text) else {
            continue;
        };
        if address.iter().all(|b| *b == 0) {
            continue;
        }

        if read_trimmed(&path.join("addr_assign_type")).as_deref() == Some(NET_ADDR_SET) {
            configured.push(ConfiguredAddress {
                description: name.clone(),
                address: text.replace(':', ""),
            });
        }
        kernel.push(KernelAddress {
            description: name,
            address,
        });
    }

    (configured, kernel)
}
