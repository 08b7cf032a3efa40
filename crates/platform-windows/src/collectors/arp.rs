//! IPv4 neighbour table from `Get-NetNeighbor`.

#[cfg(any(test, target_os = "windows"))]
use std::net::Ipv4Addr;

#[cfg(any(test, target_os = "windows"))]
use inventory::network::{parse_mac, ArpKind};
use inventory::network::{arp_items, ArpEntry};
use inventory::HardwareItem;

use crate::collectors::source_error;

#[cfg(any(test, target_os = "windows"))]
use crate::cim::{json_records, json_str};

pub fn collect_arp() -> Vec<HardwareItem> {
    arp_report(read_neighbours())
}

fn arp_report(entries: Option<Vec<ArpEntry>>) -> Vec<HardwareItem> {
    match entries {
        Some(entries) => arp_items(&entries),
        None => source_error("arp", "neighbour table query failed"),
    }
}

fn read_neighbours() -> Option<Vec<ArpEntry>> {
    #[cfg(target_os = "windows")]
    {
        let cmd = "Get-NetNeighbor -AddressFamily IPv4 -ErrorAction SilentlyContinue | Select-Object IPAddress,LinkLayerAddress,@{n='State';e={\"$($_.State)\"}},InterfaceAlias | ConvertTo-Json -Compress";
        crate::cim::run_script(cmd).map(|json| parse_neighbours_json(&json))
    }
    #[cfg(not(target_os = "windows"))]
    {
        tracing::warn!("read_neighbours is a stub on non-Windows");
        None
    }
}

/// Neighbour states mapped onto the IP helper entry types.
#[cfg(any(test, target_os = "windows"))]
fn kind_from_state(state: &str) -> ArpKind {
    match state.to_ascii_lowercase().as_str() {
        "permanent" => ArpKind::Static,
        "unreachable" | "incomplete" => ArpKind::Invalid,
        "reachable" | "stale" | "delay" | "probe" => ArpKind::Dynamic,
        _ => ArpKind::Other,
    }
}

#[cfg(any(test, target_os = "windows"))]
fn parse_neighbours_json(raw: &str) -> Vec<ArpEntry> {
    json_records(raw)
        .iter()
        .filter_map(|record| {
            let address: Ipv4Addr = json_str(record, "IPAddress")?.parse().ok()?;
            let hardware = json_str(record, "LinkLayerAddress")
                .and_then(|mac| parse_mac(&mac))
                .unwrap_or_default();
            Some(ArpEntry {
                address,
                hardware,
                kind: kind_from_state(&json_str(record, "State").unwrap_or_default()),
                adapter: json_str(record, "InterfaceAlias")
                    .unwrap_or_default()
                    .to_lowercase(),
            })
        })
        .collect()
}
