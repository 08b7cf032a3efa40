//! IPv4 neighbour cache from `/proc/net/arp`.

use std::net::Ipv4Addr;

use inventory::network::{arp_items, parse_mac, ArpEntry, ArpKind};
use inventory::HardwareItem;

use crate::sysfs::{read_trimmed, SysRoots};

const ATF_COM: u32 = 0x02;
const ATF_PERM: u32 = 0x04;

pub fn collect_arp(roots: &SysRoots) -> Vec<HardwareItem> {
    let table = read_trimmed(&roots.proc("net/arp")).unwrap_or_default();
    arp_items(&parse_proc_arp(&table))
}

fn kind_from_flags(flags: u32) -> ArpKind {
    if flags == 0 {
        ArpKind::Invalid
    } else if flags & ATF_PERM != 0 {
        ArpKind::Static
    } else if flags & ATF_COM != 0 {
        ArpKind::Dynamic
    } else {
        ArpKind::Other
    }
}

pub(crate) fn parse_proc_arp(table: &str) -> Vec<ArpEntry> {
    table
        .lines()
        .skip(1)
        .filter_map(|line| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 6 {
                return None;
            }
            let address: Ipv4Addr = fields[0].parse().ok()?;
            let flags = u32::from_str_radix(fields[2].trim_start_matches("0x"), 16).ok()?;
            Some(ArpEntry {
                address,
                hardware: parse_mac(fields[3]).unwrap_or_default(),
                kind: kind_from_flags(flags),
                adapter: fields[5].to_lowercase(),
            })
        })
        .collect()
}
