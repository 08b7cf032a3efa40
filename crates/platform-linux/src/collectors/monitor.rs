//! Connector EDID blobs under `/sys/class/drm`.

use std::fs;

use inventory::edid::monitor_item;
use inventory::{or_placeholder, HardwareItem};

use crate::sysfs::{sorted_entries, SysRoots};

pub fn collect_monitors(roots: &SysRoots) -> Vec<HardwareItem> {
    let mut items = Vec::new();
    for (name, path) in sorted_entries(&roots.sys("class/drm")) {
        // Connectors are named `cardN-<connector>`.
        let Some((_, connector)) = name.split_once('-') else {
            continue;
        };
        let Ok(edid) = fs::read(path.join("edid")) else {
            continue;
        };
        if edid.is_empty() {
            continue;
        }
        if let Some(item) = monitor_item(&edid, connector, &name) {
            items.push(item);
        }
    }
    or_placeholder(items, "monitor", "no monitors found with edid serials", "")
}
