//! Monitor serials from the EDID blocks stored under `Enum\DISPLAY`.

#[cfg(any(test, target_os = "windows"))]
use base64::engine::general_purpose::STANDARD;
#[cfg(any(test, target_os = "windows"))]
use base64::Engine as _;
use inventory::edid::monitor_item;
use inventory::{or_placeholder, HardwareItem};

#[cfg(any(test, target_os = "windows"))]
use crate::cim::{json_records, json_str};
use crate::collectors::source_error;

/// EDID block of one monitor instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorEdid {
    pub monitor_id: String,
    pub instance: String,
    pub edid: Vec<u8>,
}

pub fn collect_monitors() -> Vec<HardwareItem> {
    monitor_report(read_edids())
}

fn monitor_report(monitors: Option<Vec<MonitorEdid>>) -> Vec<HardwareItem> {
    let Some(monitors) = monitors else {
        return source_error("monitor", "could not open display registry");
    };
    let items = monitors
        .iter()
        .filter_map(|monitor| monitor_item(&monitor.edid, &monitor.monitor_id, &monitor.instance))
        .collect();
    or_placeholder(items, "monitor", "no monitors found with edid serials", "")
}

fn read_edids() -> Option<Vec<MonitorEdid>> {
    #[cfg(target_os = "windows")]
    {
        let cmd = concat!(
            "$root='HKLM:\\SYSTEM\\CurrentControlSet\\Enum\\DISPLAY';",
            "@(Get-ChildItem $root -ErrorAction SilentlyContinue | ForEach-Object {",
            "$id=$_.PSChildName;",
            "Get-ChildItem $_.PSPath -ErrorAction SilentlyContinue | ForEach-Object {",
            "$p=Get-ItemProperty -Path (Join-Path $_.PSPath 'Device Parameters') -Name EDID -ErrorAction SilentlyContinue;",
            "if ($p -and $p.EDID) { [pscustomobject]@{ monitor=$id; instance=$_.PSChildName; edid=[Convert]::ToBase64String($p.EDID) } }",
            "} }) | ConvertTo-Json -Compress",
        );
        crate::cim::run_script(cmd).map(|json| parse_edid_json(&json))
    }
    #[cfg(not(target_os = "windows"))]
    {
        tracing::warn!("read_edids is a stub on non-Windows");
        None
    }
}

#[cfg(any(test, target_os = "windows"))]
fn parse_edid_json(raw: &str) -> Vec<MonitorEdid> {
    json_records(raw)
        .iter()
        .filter_map(|record| {
            let encoded = json_str(record, "edid")?;
            let edid = match STANDARD.decode(encoded.as_bytes()) {
                Ok(edid) => edid,
                Err(err) => {
                    tracing::debug!(error = %err, "undecodable EDID payload");
                    return None;
                }
            };
            Some(MonitorEdid {
                monitor_id: json_str(record, "monitor").unwrap_or_default(),
                instance: json_str(record, "instance").unwrap_or_default(),
                edid,
            })
        })
        .collect()
}
