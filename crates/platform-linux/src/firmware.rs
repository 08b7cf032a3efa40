//! SMBIOS table exported by the kernel under `firmware/dmi/tables`.

use std::fs;
use std::io;

use inventory::FirmwareTableSource;
use smbios_table::RawSmbiosData;

use crate::sysfs::SysRoots;

const DMI_TABLE: &str = "firmware/dmi/tables/DMI";
const ENTRY_POINT: &str = "firmware/dmi/tables/smbios_entry_point";

/// Reads the structure table and wraps it in the raw header the decoder
/// expects.
#[derive(Debug, Clone, Default)]
pub struct DmiTableSource {
    roots: SysRoots,
}

impl DmiTableSource {
    pub fn new(roots: SysRoots) -> Self {
        Self { roots }
    }
}

impl FirmwareTableSource for DmiTableSource {
    fn fetch_raw_table(&self) -> Vec<u8> {
        let path = self.roots.sys(DMI_TABLE);
        let table = match fs::read(&path) {
            Ok(table) => table,
            Err(err) => {
                // SAFETY: geteuid has no preconditions and always succeeds.
                let privileged = unsafe { libc::geteuid() } == 0;
                if err.kind() == io::ErrorKind::PermissionDenied && !privileged {
                    tracing::debug!(path = %path.display(), "DMI table needs root");
                } else {
                    tracing::debug!(path = %path.display(), error = %err, "DMI table unreadable");
                }
                return Vec::new();
            }
        };
        if table.is_empty() {
            return Vec::new();
        }

        let (major, minor) = fs::read(self.roots.sys(ENTRY_POINT))
            .ok()
            .and_then(|entry| entry_point_version(&entry))
            .unwrap_or((0, 0));
        RawSmbiosData::encode(major, minor, &table)
    }
}

/// SMBIOS version from a 32-bit (`_SM_`) or 64-bit (`_SM3_`) entry point.
pub(crate) fn entry_point_version(entry: &[u8]) -> Option<(u8, u8)> {
    if entry.starts_with(b"_SM3_") {
        return Some((*entry.get(7)?, *entry.get(8)?));
    }
    if entry.starts_with(b"_SM_") {
        return Some((*entry.get(6)?, *entry.get(7)?));
    }
    None
}
