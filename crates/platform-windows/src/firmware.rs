//! Raw SMBIOS table through the `RSMB` firmware table provider.

use inventory::FirmwareTableSource;

/// `RSMB` provider signature, stored big-endian as the API expects.
pub const RSMB_SIGNATURE: u32 = u32::from_be_bytes(*b"RSMB");

#[derive(Debug, Default, Clone, Copy)]
pub struct RsmbSource;

impl FirmwareTableSource for RsmbSource {
    fn fetch_raw_table(&self) -> Vec<u8> {
        #[cfg(target_os = "windows")]
        {
            fetch_rsmb().unwrap_or_default()
        }
        #[cfg(not(target_os = "windows"))]
        {
            tracing::warn!("RSMB firmware table is a stub on non-Windows");
            Vec::new()
        }
    }
}

#[cfg(target_os = "windows")]
fn fetch_rsmb() -> Option<Vec<u8>> {
    use windows::Win32::System::SystemInformation::{
        GetSystemFirmwareTable, FIRMWARE_TABLE_PROVIDER,
    };

    let provider = FIRMWARE_TABLE_PROVIDER(RSMB_SIGNATURE);

    // SAFETY: a `None` buffer only asks for the required size.
    let size = unsafe { GetSystemFirmwareTable(provider, 0, None) };
    if size == 0 {
        tracing::debug!("GetSystemFirmwareTable reported no RSMB table");
        return None;
    }

    let mut buffer = vec![0u8; size as usize];
    // SAFETY: the buffer is exactly the size reported by the sizing call.
    let written = unsafe { GetSystemFirmwareTable(provider, 0, Some(buffer.as_mut_slice())) };
    if written == 0 || written as usize > buffer.len() {
        tracing::debug!(size, written, "RSMB table changed size between calls");
        return None;
    }
    buffer.truncate(written as usize);
    Some(buffer)
}
