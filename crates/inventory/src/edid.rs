//! Monitor identity from EDID base blocks.

use crate::item::HardwareItem;

pub const EDID_BLOCK_LEN: usize = 128;

const DESCRIPTOR_OFFSETS: [usize; 4] = [54, 72, 90, 108];
const DESCRIPTOR_TEXT_LEN: usize = 13;
const TAG_SERIAL: u8 = 0xFF;
const TAG_NAME: u8 = 0xFC;

/// Display-name descriptor text, lowercased.
pub fn monitor_name(edid: &[u8]) -> Option<String> {
    descriptor_text(edid, TAG_NAME).map(|text| text.to_lowercase())
}

/// Serial-number descriptor text, uppercased.
pub fn monitor_serial(edid: &[u8]) -> Option<String> {
    descriptor_text(edid, TAG_SERIAL).map(|text| text.to_uppercase())
}

/// Item for one monitor, or `None` when its EDID has no serial descriptor.
pub fn monitor_item(edid: &[u8], monitor_id: &str, instance: &str) -> Option<HardwareItem> {
    let serial = monitor_serial(edid)?;
    let name = monitor_name(edid).unwrap_or_else(|| monitor_id.to_lowercase());
    Some(
        HardwareItem::new("monitor", name, serial)
            .with_notes(format!("instance: {}", instance.to_lowercase())),
    )
}

fn descriptor_text(edid: &[u8], tag: u8) -> Option<String> {
    if edid.len() < EDID_BLOCK_LEN {
        return None;
    }

    let marker = [0, 0, 0, tag];
    let offset = DESCRIPTOR_OFFSETS
        .into_iter()
        .find(|&offset| edid.get(offset..offset + 4) == Some(&marker[..]))?;

    let start = offset + 5;
    let end = (start + DESCRIPTOR_TEXT_LEN).min(edid.len());
    let text: String = edid
        .get(start..end)?
        .iter()
        .take_while(|&&byte| byte != 0x0A)
        .filter(|byte| (32u8..=126).contains(*byte))
        .map(|&byte| char::from(byte))
        .collect();

    let text = text.trim_matches(|c| c == ' ' || c == '\t');
    (!text.is_empty()).then(|| text.to_string())
}
