use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UuidState {
    Present,
    /// Every byte is `0xFF`: the firmware reports no UUID.
    NotPresent,
    /// Every byte is `0x00`: a UUID slot exists but was never programmed.
    NotSettable,
}

impl UuidState {
    pub fn classify(uuid: &[u8; 16]) -> Self {
        if uuid.iter().all(|b| *b == 0xFF) {
            Self::NotPresent
        } else if uuid.iter().all(|b| *b == 0x00) {
            Self::NotSettable
        } else {
            Self::Present
        }
    }

    pub fn note(self) -> &'static str {
        match self {
            Self::Present => "",
            Self::NotPresent => "not present",
            Self::NotSettable => "not settable",
        }
    }
}

/// Render a 16-byte UUID field in display form. The first three groups are
/// stored little-endian; the last two are emitted in byte order.
pub fn format_uuid(uuid: &[u8; 16]) -> String {
    let mut out = String::with_capacity(36);
    let groups: [&[u8]; 5] = [&uuid[0..4], &uuid[4..6], &uuid[6..8], &uuid[8..10], &uuid[10..16]];

    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            out.push('-');
        }
        if i < 3 {
            for byte in group.iter().rev() {
                let _ = write!(out, "{:02X}", byte);
            }
        } else {
            for byte in group.iter() {
                let _ = write!(out, "{:02X}", byte);
            }
        }
    }

    out
}
