use std::fmt;

use crate::decode::decode_structures;
use crate::structure::Structure;

/// Size of the header the firmware interface places before the structure table.
pub const RAW_HEADER_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The platform returned fewer bytes than the raw header needs.
    TooShort(usize),
    /// The header declares a zero or negative table length.
    InvalidLength(i32),
    /// The header is valid but no payload bytes follow it.
    MissingPayload,
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort(len) => write!(
                f,
                "raw table is {} bytes, shorter than the {}-byte header",
                len, RAW_HEADER_LEN
            ),
            Self::InvalidLength(len) => write!(f, "raw table declares invalid length {}", len),
            Self::MissingPayload => write!(f, "raw table has no structure payload"),
        }
    }
}

impl std::error::Error for TableError {}

/// Header fields plus the structure payload of a raw firmware table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSmbiosData {
    pub used_20_calling_method: u8,
    pub major_version: u8,
    pub minor_version: u8,
    pub dmi_revision: u8,
    pub declared_length: u32,
    pub table: Vec<u8>,
}

impl RawSmbiosData {
    /// Parse the header and copy out at most `declared_length` payload bytes.
    pub fn parse(raw: &[u8]) -> crate::Result<Self> {
        let Some(header) = raw.get(..RAW_HEADER_LEN) else {
            return Err(TableError::TooShort(raw.len()));
        };

        let mut length = [0u8; 4];
        length.copy_from_slice(&header[4..8]);
        let declared = i32::from_le_bytes(length);
        if declared <= 0 {
            return Err(TableError::InvalidLength(declared));
        }

        let available = raw.len() - RAW_HEADER_LEN;
        let copy_len = (declared as usize).min(available);
        if copy_len == 0 {
            return Err(TableError::MissingPayload);
        }

        Ok(Self {
            used_20_calling_method: header[0],
            major_version: header[1],
            minor_version: header[2],
            dmi_revision: header[3],
            declared_length: declared as u32,
            table: raw[RAW_HEADER_LEN..RAW_HEADER_LEN + copy_len].to_vec(),
        })
    }

    /// Build a raw buffer in the firmware-interface layout around a bare
    /// structure table, for sources that expose the table without a header.
    pub fn encode(major_version: u8, minor_version: u8, table: &[u8]) -> Vec<u8> {
        let length = u32::try_from(table.len()).unwrap_or(u32::MAX);
        let mut out = Vec::with_capacity(RAW_HEADER_LEN + table.len());
        out.extend_from_slice(&[0, major_version, minor_version, 0]);
        out.extend_from_slice(&length.to_le_bytes());
        out.extend_from_slice(table);
        out
    }

    pub fn version(&self) -> (u8, u8) {
        (self.major_version, self.minor_version)
    }

    pub fn structures(&self) -> Vec<Structure> {
        decode_structures(&self.table)
    }
}
