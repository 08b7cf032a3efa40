/// Returned by [`Structure::string_at`] when the field lies outside the record.
pub const NOT_PRESENT: &str = "n/a";

/// Type, length and handle bytes shared by every record.
pub const MIN_STRUCTURE_LEN: usize = 4;

const HEADER_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureKind {
    Bios,
    System,
    Baseboard,
    Chassis,
    EndOfTable,
    Other(u8),
}

impl StructureKind {
    pub fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Bios,
            1 => Self::System,
            2 => Self::Baseboard,
            3 => Self::Chassis,
            127 => Self::EndOfTable,
            other => Self::Other(other),
        }
    }
}

/// One decoded record: the formatted area (header included) and its
/// trailing string set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structure {
    kind: u8,
    length: u8,
    data: Vec<u8>,
    strings: Vec<String>,
}

impl Structure {
    pub fn new(kind: u8, data: Vec<u8>, strings: Vec<String>) -> Self {
        let length = u8::try_from(data.len()).unwrap_or(u8::MAX);
        Self {
            kind,
            length,
            data,
            strings,
        }
    }

    pub fn kind(&self) -> StructureKind {
        StructureKind::from_u8(self.kind)
    }

    pub fn type_id(&self) -> u8 {
        self.kind
    }

    pub fn length(&self) -> u8 {
        self.length
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn strings(&self) -> &[String] {
        &self.strings
    }

    pub fn handle(&self) -> Option<u16> {
        self.word(2)
    }

    /// Byte at an absolute offset into the record (header included).
    pub fn byte(&self, offset: usize) -> Option<u8> {
        self.data.get(offset).copied()
    }

    pub fn word(&self, offset: usize) -> Option<u16> {
        let bytes = self.bytes(offset, 2)?;
        Some(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    pub fn bytes(&self, offset: usize, len: usize) -> Option<&[u8]> {
        let end = offset.checked_add(len)?;
        self.data.get(offset..end)
    }

    /// Resolve the string whose 1-based index sits at `field` bytes past the
    /// record header. Returns [`NOT_PRESENT`] when the record is too short to
    /// carry the field.
    pub fn string_at(&self, field: usize) -> String {
        match self.byte(HEADER_LEN + field) {
            Some(index) => self.resolve_index(index),
            None => NOT_PRESENT.to_string(),
        }
    }

    /// Resolve a 1-based string-set index. Index 0 and indices past the end
    /// of the set mean "no string recorded" and yield an empty string.
    pub fn resolve_index(&self, index: u8) -> String {
        if index == 0 {
            return String::new();
        }
        self.strings
            .get(usize::from(index) - 1)
            .cloned()
            .unwrap_or_default()
    }
}
