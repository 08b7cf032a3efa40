//! Typed, bounds-checked views over the identity-bearing record types.
//!
//! String fields are addressed by their offset past the 4-byte record header
//! (field 0 is record byte 0x04); raw fields by their absolute record offset.

use crate::structure::{Structure, StructureKind};

/// Firmware information (type 0).
#[derive(Debug, Clone, Copy)]
pub struct BiosInfo<'a> {
    record: &'a Structure,
}

impl<'a> BiosInfo<'a> {
    const VENDOR: usize = 0;
    const VERSION: usize = 1;
    const RELEASE_DATE: usize = 4;
    const RELEASE_MAJOR: usize = 0x14;
    const RELEASE_MINOR: usize = 0x15;

    pub fn from_structure(record: &'a Structure) -> Option<Self> {
        (record.kind() == StructureKind::Bios).then_some(Self { record })
    }

    pub fn vendor(&self) -> String {
        self.record.string_at(Self::VENDOR)
    }

    pub fn version(&self) -> String {
        self.record.string_at(Self::VERSION)
    }

    pub fn release_date(&self) -> String {
        self.record.string_at(Self::RELEASE_DATE)
    }

    /// System firmware `major.minor` release, when the record carries it.
    pub fn firmware_release(&self) -> Option<(u8, u8)> {
        let major = self.record.byte(Self::RELEASE_MAJOR)?;
        let minor = self.record.byte(Self::RELEASE_MINOR)?;
        if major == 0xFF && minor == 0xFF {
            return None;
        }
        Some((major, minor))
    }
}

/// System product information (type 1).
#[derive(Debug, Clone, Copy)]
pub struct SystemInfo<'a> {
    record: &'a Structure,
}

impl<'a> SystemInfo<'a> {
    const MANUFACTURER: usize = 0;
    const PRODUCT_NAME: usize = 1;
    const VERSION: usize = 2;
    const SERIAL: usize = 3;
    const UUID_OFFSET: usize = 8;
    const SKU: usize = 21;
    const FAMILY: usize = 22;
    const SKU_FAMILY_MIN_LEN: usize = 27;

    pub fn from_structure(record: &'a Structure) -> Option<Self> {
        (record.kind() == StructureKind::System).then_some(Self { record })
    }

    pub fn manufacturer(&self) -> String {
        self.record.string_at(Self::MANUFACTURER)
    }

    pub fn product_name(&self) -> String {
        self.record.string_at(Self::PRODUCT_NAME)
    }

    pub fn version(&self) -> String {
        self.record.string_at(Self::VERSION)
    }

    pub fn serial_number(&self) -> String {
        self.record.string_at(Self::SERIAL)
    }

    /// Raw UUID bytes; present once the record is at least 24 bytes long.
    pub fn uuid(&self) -> Option<[u8; 16]> {
        let bytes = self.record.bytes(Self::UUID_OFFSET, 16)?;
        let mut uuid = [0u8; 16];
        uuid.copy_from_slice(bytes);
        Some(uuid)
    }

    pub fn sku(&self) -> Option<String> {
        self.has_sku_family()
            .then(|| self.record.string_at(Self::SKU))
    }

    pub fn family(&self) -> Option<String> {
        self.has_sku_family()
            .then(|| self.record.string_at(Self::FAMILY))
    }

    fn has_sku_family(&self) -> bool {
        self.record.data().len() >= Self::SKU_FAMILY_MIN_LEN
    }
}

/// Baseboard information (type 2).
#[derive(Debug, Clone, Copy)]
pub struct BaseboardInfo<'a> {
    record: &'a Structure,
}

impl<'a> BaseboardInfo<'a> {
    const MANUFACTURER: usize = 0;
    const PRODUCT: usize = 1;
    const VERSION: usize = 2;
    const SERIAL: usize = 3;

    pub fn from_structure(record: &'a Structure) -> Option<Self> {
        (record.kind() == StructureKind::Baseboard).then_some(Self { record })
    }

    pub fn manufacturer(&self) -> String {
        self.record.string_at(Self::MANUFACTURER)
    }

    pub fn product(&self) -> String {
        self.record.string_at(Self::PRODUCT)
    }

    pub fn version(&self) -> String {
        self.record.string_at(Self::VERSION)
    }

    pub fn serial_number(&self) -> String {
        self.record.string_at(Self::SERIAL)
    }
}

/// Chassis information (type 3).
#[derive(Debug, Clone, Copy)]
pub struct ChassisInfo<'a> {
    record: &'a Structure,
}

impl<'a> ChassisInfo<'a> {
    const MANUFACTURER: usize = 0;
    const TYPE_OFFSET: usize = 5;
    const VERSION: usize = 2;
    const SERIAL: usize = 3;
    const ASSET_TAG: usize = 4;

    pub fn from_structure(record: &'a Structure) -> Option<Self> {
        (record.kind() == StructureKind::Chassis).then_some(Self { record })
    }

    pub fn manufacturer(&self) -> String {
        self.record.string_at(Self::MANUFACTURER)
    }

    /// Chassis type code with the lock-present bit masked off.
    pub fn chassis_type(&self) -> Option<u8> {
        self.record.byte(Self::TYPE_OFFSET).map(|b| b & 0x7F)
    }

    pub fn lock_present(&self) -> bool {
        self.record
            .byte(Self::TYPE_OFFSET)
            .map(|b| b & 0x80 != 0)
            .unwrap_or(false)
    }

    pub fn version(&self) -> String {
        self.record.string_at(Self::VERSION)
    }

    pub fn serial_number(&self) -> String {
        self.record.string_at(Self::SERIAL)
    }

    pub fn asset_tag(&self) -> String {
        self.record.string_at(Self::ASSET_TAG)
    }
}

pub fn chassis_type_name(code: u8) -> &'static str {
    match code {
        0x01 => "other",
        0x02 => "unknown",
        0x03 => "desktop",
        0x04 => "low profile desktop",
        0x05 => "pizza box",
        0x06 => "mini tower",
        0x07 => "tower",
        0x08 => "portable",
        0x09 => "laptop",
        0x0A => "notebook",
        0x0B => "hand held",
        0x0C => "docking station",
        0x0D => "all in one",
        0x0E => "sub notebook",
        0x0F => "space-saving",
        0x10 => "lunch box",
        0x11 => "main server chassis",
        0x12 => "expansion chassis",
        0x13 => "sub chassis",
        0x14 => "bus expansion chassis",
        0x15 => "peripheral chassis",
        0x16 => "raid chassis",
        0x17 => "rack mount chassis",
        0x18 => "sealed-case pc",
        0x19 => "multi-system chassis",
        0x1A => "compact pci",
        0x1B => "advanced tca",
        0x1C => "blade",
        0x1D => "blade enclosure",
        0x1E => "tablet",
        0x1F => "convertible",
        0x20 => "detachable",
        0x21 => "iot gateway",
        0x22 => "embedded pc",
        0x23 => "mini pc",
        0x24 => "stick pc",
        _ => "unknown",
    }
}
