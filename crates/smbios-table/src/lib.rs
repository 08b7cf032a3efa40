//! SMBIOS structure-table decoding.
//!
//! Turns the raw firmware blob returned by the platform (the `RSMB` table on
//! Windows, `/sys/firmware/dmi/tables/DMI` on Linux) into owned records and
//! exposes bounds-checked views over the identity-bearing record types.
//! Nothing in this crate performs I/O.

mod decode;
mod raw;
mod structure;
mod uuid;
mod views;

pub use decode::decode_structures;
pub use raw::{RawSmbiosData, TableError, RAW_HEADER_LEN};
pub use structure::{Structure, StructureKind, MIN_STRUCTURE_LEN, NOT_PRESENT};
pub use uuid::{format_uuid, UuidState};
pub use views::{chassis_type_name, BaseboardInfo, BiosInfo, ChassisInfo, SystemInfo};

pub type Result<T> = std::result::Result<T, TableError>;
