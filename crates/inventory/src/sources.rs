//! Collaborator boundaries consulted by the identity resolver.
//!
//! Implementations absorb their own failures: a source that cannot answer
//! returns its sentinel instead of an error.

/// Configuration-store root holding the firmware mirror values.
pub const FIRMWARE_KEY_ROOT: &str = "HKEY_LOCAL_MACHINE";
/// Configuration-store path holding the firmware mirror values.
pub const FIRMWARE_KEY_PATH: &str = r"HARDWARE\DESCRIPTION\System\BIOS";

/// Produces the raw firmware table blob.
pub trait FirmwareTableSource {
    /// Raw table in the firmware-interface layout (8-byte header followed by
    /// the structure table). Empty when the table cannot be read.
    fn fetch_raw_table(&self) -> Vec<u8>;
}

/// Reads named values from the platform configuration store.
pub trait ConfigStore {
    /// Whitespace-trimmed string value, or [`crate::NOT_PRESENT`] when the key
    /// is missing, holds a non-string type, or is empty.
    fn read_value(&self, root: &str, path: &str, key: &str) -> String;
}

/// Answers single-property queries against the platform's instrumentation
/// service.
pub trait ManagementQuery {
    /// First non-empty scalar value of `property` across the instances of
    /// `class`, coerced to a string. Empty on any failure.
    fn query_property(&self, class: &str, property: &str) -> String;
}

/// Stand-in for platforms without an instrumentation service.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoManagementQuery;

impl ManagementQuery for NoManagementQuery {
    fn query_property(&self, _class: &str, _property: &str) -> String {
        String::new()
    }
}
