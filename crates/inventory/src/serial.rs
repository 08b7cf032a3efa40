use smbios_table::NOT_PRESENT;

/// Vendors ship placeholder text in serial fields; none of these identify a
/// machine.
pub fn is_valid_serial(serial: &str) -> bool {
    let serial = serial.trim();
    if serial.is_empty() {
        return false;
    }

    let lowered = serial.to_lowercase();
    !(lowered == "n/a"
        || lowered == "none"
        || lowered.contains("o.e.m.")
        || lowered.contains("default"))
}

/// True for a configuration-store value that was actually found.
pub fn is_present(value: &str) -> bool {
    !value.is_empty() && value != NOT_PRESENT
}
