use inventory::fallback::{
    BASEBOARD_CLASS, BASEBOARD_PROPERTY, SYSTEM_PRODUCT_CLASS, SYSTEM_PRODUCT_PROPERTY,
};
use inventory::fixtures::{baseboard_body, end_of_table, record, MapConfigStore, MapQuery, StaticTable};
use inventory::{is_valid_serial, HardwareItem, IdentityResolver};
use smbios_table::{decode_structures, format_uuid, RawSmbiosData};

fn find<'a>(items: &'a [HardwareItem], category: &str, name: &str) -> Vec<&'a HardwareItem> {
    items
        .iter()
        .filter(|item| item.category == category && item.name == name)
        .collect()
}

/// One type-1 record with an empty version string and a placeholder serial,
/// no UUID bytes.
fn placeholder_system_table() -> Vec<u8> {
    let mut table = record(1, 0x0100, &[1, 2, 0, 3], &["Acme", "X1", "Default string"]);
    table.extend(end_of_table());
    table
}

#[test]
fn placeholder_system_serial_escalates_to_management_query() {
    let config = MapConfigStore::default();
    let query = MapQuery::default().with(SYSTEM_PRODUCT_CLASS, SYSTEM_PRODUCT_PROPERTY, "PF-3XYZ91");
    let items = IdentityResolver::new(&config, &query)
        .collect(&StaticTable::from_structures(&placeholder_system_table()));

    assert_eq!(find(&items, "systemproduct", "manufacturer")[0].value, "Acme");
    assert_eq!(find(&items, "systemproduct", "productname")[0].value, "X1");
    let versions = find(&items, "systemproduct", "version");
    assert!(!versions.is_empty());
    assert!(versions.iter().all(|item| item.value.is_empty()));

    let serial = find(&items, "systemproduct", "serialnumber");
    assert_eq!(serial.len(), 1);
    assert_eq!(serial[0].value, "PF-3XYZ91");
    assert_eq!(serial[0].notes, "source: management query");

    assert!(find(&items, "systemproduct", "uuid").is_empty());
    assert_eq!(
        query.calls()[0],
        (SYSTEM_PRODUCT_CLASS.to_string(), SYSTEM_PRODUCT_PROPERTY.to_string())
    );
}

#[test]
fn resolution_is_idempotent() {
    let config = MapConfigStore::default().with("BaseBoardSerialNumber", "BRD-1");
    let query = MapQuery::default().with(SYSTEM_PRODUCT_CLASS, SYSTEM_PRODUCT_PROPERTY, "PF-1");
    let source = StaticTable::from_structures(&placeholder_system_table());
    let resolver = IdentityResolver::new(&config, &query);

    let first = resolver.collect(&source);
    let second = resolver.collect(&source);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_vec(&first).expect("serialize first"),
        serde_json::to_vec(&second).expect("serialize second")
    );
}

#[test]
fn short_buffers_are_treated_as_absent_tables() {
    let config = MapConfigStore::default().with("SystemManufacturer", "Acme");
    let query = MapQuery::default();
    let resolver = IdentityResolver::new(&config, &query);

    for len in 0..8 {
        assert!(RawSmbiosData::parse(&vec![0u8; len]).is_err());
        let items = resolver.collect(&StaticTable(vec![0u8; len]));
        let error = find(&items, "bios", "error");
        assert_eq!(error.len(), 1, "len {len}");
        assert_eq!(error[0].value, "failed to retrieve smbios data");
        assert_eq!(error[0].notes, "may require administrator privileges");
        assert_eq!(find(&items, "systemproduct", "manufacturer")[0].value, "Acme");
    }
}

#[test]
fn baseboard_serial_tries_registry_then_legacy_then_query() {
    let mut table = record(1, 0x0100, &[1, 2, 3, 4], &["Acme", "X1", "1.0", "SYS-OK-1"]);
    table.extend(record(
        2,
        0x0200,
        &baseboard_body(),
        &["Acme", "Board", "A01", "To be filled by O.E.M."],
    ));
    table.extend(end_of_table());
    let source = StaticTable::from_structures(&table);

    let config = MapConfigStore::default()
        .with("BaseBoardSerialNumber", "Default string")
        .with("BaseBoardSerial", "none");
    let query = MapQuery::default().with(BASEBOARD_CLASS, BASEBOARD_PROPERTY, "MB-778812");
    let items = IdentityResolver::new(&config, &query).collect(&source);

    assert_eq!(
        config.reads(),
        vec!["BaseBoardSerialNumber".to_string(), "BaseBoardSerial".to_string()]
    );
    assert_eq!(
        query.calls(),
        vec![(BASEBOARD_CLASS.to_string(), BASEBOARD_PROPERTY.to_string())]
    );
    let serial = find(&items, "baseboard", "serialnumber");
    assert_eq!(serial[0].value, "MB-778812");
    assert_eq!(find(&items, "systemproduct", "serialnumber")[0].value, "SYS-OK-1");
}

#[test]
fn truncated_record_stops_decoding_without_emission() {
    let mut table = record(0, 0x0000, &[1, 2, 0, 0, 3], &["Vendor", "1.0", "01/01/2024"]);
    let mut oversized = vec![1u8, 200, 0x01, 0x00];
    oversized.extend(std::iter::repeat(0u8).take(46));
    assert_eq!(oversized.len(), 50);
    table.extend(oversized);

    let structures = decode_structures(&table);
    assert_eq!(structures.len(), 1);
    assert_eq!(structures[0].type_id(), 0);
}

#[test]
fn serial_heuristic_literals() {
    for invalid in ["", "N/A", "None", "To be filled by O.E.M.", "Default string"] {
        assert!(!is_valid_serial(invalid), "{invalid:?}");
    }
    assert!(is_valid_serial("SN-88412-X"));
}

#[test]
fn uuid_renders_with_swapped_leading_groups() {
    let bytes: [u8; 16] = [
        0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F,
        0x10,
    ];
    assert_eq!(format_uuid(&bytes), "04030201-0605-0807-090A-0B0C0D0E0F10");
}
