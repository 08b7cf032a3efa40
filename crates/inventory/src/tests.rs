use smbios_table::decode_structures;

use super::fallback::{
    ResolveContext, ValueSource, BASEBOARD_CLASS, BASEBOARD_PROPERTY, BASEBOARD_SERIAL_CHAIN,
    SYSTEM_PRODUCT_CLASS, SYSTEM_PRODUCT_PROPERTY,
};
use super::fixtures::{
    baseboard_body, end_of_table, record, system_body, MapConfigStore, MapQuery, StaticTable,
};
use super::*;

fn table(records: &[Vec<u8>]) -> Vec<u8> {
    let mut out: Vec<u8> = records.concat();
    out.extend(end_of_table());
    out
}

fn find<'a>(items: &'a [HardwareItem], category: &str, name: &str) -> &'a HardwareItem {
    items
        .iter()
        .find(|item| item.category == category && item.name == name)
        .unwrap_or_else(|| panic!("missing {category}/{name}"))
}

fn names(items: &[HardwareItem], category: &str) -> Vec<String> {
    items
        .iter()
        .filter(|item| item.category == category)
        .map(|item| item.name.clone())
        .collect()
}

const UUID: [u8; 16] = [
    0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F,
    0x10,
];

#[test]
fn valid_firmware_serials_skip_every_fallback() {
    let raw = table(&[
        record(1, 1, &system_body(Some(UUID)), &["Acme", "X1", "1.0", "SYS-001"]),
        record(2, 2, &baseboard_body(), &["Acme", "B1", "rev2", "BRD-001"]),
    ]);
    let config = MapConfigStore::default();
    let query = MapQuery::default();

    let items = IdentityResolver::new(&config, &query).resolve(&decode_structures(&raw));

    let serial = find(&items, "systemproduct", "serialnumber");
    assert_eq!(serial.value, "SYS-001");
    assert_eq!(serial.notes, "");
    assert_eq!(find(&items, "baseboard", "serialnumber").value, "BRD-001");
    assert_eq!(
        find(&items, "systemproduct", "uuid").value,
        "04030201-0605-0807-090A-0B0C0D0E0F10"
    );
    assert!(query.calls().is_empty());
    assert!(config.reads().is_empty());
}

#[test]
fn placeholder_system_serial_escalates_to_management_query() {
    let raw = table(&[record(
        1,
        1,
        &system_body(None),
        &["Acme", "X1", "1.0", "To be filled by O.E.M."],
    )]);
    let config = MapConfigStore::default();
    let query = MapQuery::default().with(SYSTEM_PRODUCT_CLASS, SYSTEM_PRODUCT_PROPERTY, " PF3XYZ ");

    let items = IdentityResolver::new(&config, &query).resolve(&decode_structures(&raw));

    let serial = find(&items, "systemproduct", "serialnumber");
    assert_eq!(serial.value, "PF3XYZ");
    assert_eq!(serial.notes, "source: management query");
    assert!(names(&items, "systemproduct").iter().all(|name| name != "uuid"));
}

#[test]
fn unrecoverable_system_serial_keeps_firmware_value() {
    let raw = table(&[record(1, 1, &system_body(None), &["Acme", "X1", "1.0", "Default string"])]);
    let config = MapConfigStore::default();
    let query = MapQuery::default().with(SYSTEM_PRODUCT_CLASS, SYSTEM_PRODUCT_PROPERTY, "Default string");

    let items = IdentityResolver::new(&config, &query).resolve(&decode_structures(&raw));

    let serial = find(&items, "systemproduct", "serialnumber");
    assert_eq!(serial.value, "Default string");
    assert_eq!(serial.notes, "");
}

#[test]
fn baseboard_chain_prefers_registry_then_legacy_then_query() {
    let raw = table(&[
        record(1, 1, &system_body(None), &["Acme", "X1", "1.0", "SYS-001"]),
        record(2, 2, &baseboard_body(), &["Acme", "B1", "rev2", "None"]),
    ]);
    let structures = decode_structures(&raw);

    let config = MapConfigStore::default()
        .with("BaseBoardSerialNumber", "n/a")
        .with("BaseBoardSerial", "  LEGACY-77 ");
    let query = MapQuery::default().with(BASEBOARD_CLASS, BASEBOARD_PROPERTY, "WMI-BOARD");
    let items = IdentityResolver::new(&config, &query).resolve(&structures);
    let serial = find(&items, "baseboard", "serialnumber");
    assert_eq!(serial.value, "LEGACY-77");
    assert_eq!(serial.notes, "source: registry");
    assert_eq!(config.reads(), vec!["BaseBoardSerialNumber", "BaseBoardSerial"]);
    assert!(query.calls().is_empty());

    let config = MapConfigStore::default().with("BaseBoardSerialNumber", "O.E.M. Default");
    let items = IdentityResolver::new(&config, &query).resolve(&structures);
    let serial = find(&items, "baseboard", "serialnumber");
    assert_eq!(serial.value, "WMI-BOARD");
    assert_eq!(serial.notes, "source: management query");
}

#[test]
fn chain_steps_are_ordered() {
    let steps: Vec<&str> = BASEBOARD_SERIAL_CHAIN.step_names().collect();
    assert_eq!(steps, vec!["firmware", "registry", "registry-legacy", "management-query"]);

    let config = MapConfigStore::default().with("BaseBoardSerialNumber", "REG-1");
    let query = MapQuery::default();
    let ctx = ResolveContext::new(Some("FW-1"), &config, &query);
    let resolved = BASEBOARD_SERIAL_CHAIN.resolve(&ctx).expect("resolved");
    assert_eq!(resolved.value, "FW-1");
    assert_eq!(resolved.source, ValueSource::Firmware);
}

#[test]
fn chassis_uses_raw_values_without_fallback() {
    let mut body = vec![1, 0x83, 2, 3, 4];
    body.extend_from_slice(&[0x03, 0x03, 0x03, 0x03]);
    let raw = table(&[record(3, 3, &body, &["Acme", "C1", "Default string", "ASSET-9"])]);
    let query = MapQuery::default();
    let config = MapConfigStore::default();

    let items = IdentityResolver::new(&config, &query).resolve(&decode_structures(&raw));

    assert_eq!(
        names(&items, "chassis"),
        vec!["manufacturer", "version", "serialnumber", "assettag", "type"]
    );
    assert_eq!(find(&items, "chassis", "serialnumber").value, "Default string");
    let kind = find(&items, "chassis", "type");
    assert_eq!(kind.value, "3");
    assert_eq!(kind.notes, "desktop; lock present");
}

#[test]
fn missing_records_read_the_configuration_store() {
    let raw = table(&[record(0, 0, &[1, 2, 0, 0, 3], &["Vendor", "1.2", "01/02/2024"])]);
    let config = MapConfigStore::default()
        .with("SystemManufacturer", "Acme")
        .with("SystemProductName", "X1")
        .with("SystemSerialNumber", "Default string")
        .with("BaseBoardManufacturer", "Acme");
    let query = MapQuery::default();

    let items = IdentityResolver::new(&config, &query).resolve(&decode_structures(&raw));

    assert_eq!(find(&items, "bios", "releasedate").value, "01/02/2024");
    assert_eq!(find(&items, "systemproduct", "manufacturer").value, "Acme");
    assert_eq!(find(&items, "systemproduct", "version").value, "n/a");
    assert_eq!(find(&items, "systemproduct", "serialnumber").value, "Default string");
    assert_eq!(find(&items, "baseboard", "serialnumber").value, "n/a");
    assert_eq!(find(&items, "chassis", "info").value, "no chassis record");
    assert_eq!(
        query.calls(),
        vec![
            (SYSTEM_PRODUCT_CLASS.to_string(), SYSTEM_PRODUCT_PROPERTY.to_string()),
            (BASEBOARD_CLASS.to_string(), BASEBOARD_PROPERTY.to_string()),
        ]
    );
}

#[test]
fn registry_only_path_reads_each_serial_key_once() {
    let raw = table(&[record(0, 0, &[1, 2, 0, 0, 3], &["Vendor", "1.2", "01/02/2024"])]);
    let config = MapConfigStore::default()
        .with("SystemSerialNumber", "Default string")
        .with("BaseBoardSerial", "To be filled by O.E.M.");
    let query = MapQuery::default();

    let items = IdentityResolver::new(&config, &query).resolve(&decode_structures(&raw));

    let reads = config.reads();
    let count = |key: &str| reads.iter().filter(|read| read.as_str() == key).count();
    assert_eq!(count("SystemSerialNumber"), 1);
    assert_eq!(count("BaseBoardSerialNumber"), 1);
    assert_eq!(count("BaseBoardSerial"), 1);

    assert_eq!(find(&items, "systemproduct", "serialnumber").value, "Default string");
    let board = find(&items, "baseboard", "serialnumber");
    assert_eq!(board.value, "To be filled by O.E.M.");
    assert_eq!(board.notes, "");
}

#[test]
fn placeholder_query_answer_keeps_firmware_value() {
    let raw = table(&[record(1, 1, &system_body(None), &["Acme", "X1", "1.0", "Default string"])]);
    let config = MapConfigStore::default();
    let query = MapQuery::default().with(
        SYSTEM_PRODUCT_CLASS,
        SYSTEM_PRODUCT_PROPERTY,
        "To be filled by O.E.M.",
    );

    let items = IdentityResolver::new(&config, &query).resolve(&decode_structures(&raw));

    let serial = find(&items, "systemproduct", "serialnumber");
    assert_eq!(serial.value, "Default string");
    assert_eq!(serial.notes, "");
    assert_eq!(
        query.calls()[0],
        (SYSTEM_PRODUCT_CLASS.to_string(), SYSTEM_PRODUCT_PROPERTY.to_string())
    );
}

#[test]
fn absent_table_reports_error_and_registry_values() {
    let config = MapConfigStore::default()
        .with("SystemSerialNumber", "REG-SYS")
        .with("BaseBoardProduct", "B1");
    let query = MapQuery::default();
    let resolver = IdentityResolver::new(&config, &query);

    for raw in [Vec::new(), vec![0, 3, 4, 0, 0, 0, 0], vec![0, 3, 4, 0, 0, 0, 0, 0, 1, 2]] {
        let items = resolver.collect(&StaticTable(raw));
        assert_eq!(items[0].category, "bios");
        assert_eq!(items[0].name, "error");
        assert_eq!(items[0].value, "failed to retrieve smbios data");
        assert_eq!(items[0].notes, "may require administrator privileges");
        let serial = find(&items, "systemproduct", "serialnumber");
        assert_eq!(serial.value, "REG-SYS");
        assert_eq!(serial.notes, "source: registry");
        assert_eq!(find(&items, "baseboard", "product").value, "B1");
    }
}

#[test]
fn categories_follow_fixed_order() {
    let raw = table(&[
        record(3, 3, &[1, 0x01, 0, 0, 0], &["Acme"]),
        record(2, 2, &baseboard_body(), &["Acme", "B1", "rev2", "BRD-001"]),
        record(1, 1, &system_body(None), &["Acme", "X1", "1.0", "SYS-001"]),
        record(0, 0, &[1, 2, 0, 0, 0], &["Vendor", "1.2"]),
    ]);
    let config = MapConfigStore::default();
    let query = MapQuery::default();

    let items = IdentityResolver::new(&config, &query).collect(&StaticTable::from_structures(&raw));

    let mut categories: Vec<&str> = items.iter().map(|item| item.category.as_str()).collect();
    categories.dedup();
    assert_eq!(categories, vec!["bios", "systemproduct", "baseboard", "chassis"]);
}

#[test]
fn duplicate_version_is_optional() {
    let raw = table(&[record(1, 1, &system_body(None), &["Acme", "X1", "1.0", "SYS-001"])]);
    let structures = decode_structures(&raw);
    let config = MapConfigStore::default();
    let query = MapQuery::default();

    let items = IdentityResolver::new(&config, &query).resolve(&structures);
    assert_eq!(
        names(&items, "systemproduct"),
        vec!["manufacturer", "productname", "version", "version", "serialnumber"]
    );

    let items = IdentityResolver::new(&config, &query)
        .with_options(ResolverOptions {
            duplicate_version: false,
        })
        .resolve(&structures);
    assert_eq!(
        names(&items, "systemproduct"),
        vec!["manufacturer", "productname", "version", "serialnumber"]
    );
}

#[test]
fn uuid_state_lands_in_notes() {
    let raw = table(&[record(1, 1, &system_body(Some([0xFF; 16])), &["A", "B", "C", "SYS-1"])]);
    let config = MapConfigStore::default();
    let query = MapQuery::default();

    let items = IdentityResolver::new(&config, &query).resolve(&decode_structures(&raw));

    let uuid = find(&items, "systemproduct", "uuid");
    assert_eq!(uuid.value, "FFFFFFFF-FFFF-FFFF-FFFF-FFFFFFFFFFFF");
    assert_eq!(uuid.notes, "not present");
}

#[test]
fn sections_parse_keys_and_aliases() {
    for section in Section::ALL {
        assert_eq!(Section::parse(section.key()), Some(section));
    }
    assert_eq!(Section::parse(" NIC "), Some(Section::Network));
    assert_eq!(Section::parse("floppy"), None);
}

#[test]
fn items_serialise_with_field_names() {
    let item = HardwareItem::new("disk", "serial_0", "ABC").with_notes("physical drive 0");
    let json = serde_json::to_value(&item).expect("serialise");
    assert_eq!(json["category"], "disk");
    assert_eq!(json["notes"], "physical drive 0");
}
