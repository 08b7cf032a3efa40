use std::fs;
use std::path::{Path, PathBuf};

use inventory::fixtures::{baseboard_body, end_of_table, record, system_body};
use inventory::{ConfigStore, FirmwareTableSource, HardwareItem, HardwarePlatform, Section};
use smbios_table::RawSmbiosData;

use super::*;
use crate::firmware::entry_point_version;

fn fixture_root(tag: &str) -> PathBuf {
    let base = std::env::temp_dir().join(format!(
        "serial-checker-linux-{tag}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default()
    ));
    fs::create_dir_all(&base).expect("create temp dir");
    base
}

fn write(root: &Path, relative: &str, contents: impl AsRef<[u8]>) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture dir");
    }
    fs::write(path, contents).expect("write fixture");
}

fn roots(base: &Path) -> SysRoots {
    SysRoots::new(base.join("sys"), base.join("proc"))
}

fn find<'a>(items: &'a [HardwareItem], category: &str, name: &str) -> Option<&'a HardwareItem> {
    items
        .iter()
        .find(|item| item.category == category && item.name == name)
}

fn smbios3_entry_point(major: u8, minor: u8) -> Vec<u8> {
    let mut entry = b"_SM3_".to_vec();
    entry.extend_from_slice(&[0x00, 0x18, major, minor, 0x00, 0x01, 0x00]);
    entry
}

#[test]
fn entry_point_versions_are_read_for_both_layouts() {
    assert_eq!(entry_point_version(&smbios3_entry_point(3, 4)), Some((3, 4)));

    let mut legacy = b"_SM_".to_vec();
    legacy.extend_from_slice(&[0x00, 0x1F, 2, 8]);
    assert_eq!(entry_point_version(&legacy), Some((2, 8)));

    assert_eq!(entry_point_version(b"_DMI_"), None);
    assert_eq!(entry_point_version(b"_SM3_"), None);
}

#[test]
fn dmi_table_is_wrapped_with_entry_point_version() {
    let base = fixture_root("dmi-table");
    let mut table = record(
        1,
        0x0001,
        &system_body(None),
        &["Acme", "Rocket", "1.0", "SN-LINUX-1"],
    );
    table.extend(end_of_table());
    write(&base, "sys/firmware/dmi/tables/DMI", &table);
    write(
        &base,
        "sys/firmware/dmi/tables/smbios_entry_point",
        smbios3_entry_point(3, 2),
    );

    let raw = DmiTableSource::new(roots(&base)).fetch_raw_table();
    let parsed = RawSmbiosData::parse(&raw).expect("parse wrapped table");
    assert_eq!(parsed.version(), (3, 2));
    assert_eq!(parsed.table, table);

    let _ = fs::remove_dir_all(&base);
}

#[test]
fn missing_dmi_table_yields_empty_buffer() {
    let base = fixture_root("dmi-missing");
    assert!(DmiTableSource::new(roots(&base)).fetch_raw_table().is_empty());
    let _ = fs::remove_dir_all(&base);
}

#[test]
fn dmi_id_store_maps_configuration_keys() {
    let base = fixture_root("dmi-id");
    write(&base, "sys/class/dmi/id/sys_vendor", "Acme Corp\n");
    write(&base, "sys/class/dmi/id/board_serial", "  BRD-777 \n");
    write(&base, "sys/class/dmi/id/product_version", "\n");

    let store = DmiIdStore::new(roots(&base));
    assert_eq!(store.read_value("", "", "SystemManufacturer"), "Acme Corp");
    assert_eq!(store.read_value("", "", "BaseBoardSerialNumber"), "BRD-777");
    assert_eq!(store.read_value("", "", "BaseBoardSerial"), "BRD-777");
    assert_eq!(store.read_value("", "", "SystemVersion"), "n/a");
    assert_eq!(store.read_value("", "", "SystemProductName"), "n/a");
    assert_eq!(store.read_value("", "", "Unknown"), "n/a");

    let _ = fs::remove_dir_all(&base);
}

#[test]
fn identity_falls_back_to_dmi_attributes_for_bad_serials() {
    let base = fixture_root("identity");
    let mut table = record(
        1,
        0x0001,
        &system_body(None),
        &["Acme", "Rocket", "1.0", "SN-LINUX-1"],
    );
    table.extend(record(
        2,
        0x0002,
        &baseboard_body(),
        &["Acme", "Board", "A01", "To be filled by O.E.M."],
    ));
    table.extend(end_of_table());
    write(&base, "sys/firmware/dmi/tables/DMI", &table);
    write(&base, "sys/class/dmi/id/board_serial", "BRD-REAL-9\n");

    let platform = LinuxPlatform::default().with_roots(roots(&base));
    let items = platform.collect(Section::Bios);

    let system = find(&items, "systemproduct", "serialnumber").expect("system serial");
    assert_eq!(system.value, "SN-LINUX-1");
    let board = find(&items, "baseboard", "serialnumber").expect("baseboard serial");
    assert_eq!(board.value, "BRD-REAL-9");
    assert!(!board.notes.is_empty());

    let _ = fs::remove_dir_all(&base);
}

#[test]
fn identity_without_table_reads_attributes() {
    let base = fixture_root("identity-absent");
    write(&base, "sys/class/dmi/id/sys_vendor", "Acme\n");
    write(&base, "sys/class/dmi/id/product_serial", "SYS-42\n");

    let items = LinuxPlatform::default()
        .with_roots(roots(&base))
        .collect(Section::Bios);

    let error = find(&items, "bios", "error").expect("error item");
    assert_eq!(error.value, "failed to retrieve smbios data");
    assert_eq!(
        find(&items, "systemproduct", "manufacturer").map(|item| item.value.as_str()),
        Some("Acme")
    );
    assert_eq!(
        find(&items, "systemproduct", "serialnumber").map(|item| item.value.as_str()),
        Some("SYS-42")
    );

    let _ = fs::remove_dir_all(&base);
}

#[test]
fn block_devices_report_serial_and_model() {
    let base = fixture_root("disks");
    write(&base, "sys/block/nvme0n1/device/serial", "s5h9nx0n123456\n");
    write(&base, "sys/block/nvme0n1/device/model", "Samsung SSD 980 PRO\n");
    let mut page = vec![0x00, 0x80, 0x00, 0x08];
    page.extend_from_slice(b"WD-ABCD1");
    write(&base, "sys/block/sda/device/vpd_pg80", page);
    write(&base, "sys/block/sda/device/model", "WDC WD10EZEX\n");
    write(&base, "sys/block/loop0/device/model", "loop\n");

    let items = collectors::disk::collect_disks(&roots(&base));
    assert_eq!(
        find(&items, "disk", "serial_0").map(|item| item.value.as_str()),
        Some("S5H9NX0N123456")
    );
    assert_eq!(
        find(&items, "disk", "model_0").map(|item| item.value.as_str()),
        Some("samsung ssd 980 pro")
    );
    assert_eq!(
        find(&items, "disk", "serial_1").map(|item| item.value.as_str()),
        Some("WD-ABCD1")
    );
    assert!(items.iter().all(|item| item.value != "loop"));

    let _ = fs::remove_dir_all(&base);
}

#[test]
fn empty_tree_yields_placeholders() {
    let base = fixture_root("empty");
    let roots = roots(&base);

    let disks = collectors::disk::collect_disks(&roots);
    assert_eq!(disks.len(), 1);
    assert_eq!(disks[0].name, "info");

    let monitors = collectors::monitor::collect_monitors(&roots);
    assert_eq!(monitors[0].value, "no monitors found with edid serials");

    let usb = collectors::usb::collect_usb(&roots);
    assert_eq!(usb[0].value, "no connected usb devices found");

    let arp = collectors::arp::collect_arp(&roots);
    assert_eq!(arp[0].value, "no arp entries found");

    let _ = fs::remove_dir_all(&base);
}

#[test]
fn display_controllers_are_filtered_by_pci_class() {
    let base = fixture_root("gpu");
    write(&base, "sys/bus/pci/devices/0000:00:02.0/class", "0x030000\n");
    write(&base, "sys/bus/pci/devices/0000:00:02.0/vendor", "0x8086\n");
    write(&base, "sys/bus/pci/devices/0000:00:02.0/device", "0x46a6\n");
    write(&base, "sys/bus/pci/devices/0000:00:02.0/uevent", "DRIVER=i915\n");
    write(&base, "sys/module/i915/version", "1.6.0\n");
    write(&base, "sys/bus/pci/devices/0000:00:1f.3/class", "0x040300\n");

    let adapters = collectors::gpu::read_adapters(&roots(&base));
    assert_eq!(adapters.len(), 1);
    assert_eq!(adapters[0].name, "i915 (8086:46a6)");
    assert_eq!(adapters[0].driver_version, "1.6.0");

    let _ = fs::remove_dir_all(&base);
}

#[test]
fn interfaces_split_configured_and_kernel_addresses() {
    let base = fixture_root("nic");
    write(&base, "sys/class/net/lo/address", "00:00:00:00:00:00\n");
    write(&base, "sys/class/net/eth0/address", "00:15:5d:01:02:03\n");
    write(&base, "sys/class/net/eth0/addr_assign_type", "0\n");
    write(&base, "sys/class/net/wlan0/address", "02:aa:bb:cc:dd:ee\n");
    write(&base, "sys/class/net/wlan0/addr_assign_type", "3\n");

    let (configured, kernel) = collectors::nic::read_interfaces(&roots(&base));
    assert_eq!(configured.len(), 1);
    assert_eq!(configured[0].description, "wlan0");
    assert_eq!(configured[0].address, "02aabbccddee");
    assert_eq!(kernel.len(), 2);
    assert_eq!(kernel[0].description, "eth0");

    let items = collectors::nic::collect_nics(&roots(&base));
    assert!(items.iter().any(|item| item.value == "02:aa:bb:cc:dd:ee"));

    let _ = fs::remove_dir_all(&base);
}

#[test]
fn usb_devices_get_instance_ids_by_interface_class() {
    let base = fixture_root("usb");
    write(&base, "sys/bus/usb/devices/usb1/idVendor", "1d6b\n");
    write(&base, "sys/bus/usb/devices/usb1/idProduct", "0002\n");
    write(&base, "sys/bus/usb/devices/1-1/idVendor", "0781\n");
    write(&base, "sys/bus/usb/devices/1-1/idProduct", "5581\n");
    write(&base, "sys/bus/usb/devices/1-1/serial", "4C530001\n");
    write(&base, "sys/bus/usb/devices/1-1/manufacturer", "SanDisk\n");
    write(&base, "sys/bus/usb/devices/1-1/product", "Ultra\n");
    write(&base, "sys/bus/usb/devices/1-1:1.0/bInterfaceClass", "08\n");
    write(&base, "sys/bus/usb/devices/1-2/idVendor", "046d\n");
    write(&base, "sys/bus/usb/devices/1-2/idProduct", "c52b\n");
    write(&base, "sys/bus/usb/devices/1-2/product", "USB Receiver\n");
    write(&base, "sys/bus/usb/devices/1-2:1.0/bInterfaceClass", "03\n");

    let devices = collectors::usb::read_devices(&roots(&base));
    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0].enumerator, "USBSTOR");
    assert_eq!(
        devices[0].instance_id,
        "USBSTOR\\Disk&Ven_SanDisk&Prod_Ultra\\4C530001&0"
    );
    assert_eq!(devices[1].enumerator, "USB");
    assert!(devices[1].instance_id.starts_with("USB\\VID_046D&PID_C52B\\"));

    let items = collectors::usb::collect_usb(&roots(&base));
    assert!(items.iter().any(|item| item.value == "4C530001"));

    let _ = fs::remove_dir_all(&base);
}
