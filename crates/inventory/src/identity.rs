//! Firmware identity resolution.
//!
//! Turns decoded SMBIOS records into `bios`, `systemproduct`, `baseboard`
//! and `chassis` items. Serial numbers that fail the validity heuristic are
//! escalated through the chains in [`crate::fallback`]; categories missing
//! from the table are read from the configuration store instead.

use smbios_table::{
    chassis_type_name, format_uuid, BaseboardInfo, BiosInfo, ChassisInfo, RawSmbiosData,
    Structure, SystemInfo, UuidState, NOT_PRESENT,
};
use tracing::debug;

use crate::fallback::{
    FallbackChain, ResolveContext, ValueSource, BASEBOARD_REGISTRY_SERIAL_CHAIN,
    BASEBOARD_SERIAL_CHAIN, SYSTEM_REGISTRY_SERIAL_CHAIN, SYSTEM_SERIAL_CHAIN,
};
use crate::item::HardwareItem;
use crate::sources::{
    ConfigStore, FirmwareTableSource, ManagementQuery, FIRMWARE_KEY_PATH, FIRMWARE_KEY_ROOT,
};

pub const CATEGORY_BIOS: &str = "bios";
pub const CATEGORY_SYSTEM: &str = "systemproduct";
pub const CATEGORY_BASEBOARD: &str = "baseboard";
pub const CATEGORY_CHASSIS: &str = "chassis";

const TABLE_UNAVAILABLE: &str = "failed to retrieve smbios data";
const TABLE_UNAVAILABLE_HINT: &str = "may require administrator privileges";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Emit the system-product `version` item twice, matching the layout
    /// existing consumers of this report already parse.
    pub duplicate_version: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            duplicate_version: true,
        }
    }
}

pub struct IdentityResolver<'a> {
    config: &'a dyn ConfigStore,
    query: &'a dyn ManagementQuery,
    options: ResolverOptions,
}

impl<'a> IdentityResolver<'a> {
    pub fn new(config: &'a dyn ConfigStore, query: &'a dyn ManagementQuery) -> Self {
        Self {
            config,
            query,
            options: ResolverOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ResolverOptions) -> Self {
        self.options = options;
        self
    }

    /// Fetch, decode and resolve in one pass.
    pub fn collect(&self, source: &dyn FirmwareTableSource) -> Vec<HardwareItem> {
        let raw = source.fetch_raw_table();
        match RawSmbiosData::parse(&raw) {
            Ok(table) => {
                let (major, minor) = table.version();
                debug!(major, minor, bytes = table.table.len(), "smbios table loaded");
                self.resolve(&table.structures())
            }
            Err(err) => {
                debug!(error = %err, "smbios table unavailable");
                self.resolve_without_table()
            }
        }
    }

    /// Items for a decoded table, in category order.
    pub fn resolve(&self, structures: &[Structure]) -> Vec<HardwareItem> {
        let mut items = self.bios_items(structures);
        items.extend(self.system_items(structures));
        items.extend(self.baseboard_items(structures));
        items.extend(chassis_items(structures));
        items
    }

    /// Items when no usable table exists: an error marker for the firmware
    /// category followed by the configuration-store fallbacks.
    pub fn resolve_without_table(&self) -> Vec<HardwareItem> {
        let mut items = vec![HardwareItem::new(CATEGORY_BIOS, "error", TABLE_UNAVAILABLE)
            .with_notes(TABLE_UNAVAILABLE_HINT)];
        items.extend(self.system_from_registry());
        items.extend(self.baseboard_from_registry());
        items
    }

    fn bios_items(&self, structures: &[Structure]) -> Vec<HardwareItem> {
        let mut items = Vec::new();
        for bios in structures.iter().filter_map(BiosInfo::from_structure) {
            items.push(HardwareItem::new(CATEGORY_BIOS, "vendor", bios.vendor()));
            items.push(HardwareItem::new(CATEGORY_BIOS, "version", bios.version()));
            items.push(HardwareItem::new(
                CATEGORY_BIOS,
                "releasedate",
                bios.release_date(),
            ));
            if let Some((major, minor)) = bios.firmware_release() {
                items.push(HardwareItem::new(
                    CATEGORY_BIOS,
                    "firmwarerelease",
                    format!("{major}.{minor}"),
                ));
            }
        }
        if items.is_empty() {
            items.push(HardwareItem::new(
                CATEGORY_BIOS,
                "info",
                "no firmware information record",
            ));
        }
        items
    }

    fn system_items(&self, structures: &[Structure]) -> Vec<HardwareItem> {
        let records: Vec<SystemInfo<'_>> =
            structures.iter().filter_map(SystemInfo::from_structure).collect();
        if records.is_empty() {
            debug!("no system record, reading configuration store");
            return self.system_from_registry();
        }

        let mut items = Vec::new();
        for system in records {
            items.push(HardwareItem::new(
                CATEGORY_SYSTEM,
                "manufacturer",
                system.manufacturer(),
            ));
            items.push(HardwareItem::new(
                CATEGORY_SYSTEM,
                "productname",
                system.product_name(),
            ));
            let version = system.version();
            items.push(HardwareItem::new(CATEGORY_SYSTEM, "version", version.clone()));
            if self.options.duplicate_version {
                items.push(HardwareItem::new(CATEGORY_SYSTEM, "version", version));
            }
            items.push(self.firmware_serial_item(
                CATEGORY_SYSTEM,
                &system.serial_number(),
                &SYSTEM_SERIAL_CHAIN,
            ));
            if let Some(uuid) = system.uuid() {
                items.push(
                    HardwareItem::new(CATEGORY_SYSTEM, "uuid", format_uuid(&uuid))
                        .with_notes(UuidState::classify(&uuid).note()),
                );
            }
            if let Some(sku) = system.sku() {
                items.push(HardwareItem::new(CATEGORY_SYSTEM, "sku", sku));
            }
            if let Some(family) = system.family() {
                items.push(HardwareItem::new(CATEGORY_SYSTEM, "family", family));
            }
        }
        items
    }

    fn baseboard_items(&self, structures: &[Structure]) -> Vec<HardwareItem> {
        let records: Vec<BaseboardInfo<'_>> = structures
            .iter()
            .filter_map(BaseboardInfo::from_structure)
            .collect();
        if records.is_empty() {
            debug!("no baseboard record, reading configuration store");
            return self.baseboard_from_registry();
        }

        let mut items = Vec::new();
        for board in records {
            items.push(HardwareItem::new(
                CATEGORY_BASEBOARD,
                "manufacturer",
                board.manufacturer(),
            ));
            items.push(HardwareItem::new(CATEGORY_BASEBOARD, "product", board.product()));
            items.push(HardwareItem::new(CATEGORY_BASEBOARD, "version", board.version()));
            items.push(self.firmware_serial_item(
                CATEGORY_BASEBOARD,
                &board.serial_number(),
                &BASEBOARD_SERIAL_CHAIN,
            ));
        }
        items
    }

    fn system_from_registry(&self) -> Vec<HardwareItem> {
        vec![
            HardwareItem::new(
                CATEGORY_SYSTEM,
                "manufacturer",
                self.registry("SystemManufacturer"),
            ),
            HardwareItem::new(
                CATEGORY_SYSTEM,
                "productname",
                self.registry("SystemProductName"),
            ),
            HardwareItem::new(CATEGORY_SYSTEM, "version", self.registry("SystemVersion")),
            self.registry_serial_item(CATEGORY_SYSTEM, &SYSTEM_REGISTRY_SERIAL_CHAIN),
        ]
    }

    fn baseboard_from_registry(&self) -> Vec<HardwareItem> {
        vec![
            HardwareItem::new(
                CATEGORY_BASEBOARD,
                "manufacturer",
                self.registry("BaseBoardManufacturer"),
            ),
            HardwareItem::new(
                CATEGORY_BASEBOARD,
                "product",
                self.registry("BaseBoardProduct"),
            ),
            HardwareItem::new(
                CATEGORY_BASEBOARD,
                "version",
                self.registry("BaseBoardVersion"),
            ),
            self.registry_serial_item(CATEGORY_BASEBOARD, &BASEBOARD_REGISTRY_SERIAL_CHAIN),
        ]
    }

    fn registry(&self, key: &str) -> String {
        self.config
            .read_value(FIRMWARE_KEY_ROOT, FIRMWARE_KEY_PATH, key)
    }

    fn context<'c>(&'c self, firmware_value: Option<&'c str>) -> ResolveContext<'c> {
        ResolveContext::new(firmware_value, self.config, self.query)
    }

    /// Serial item for a firmware record; keeps the raw value when nothing
    /// better turns up.
    fn firmware_serial_item(
        &self,
        category: &str,
        raw: &str,
        chain: &FallbackChain,
    ) -> HardwareItem {
        match chain.resolve(&self.context(Some(raw))) {
            Some(resolved) => serial_item(category, resolved.value, resolved.source),
            None => HardwareItem::new(category, "serialnumber", raw),
        }
    }

    /// Serial item for the configuration-store path; keeps the first present
    /// value the chain read when nothing passes the heuristic.
    fn registry_serial_item(&self, category: &str, chain: &FallbackChain) -> HardwareItem {
        let ctx = self.context(None);
        if let Some(resolved) = chain.resolve(&ctx) {
            return serial_item(category, resolved.value, resolved.source);
        }
        let stored = ctx
            .first_stored()
            .unwrap_or_else(|| NOT_PRESENT.to_string());
        HardwareItem::new(category, "serialnumber", stored)
    }
}

fn serial_item(category: &str, value: String, source: ValueSource) -> HardwareItem {
    HardwareItem::new(category, "serialnumber", value).with_notes(source.note())
}

fn chassis_items(structures: &[Structure]) -> Vec<HardwareItem> {
    let mut items = Vec::new();
    for chassis in structures.iter().filter_map(ChassisInfo::from_structure) {
        items.push(HardwareItem::new(
            CATEGORY_CHASSIS,
            "manufacturer",
            chassis.manufacturer(),
        ));
        items.push(HardwareItem::new(CATEGORY_CHASSIS, "version", chassis.version()));
        items.push(HardwareItem::new(
            CATEGORY_CHASSIS,
            "serialnumber",
            chassis.serial_number(),
        ));
        items.push(HardwareItem::new(CATEGORY_CHASSIS, "assettag", chassis.asset_tag()));
        if let Some(code) = chassis.chassis_type() {
            let mut notes = chassis_type_name(code).to_string();
            if chassis.lock_present() {
                notes.push_str("; lock present");
            }
            items.push(HardwareItem::new(CATEGORY_CHASSIS, "type", code.to_string()).with_notes(notes));
        }
    }
    if items.is_empty() {
        items.push(HardwareItem::new(CATEGORY_CHASSIS, "info", "no chassis record"));
    }
    items
}
