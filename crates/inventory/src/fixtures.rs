//! In-memory collaborators and table builders for tests.

use std::cell::RefCell;
use std::collections::HashMap;

use smbios_table::{RawSmbiosData, NOT_PRESENT};

use crate::sources::{ConfigStore, FirmwareTableSource, ManagementQuery};

/// Firmware source returning a fixed blob.
#[derive(Debug, Default, Clone)]
pub struct StaticTable(pub Vec<u8>);

impl StaticTable {
    /// Wrap a bare structure table in the raw header.
    pub fn from_structures(table: &[u8]) -> Self {
        Self(RawSmbiosData::encode(3, 4, table))
    }
}

impl FirmwareTableSource for StaticTable {
    fn fetch_raw_table(&self) -> Vec<u8> {
        self.0.clone()
    }
}

/// Configuration store keyed by value name only.
#[derive(Debug, Default)]
pub struct MapConfigStore {
    values: HashMap<String, String>,
    reads: RefCell<Vec<String>>,
}

impl MapConfigStore {
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    pub fn reads(&self) -> Vec<String> {
        self.reads.borrow().clone()
    }
}

impl ConfigStore for MapConfigStore {
    fn read_value(&self, _root: &str, _path: &str, key: &str) -> String {
        self.reads.borrow_mut().push(key.to_string());
        match self.values.get(key).map(|value| value.trim()) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => NOT_PRESENT.to_string(),
        }
    }
}

/// Management query answering from a `(class, property)` map and recording
/// every call.
#[derive(Debug, Default)]
pub struct MapQuery {
    values: HashMap<(String, String), String>,
    calls: RefCell<Vec<(String, String)>>,
}

impl MapQuery {
    pub fn with(mut self, class: &str, property: &str, value: &str) -> Self {
        self.values
            .insert((class.to_string(), property.to_string()), value.to_string());
        self
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.borrow().clone()
    }
}

impl ManagementQuery for MapQuery {
    fn query_property(&self, class: &str, property: &str) -> String {
        let key = (class.to_string(), property.to_string());
        let value = self.values.get(&key).cloned().unwrap_or_default();
        self.calls.borrow_mut().push(key);
        value
    }
}

/// Encode one record: header, body, then the string set.
pub fn record(kind: u8, handle: u16, body: &[u8], strings: &[&str]) -> Vec<u8> {
    let length = u8::try_from(4 + body.len()).unwrap_or(u8::MAX);
    let mut out = vec![kind, length];
    out.extend_from_slice(&handle.to_le_bytes());
    out.extend_from_slice(body);
    if strings.is_empty() {
        out.extend_from_slice(&[0, 0]);
        return out;
    }
    for value in strings {
        out.extend_from_slice(value.as_bytes());
        out.push(0);
    }
    out.push(0);
    out
}

pub fn end_of_table() -> Vec<u8> {
    record(127, 0xFFFF, &[], &[])
}

/// Type 1 body: four string indices, padding to byte 8, then the UUID when
/// given.
pub fn system_body(uuid: Option<[u8; 16]>) -> Vec<u8> {
    let mut body = vec![1, 2, 3, 4];
    if let Some(uuid) = uuid {
        body.extend_from_slice(&uuid);
    }
    body
}

/// Type 2 body: four string indices.
pub fn baseboard_body() -> Vec<u8> {
    vec![1, 2, 3, 4]
}
