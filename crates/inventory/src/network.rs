//! Adapter and neighbour-table formatting.

use std::net::Ipv4Addr;

use crate::item::{or_placeholder, HardwareItem};

const MAX_MAC_BYTES: usize = 6;

/// Lowercase colon-separated hex.
pub fn format_mac(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect::<Vec<_>>()
        .join(":")
}

/// Normalise a configured address override. Twelve bare hex digits become
/// colon pairs; anything else is only lowercased.
pub fn normalize_registry_mac(raw: &str) -> String {
    let raw = raw.trim();
    if raw.len() == 12 && raw.is_ascii() {
        let pairs: Vec<&str> = (0..12).step_by(2).map(|i| &raw[i..i + 2]).collect();
        return pairs.join(":").to_lowercase();
    }
    raw.to_lowercase()
}

/// Parse `aa-bb-cc-dd-ee-ff` or `aa:bb:cc:dd:ee:ff` into bytes.
pub fn parse_mac(text: &str) -> Option<Vec<u8>> {
    let bytes = text
        .trim()
        .split(|c| c == '-' || c == ':')
        .map(|pair| u8::from_str_radix(pair, 16).ok())
        .collect::<Option<Vec<u8>>>()?;
    (!bytes.is_empty()).then_some(bytes)
}

/// Adapter with an address override in its configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfiguredAddress {
    pub description: String,
    pub address: String,
}

/// Adapter hardware address as the kernel reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelAddress {
    pub description: String,
    pub address: Vec<u8>,
}

pub fn nic_items(configured: &[ConfiguredAddress], kernel: &[KernelAddress]) -> Vec<HardwareItem> {
    let mut items = Vec::new();
    for (index, adapter) in configured.iter().enumerate() {
        items.push(
            HardwareItem::new(
                "nic",
                format!("registrymac_{index}"),
                normalize_registry_mac(&adapter.address),
            )
            .with_notes(format!("adapter: {}", adapter.description)),
        );
    }
    for (index, adapter) in kernel.iter().enumerate() {
        items.push(
            HardwareItem::new(
                "nic",
                format!("kernelmac_{index}"),
                format_mac(&adapter.address),
            )
            .with_notes(format!("adapter: {}", adapter.description.to_lowercase())),
        );
    }
    items
}

/// Neighbour-table entry kind, numbered as the IP helper API reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArpKind {
    Other,
    Invalid,
    Dynamic,
    Static,
    Unknown(u32),
}

impl ArpKind {
    pub fn from_code(code: u32) -> Self {
        match code {
            1 => Self::Other,
            2 => Self::Invalid,
            3 => Self::Dynamic,
            4 => Self::Static,
            other => Self::Unknown(other),
        }
    }

    pub fn label(self) -> String {
        match self {
            Self::Other => "other".to_string(),
            Self::Invalid => "invalid".to_string(),
            Self::Dynamic => "dynamic".to_string(),
            Self::Static => "static".to_string(),
            Self::Unknown(code) => format!("type {code}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArpEntry {
    pub address: Ipv4Addr,
    pub hardware: Vec<u8>,
    pub kind: ArpKind,
    pub adapter: String,
}

pub fn arp_items(entries: &[ArpEntry]) -> Vec<HardwareItem> {
    let items = entries
        .iter()
        .filter(|entry| !entry.hardware.is_empty() && entry.kind != ArpKind::Invalid)
        .map(|entry| {
            let len = entry.hardware.len().min(MAX_MAC_BYTES);
            HardwareItem::new(
                "arp",
                entry.address.to_string(),
                format_mac(&entry.hardware[..len]),
            )
            .with_notes(format!("{}; adapter: {}", entry.kind.label(), entry.adapter))
        })
        .collect();
    or_placeholder(items, "arp", "no arp entries found", "")
}
