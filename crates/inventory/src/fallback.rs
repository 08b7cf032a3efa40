//! Ordered serial-number recovery chains.
//!
//! A chain is a list of named strategies tried in order; the first one that
//! yields a value passing [`is_valid_serial`] wins. Every strategy is a plain
//! function over [`ResolveContext`], so a chain can be unit-tested with
//! in-memory collaborators.

use std::cell::RefCell;

use tracing::debug;

use crate::serial::{is_present, is_valid_serial};
use crate::sources::{ConfigStore, ManagementQuery, FIRMWARE_KEY_PATH, FIRMWARE_KEY_ROOT};

pub const SYSTEM_SERIAL_VALUE: &str = "SystemSerialNumber";
pub const BASEBOARD_SERIAL_VALUE: &str = "BaseBoardSerialNumber";
pub const BASEBOARD_SERIAL_LEGACY_VALUE: &str = "BaseBoardSerial";

pub const SYSTEM_PRODUCT_CLASS: &str = "Win32_ComputerSystemProduct";
pub const SYSTEM_PRODUCT_PROPERTY: &str = "IdentifyingNumber";
pub const BASEBOARD_CLASS: &str = "Win32_BaseBoard";
pub const BASEBOARD_PROPERTY: &str = "SerialNumber";

/// Inputs visible to a strategy.
pub struct ResolveContext<'a> {
    /// Serial decoded from the firmware record, when one exists.
    pub firmware_value: Option<&'a str>,
    pub config: &'a dyn ConfigStore,
    pub query: &'a dyn ManagementQuery,
    /// Configuration-store values read so far, in read order, including
    /// the ones the heuristic rejected.
    stored: RefCell<Vec<String>>,
}

impl<'a> ResolveContext<'a> {
    pub fn new(
        firmware_value: Option<&'a str>,
        config: &'a dyn ConfigStore,
        query: &'a dyn ManagementQuery,
    ) -> Self {
        Self {
            firmware_value,
            config,
            query,
            stored: RefCell::new(Vec::new()),
        }
    }

    /// First present configuration-store value read while resolving.
    pub fn first_stored(&self) -> Option<String> {
        self.stored
            .borrow()
            .iter()
            .find(|value| is_present(value))
            .cloned()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    Firmware,
    Registry,
    ManagementQuery,
}

impl ValueSource {
    /// Notes attached to an item whose value came from this source.
    pub fn note(self) -> &'static str {
        match self {
            Self::Firmware => "",
            Self::Registry => "source: registry",
            Self::ManagementQuery => "source: management query",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub value: String,
    pub source: ValueSource,
}

pub type Strategy = fn(&ResolveContext<'_>) -> Option<Resolved>;

pub struct FallbackChain {
    name: &'static str,
    steps: &'static [(&'static str, Strategy)],
}

impl FallbackChain {
    pub const fn new(name: &'static str, steps: &'static [(&'static str, Strategy)]) -> Self {
        Self { name, steps }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn step_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.steps.iter().map(|(name, _)| *name)
    }

    /// First accepted value, or `None` when every step came up empty.
    pub fn resolve(&self, ctx: &ResolveContext<'_>) -> Option<Resolved> {
        for (step, strategy) in self.steps {
            if let Some(resolved) = strategy(ctx) {
                debug!(chain = self.name, step, source = ?resolved.source, "serial resolved");
                return Some(resolved);
            }
        }
        debug!(chain = self.name, "serial chain exhausted");
        None
    }
}

/// Firmware system record, then the management query.
pub const SYSTEM_SERIAL_CHAIN: FallbackChain = FallbackChain::new(
    "system-serial",
    &[
        ("firmware", firmware_serial as Strategy),
        ("management-query", query_system_serial as Strategy),
    ],
);

/// Firmware baseboard record, both registry value names, then the
/// management query.
pub const BASEBOARD_SERIAL_CHAIN: FallbackChain = FallbackChain::new(
    "baseboard-serial",
    &[
        ("firmware", firmware_serial as Strategy),
        ("registry", registry_baseboard_serial as Strategy),
        ("registry-legacy", registry_baseboard_serial_legacy as Strategy),
        ("management-query", query_baseboard_serial as Strategy),
    ],
);

/// Used when the firmware table carries no system record.
pub const SYSTEM_REGISTRY_SERIAL_CHAIN: FallbackChain = FallbackChain::new(
    "system-serial-registry",
    &[
        ("registry", registry_system_serial as Strategy),
        ("management-query", query_system_serial as Strategy),
    ],
);

/// Used when the firmware table carries no baseboard record.
pub const BASEBOARD_REGISTRY_SERIAL_CHAIN: FallbackChain = FallbackChain::new(
    "baseboard-serial-registry",
    &[
        ("registry", registry_baseboard_serial as Strategy),
        ("registry-legacy", registry_baseboard_serial_legacy as Strategy),
        ("management-query", query_baseboard_serial as Strategy),
    ],
);

fn accept(value: &str, source: ValueSource) -> Option<Resolved> {
    let value = value.trim();
    if !is_valid_serial(value) {
        return None;
    }
    Some(Resolved {
        value: value.to_string(),
        source,
    })
}

fn firmware_serial(ctx: &ResolveContext<'_>) -> Option<Resolved> {
    accept(ctx.firmware_value?, ValueSource::Firmware)
}

fn registry_value(ctx: &ResolveContext<'_>, key: &str) -> Option<Resolved> {
    let value = ctx.config.read_value(FIRMWARE_KEY_ROOT, FIRMWARE_KEY_PATH, key);
    let resolved = accept(&value, ValueSource::Registry);
    ctx.stored.borrow_mut().push(value);
    resolved
}

fn registry_system_serial(ctx: &ResolveContext<'_>) -> Option<Resolved> {
    registry_value(ctx, SYSTEM_SERIAL_VALUE)
}

fn registry_baseboard_serial(ctx: &ResolveContext<'_>) -> Option<Resolved> {
    registry_value(ctx, BASEBOARD_SERIAL_VALUE)
}

fn registry_baseboard_serial_legacy(ctx: &ResolveContext<'_>) -> Option<Resolved> {
    registry_value(ctx, BASEBOARD_SERIAL_LEGACY_VALUE)
}

fn query_system_serial(ctx: &ResolveContext<'_>) -> Option<Resolved> {
    let value = ctx
        .query
        .query_property(SYSTEM_PRODUCT_CLASS, SYSTEM_PRODUCT_PROPERTY);
    accept(&value, ValueSource::ManagementQuery)
}

fn query_baseboard_serial(ctx: &ResolveContext<'_>) -> Option<Resolved> {
    let value = ctx.query.query_property(BASEBOARD_CLASS, BASEBOARD_PROPERTY);
    accept(&value, ValueSource::ManagementQuery)
}
