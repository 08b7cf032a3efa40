use serde::{Deserialize, Serialize};

/// One labelled attribute, the only output shape of every collector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareItem {
    pub category: String,
    pub name: String,
    pub value: String,
    pub notes: String,
}

impl HardwareItem {
    pub fn new(
        category: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            value: value.into(),
            notes: String::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// Replace an empty collection with a single item describing why.
pub fn or_placeholder(
    items: Vec<HardwareItem>,
    category: &str,
    message: &str,
    notes: &str,
) -> Vec<HardwareItem> {
    if !items.is_empty() {
        return items;
    }
    vec![HardwareItem::new(category, "info", message).with_notes(notes)]
}
