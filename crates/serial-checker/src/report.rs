//! Text and JSON renderings of collected sections.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use anyhow::Result;
use inventory::{HardwareItem, HardwarePlatform, Section};
use serde::Serialize;

const RULE_WIDTH: usize = 80;
const NAME_WIDTH: usize = 25;
const VALUE_WIDTH: usize = 35;
const NOTES_WIDTH: usize = 15;

#[derive(Debug, Clone)]
pub struct SectionReport {
    pub section: Section,
    pub items: Vec<HardwareItem>,
}

/// Collect every requested section in order.
pub fn collect(platform: &dyn HardwarePlatform, sections: &[Section]) -> Vec<SectionReport> {
    sections
        .iter()
        .map(|&section| {
            let items = platform.collect(section);
            tracing::debug!(section = section.key(), items = items.len(), "section collected");
            SectionReport { section, items }
        })
        .collect()
}

#[derive(Serialize)]
struct JsonSection<'a> {
    section: &'static str,
    title: &'static str,
    items: &'a [HardwareItem],
}

pub fn render_json(reports: &[SectionReport]) -> Result<String> {
    let sections: Vec<JsonSection<'_>> = reports
        .iter()
        .map(|report| JsonSection {
            section: report.section.key(),
            title: report.section.title(),
            items: &report.items,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&sections)?)
}

pub fn render_text(reports: &[SectionReport]) -> String {
    let mut out = String::new();
    for report in reports {
        render_section(&mut out, report);
    }
    out
}

fn render_section(out: &mut String, report: &SectionReport) {
    if report.items.is_empty() {
        return;
    }
    let rule = "=".repeat(RULE_WIDTH);
    let _ = writeln!(out);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, " {}", report.section.title().to_lowercase());
    let _ = writeln!(out, "{rule}");

    let mut grouped: BTreeMap<&str, Vec<&HardwareItem>> = BTreeMap::new();
    for item in &report.items {
        grouped.entry(item.category.as_str()).or_default().push(item);
    }

    let multiple = grouped.len() > 1;
    for (index, (category, items)) in grouped.iter().enumerate() {
        if index > 0 {
            let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
        }
        if multiple {
            let _ = writeln!(out, "| [ {category} ]");
        }
        for item in items {
            let _ = writeln!(out, "{}", item_line(item));
        }
    }
    let _ = writeln!(out, "{rule}");
}

fn item_line(item: &HardwareItem) -> String {
    let name = truncate(&item.name, NAME_WIDTH);
    let value = truncate(&item.value, VALUE_WIDTH);
    let mut line = format!(
        "| {name:<nw$} | {value:<vw$}",
        nw = NAME_WIDTH,
        vw = VALUE_WIDTH
    );
    if !item.notes.is_empty() {
        let _ = write!(line, " | {}", truncate(&item.notes, NOTES_WIDTH));
    }
    line
}

/// Cut to `width - 3` characters plus `...` when longer than `width`.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width - 3).collect();
    cut.push_str("...");
    cut
}
