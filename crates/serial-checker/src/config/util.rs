use inventory::Section;

use super::types::ReportFormat;

pub(super) fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}

pub(super) fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().and_then(|v| non_empty(Some(v)))
}

pub(super) fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
        .collect()
}

pub(crate) fn parse_bool(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "enabled" | "on"
    )
}

pub(super) fn parse_format(raw: &str) -> Option<ReportFormat> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "text" | "table" => Some(ReportFormat::Text),
        "json" => Some(ReportFormat::Json),
        _ => None,
    }
}

/// Known sections in the order given, without repeats. Unknown names are
/// logged and skipped; an empty result selects every section.
pub(crate) fn parse_sections(names: &[String]) -> Vec<Section> {
    let mut sections = Vec::new();
    for name in names {
        match Section::parse(name) {
            Some(section) if !sections.contains(&section) => sections.push(section),
            Some(_) => {}
            None => tracing::warn!(section = %name, "ignoring unknown section"),
        }
    }
    if sections.is_empty() {
        Section::ALL.to_vec()
    } else {
        sections
    }
}
