//! Registry reads through `reg.exe`.
//!
//! Backs the configuration-store fallback of the identity resolver and the
//! class-key walks of the gpu and nic collectors.

#[cfg(target_os = "windows")]
use crate::windows_cmd::REG_EXE;
#[cfg(target_os = "windows")]
use std::process::Command;

use inventory::{ConfigStore, NOT_PRESENT};

/// One value line of `reg query` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegValue {
    pub name: String,
    pub kind: String,
    pub data: String,
}

/// A key and its values, as listed by `reg query /s`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegKey {
    pub path: String,
    pub values: Vec<RegValue>,
}

impl RegKey {
    /// Last path segment.
    pub fn name(&self) -> &str {
        self.path.rsplit('\\').next().unwrap_or_default()
    }

    pub fn string(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|value| value.name.eq_ignore_ascii_case(name) && is_string_kind(&value.kind))
            .map(|value| value.data.trim())
            .filter(|data| !data.is_empty())
    }
}

/// Configuration store backed by the local registry.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegistryStore;

impl ConfigStore for RegistryStore {
    fn read_value(&self, root: &str, path: &str, key: &str) -> String {
        match read_reg_string(root, path, key) {
            Some(value) if !value.is_empty() => value,
            _ => {
                tracing::debug!(root, path, key, "registry value unavailable");
                NOT_PRESENT.to_string()
            }
        }
    }
}

/// Read a DWORD value from the registry.
pub fn read_reg_dword(hive: &str, subkey: &str, value_name: &str) -> Option<u32> {
    let output = run_reg_query(hive, subkey, Some(value_name))?;
    parse_reg_dword(&output, value_name)
}

/// Read a string value from the registry.
pub fn read_reg_string(hive: &str, subkey: &str, value_name: &str) -> Option<String> {
    let output = run_reg_query(hive, subkey, Some(value_name))?;
    parse_reg_string(&output, value_name)
}

/// Every key below `subkey` with its values, `None` when the key could not
/// be opened.
pub fn query_reg_tree(hive: &str, subkey: &str) -> Option<Vec<RegKey>> {
    run_reg_query(hive, subkey, None).map(|output| parse_reg_tree(&output))
}

fn run_reg_query(hive: &str, subkey: &str, value_name: Option<&str>) -> Option<String> {
    #[cfg(target_os = "windows")]
    {
        let full_key = format!(r"{}\{}", hive, subkey);
        let mut command = Command::new(REG_EXE);
        command.args(["query", &full_key]);
        match value_name {
            Some(name) => command.args(["/v", name]),
            None => command.arg("/s"),
        };
        let output = command.output().ok()?;
        if !output.status.success() {
            return None;
        }
        Some(String::from_utf8_lossy(&output.stdout).to_string())
    }
    #[cfg(not(target_os = "windows"))]
    {
        let _ = (hive, subkey, value_name);
        None
    }
}

fn is_string_kind(kind: &str) -> bool {
    matches!(kind, "REG_SZ" | "REG_EXPAND_SZ" | "REG_MULTI_SZ")
}

fn parse_reg_dword(output: &str, value_name: &str) -> Option<u32> {
    let value = find_value(output, value_name)?;
    if value.kind != "REG_DWORD" {
        return None;
    }

    let data = value.data.trim();
    if let Some(hex) = data.strip_prefix("0x") {
        u32::from_str_radix(hex, 16).ok()
    } else {
        data.parse::<u32>().ok()
    }
}

fn parse_reg_string(output: &str, value_name: &str) -> Option<String> {
    let value = find_value(output, value_name)?;
    if !is_string_kind(&value.kind) {
        return None;
    }
    Some(value.data.trim().to_string())
}

fn find_value(output: &str, value_name: &str) -> Option<RegValue> {
    output
        .lines()
        .filter_map(parse_value_line)
        .find(|value| value.name.eq_ignore_ascii_case(value_name))
}

/// `reg.exe` separates name, type and data with four spaces; names may
/// themselves contain single spaces.
fn parse_value_line(line: &str) -> Option<RegValue> {
    if !line.starts_with(' ') {
        return None;
    }
    let line = line.trim();
    let mut parts = line.splitn(3, "    ");
    let name = parts.next()?.trim();
    let kind = parts.next()?.trim();
    if !kind.starts_with("REG_") {
        return None;
    }
    let data = parts.next().unwrap_or_default().trim();
    Some(RegValue {
        name: name.to_string(),
        kind: kind.to_string(),
        data: data.to_string(),
    })
}

fn parse_reg_tree(output: &str) -> Vec<RegKey> {
    let mut keys: Vec<RegKey> = Vec::new();
    for line in output.lines() {
        if line.starts_with("HKEY_") {
            keys.push(RegKey {
                path: line.trim().to_string(),
                values: Vec::new(),
            });
            continue;
        }
        if let (Some(value), Some(current)) = (parse_value_line(line), keys.last_mut()) {
            current.values.push(value);
        }
    }
    keys
}
