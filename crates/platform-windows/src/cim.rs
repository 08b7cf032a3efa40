//! Management-instrumentation queries through a scoped PowerShell session.
//!
//! Each query owns one `powershell.exe` child for its whole lifetime; the
//! child is reaped on every exit path, including early returns and unwinds.

#[cfg(target_os = "windows")]
use std::process::{Child, Command, Stdio};

#[cfg(target_os = "windows")]
use crate::windows_cmd::POWERSHELL_EXE;
use inventory::ManagementQuery;
use serde_json::Value;

/// Management query answered by `Get-CimInstance`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CimQuery;

impl ManagementQuery for CimQuery {
    fn query_property(&self, class: &str, property: &str) -> String {
        let Some(command) = property_command(class, property) else {
            tracing::debug!(class, property, "rejected management query identifiers");
            return String::new();
        };
        run_powershell(&command)
            .and_then(|json| parse_scalar_json(&json))
            .unwrap_or_default()
    }
}

/// Class and property names are spliced into a script; only identifier
/// characters are accepted.
fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn property_command(class: &str, property: &str) -> Option<String> {
    if !is_identifier(class) || !is_identifier(property) {
        return None;
    }
    Some(format!(
        "@(Get-CimInstance -ClassName {class} -ErrorAction Stop | \
         ForEach-Object {{ $_.{property} }} | \
         Where-Object {{ $null -ne $_ -and \"$_\".Trim() -ne '' }} | \
         Select-Object -First 1) | ConvertTo-Json -Compress"
    ))
}

/// Run one script and return its trimmed stdout, `None` on any failure or
/// empty output.
pub(crate) fn run_powershell(command: &str) -> Option<String> {
    run_script(command).filter(|stdout| !stdout.is_empty())
}

/// Run one script and return its trimmed stdout, which may be empty. `None`
/// only when the session could not start or exited unsuccessfully.
pub(crate) fn run_script(command: &str) -> Option<String> {
    #[cfg(target_os = "windows")]
    {
        let session = PowerShellSession::spawn(command)?;
        session.finish()
    }
    #[cfg(not(target_os = "windows"))]
    {
        let _ = command;
        None
    }
}

#[cfg(target_os = "windows")]
struct PowerShellSession {
    child: Option<Child>,
}

#[cfg(target_os = "windows")]
impl PowerShellSession {
    fn spawn(command: &str) -> Option<Self> {
        let child = Command::new(POWERSHELL_EXE)
            .args(["-NoProfile", "-NonInteractive", "-Command", command])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|err| tracing::debug!(error = %err, "failed to start powershell"))
            .ok()?;
        Some(Self { child: Some(child) })
    }

    fn finish(mut self) -> Option<String> {
        let child = self.child.take()?;
        let output = child.wait_with_output().ok()?;
        if !output.status.success() {
            tracing::debug!(status = ?output.status.code(), "powershell query failed");
            return None;
        }
        Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[cfg(target_os = "windows")]
impl Drop for PowerShellSession {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

/// First scalar in a `ConvertTo-Json` payload, coerced to a string.
fn parse_scalar_json(raw: &str) -> Option<String> {
    let value: Value = serde_json::from_str(raw).ok()?;
    let first = match value {
        Value::Array(values) => values.into_iter().next()?,
        single => single,
    };
    let text = match first {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => return None,
    };
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Top-level records of a `ConvertTo-Json` payload; a lone object is
/// returned as a one-element list.
#[cfg(any(test, target_os = "windows"))]
pub(crate) fn json_records(raw: &str) -> Vec<Value> {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(_) => return Vec::new(),
    };

    match value {
        Value::Array(records) => records,
        Value::Null => Vec::new(),
        single => vec![single],
    }
}

#[cfg(any(test, target_os = "windows"))]
pub(crate) fn json_str(record: &Value, key: &str) -> Option<String> {
    record
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
}
