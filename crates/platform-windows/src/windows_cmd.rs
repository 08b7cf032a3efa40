//! Canonical Windows system command paths.
//!
//! Absolute paths keep PATH lookups out of every subprocess the collectors
//! spawn.

#[cfg(target_os = "windows")]
pub(crate) const POWERSHELL_EXE: &str =
    r"C:\Windows\System32\WindowsPowerShell\v1.0\powershell.exe";
#[cfg(target_os = "windows")]
pub(crate) const REG_EXE: &str = r"C:\Windows\System32\reg.exe";
