//! Hands `mailto:` and `tel:` links to whatever the desktop has registered.

use crate::error::{PhonebookError, Result};
use std::process::Command;
use tracing::{debug, warn};

pub fn mailto_uri(address: &str) -> Option<String> {
    let address = address.trim();
    (!address.is_empty()).then(|| format!("mailto:{}", address))
}

/// `tel:` URI for a number, keeping only digits and a leading `+`.
pub fn tel_uri(number: &str) -> Option<String> {
    let number = number.trim();
    let mut digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    if number.starts_with('+') {
        digits.insert(0, '+');
    }
    Some(format!("tel:{}", digits))
}

/// Opens `uri` with the OS opener in an OS-specific way.
/// - macOS: `open`
/// - Linux: `xdg-open`
/// - Windows: `cmd /C start`
pub fn open_uri(uri: &str) -> Result<()> {
    debug!(uri, "opening");
    let result = spawn_opener(uri);
    if let Err(e) = &result {
        warn!(uri, error = %e, "could not open link");
    }
    result
}

#[cfg(target_os = "macos")]
fn opener(uri: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(uri);
    cmd
}

#[cfg(target_os = "linux")]
fn opener(uri: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(uri);
    cmd
}

#[cfg(target_os = "windows")]
fn opener(uri: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "", uri]);
    cmd
}

#[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
fn spawn_opener(uri: &str) -> Result<()> {
    let status = opener(uri)
        .status()
        .map_err(|e| PhonebookError::Api(format!("Failed to start opener: {}", e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(PhonebookError::Api(format!(
            "Opener exited with error for {}",
            uri
        )))
    }
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
fn spawn_opener(_uri: &str) -> Result<()> {
    Err(PhonebookError::Api(
        "Opening links is not supported on this platform".to_string(),
    ))
}
