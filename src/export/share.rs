//! Sharing drawings with other applications.

use super::types::ExportError;
use std::process::{Command, Stdio};
use wl_clipboard_rs::copy::{MimeType, Options, Source};

/// A platform facility that can receive a finished drawing.
pub trait ShareTarget {
    /// Hands the PNG bytes to the platform.
    ///
    /// Returns [`ExportError::ShareUnsupported`] when this system has no way
    /// to share at all.
    fn share(&self, title: &str, filename: &str, png: &[u8]) -> Result<(), ExportError>;
}

/// Shares by offering the PNG on the Wayland clipboard.
///
/// Only offered inside a Wayland session. Uses the `wl-copy` command first
/// and falls back to wl-clipboard-rs.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClipboardShare;

impl ShareTarget for ClipboardShare {
    fn share(&self, title: &str, filename: &str, png: &[u8]) -> Result<(), ExportError> {
        if std::env::var_os("WAYLAND_DISPLAY").is_none() {
            return Err(ExportError::ShareUnsupported);
        }
        log::debug!(
            "Sharing '{}' as {} ({} bytes) via clipboard",
            title,
            filename,
            png.len()
        );

        match copy_via_command(png) {
            Ok(()) => {
                log::info!("Shared drawing via wl-copy command");
                Ok(())
            }
            Err(cmd_err) => {
                log::warn!(
                    "wl-copy command path failed ({}). Falling back to wl-clipboard-rs",
                    cmd_err
                );
                match copy_via_library(png) {
                    Ok(()) => {
                        log::info!("Shared drawing via wl-clipboard-rs fallback");
                        Ok(())
                    }
                    Err(lib_err) => Err(ExportError::ShareFailed(format!(
                        "wl-copy failed: {} ; wl-clipboard-rs failed: {}",
                        cmd_err, lib_err
                    ))),
                }
            }
        }
    }
}

/// Copy to clipboard using wl-clipboard-rs library.
fn copy_via_library(image_data: &[u8]) -> Result<(), ExportError> {
    use wl_clipboard_rs::copy::ServeRequests;

    let mut opts = Options::new();

    // Serve one paste then exit
    opts.serve_requests(ServeRequests::Only(1));

    opts.copy(
        Source::Bytes(image_data.into()),
        MimeType::Specific("image/png".to_string()),
    )
    .map_err(|e| ExportError::ShareFailed(format!("wl-clipboard-rs error: {}", e)))?;

    Ok(())
}

/// Copy to clipboard by shelling out to wl-copy command.
fn copy_via_command(image_data: &[u8]) -> Result<(), ExportError> {
    use std::io::Write;

    let mut child = Command::new("wl-copy")
        .arg("--type")
        .arg("image/png")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            ExportError::ShareFailed(format!("Failed to spawn wl-copy (is it installed?): {}", e))
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(image_data).map_err(|e| {
            ExportError::ShareFailed(format!("Failed to write to wl-copy stdin: {}", e))
        })?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| ExportError::ShareFailed(format!("Failed to wait for wl-copy: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ExportError::ShareFailed(format!("wl-copy failed: {}", stderr)));
    }

    log::debug!("wl-copy command completed successfully");
    Ok(())
}
