//! User-facing notices via freedesktop D-Bus notifications.

use std::collections::HashMap;
use zbus::proxy;

/// D-Bus interface for freedesktop Notifications.
#[proxy(
    interface = "org.freedesktop.Notifications",
    default_service = "org.freedesktop.Notifications",
    default_path = "/org/freedesktop/Notifications"
)]
trait Notifications {
    /// Send a notification.
    ///
    /// # Returns
    /// Notification ID
    #[allow(clippy::too_many_arguments)]
    fn notify(
        &self,
        app_name: &str,
        replaces_id: u32,
        app_icon: &str,
        summary: &str,
        body: &str,
        actions: Vec<&str>,
        hints: HashMap<&str, zbus::zvariant::Value<'_>>,
        expire_timeout: i32,
    ) -> zbus::Result<u32>;
}

/// Something that can put a notice in front of the user.
pub trait Notifier {
    fn alert(&self, summary: &str, body: &str);
}

/// Sends desktop notifications, logging instead when no session bus is reachable.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn alert(&self, summary: &str, body: &str) {
        if let Err(e) = send_notification(summary, body, None) {
            log::warn!("Failed to send notification: {}", e);
            LogNotifier.alert(summary, body);
        }
    }
}

/// Writes notices to the log only.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn alert(&self, summary: &str, body: &str) {
        log::warn!("{}: {}", summary, body);
    }
}

/// Send a system notification, blocking until the bus replies.
///
/// # Arguments
/// * `summary` - Notification title
/// * `body` - Notification body text
/// * `icon` - Optional icon name (defaults to "applications-graphics")
pub fn send_notification(summary: &str, body: &str, icon: Option<&str>) -> Result<(), String> {
    let connection = zbus::blocking::Connection::session()
        .map_err(|e| format!("Failed to connect to session bus: {}", e))?;

    let proxy = NotificationsProxyBlocking::new(&connection)
        .map_err(|e| format!("Failed to create notifications proxy: {}", e))?;

    let icon = icon.unwrap_or("applications-graphics");
    let hints = HashMap::new();

    proxy
        .notify(
            "Scribbleboard",
            0,
            icon,
            summary,
            body,
            vec![],
            hints,
            3000, // 3 second timeout
        )
        .map_err(|e| format!("Failed to send notification: {}", e))?;

    Ok(())
}
