//! Desktop notifications via freedesktop D-Bus.

use crate::input::state::{Notice, NoticeKind};
use std::collections::HashMap;
use zbus::{Connection, proxy};

const APP_NAME: &str = "Sketchboard";
const EXPIRE_TIMEOUT_MS: i32 = 4000;

/// D-Bus interface for freedesktop Notifications.
#[proxy(
    interface = "org.freedesktop.Notifications",
    default_service = "org.freedesktop.Notifications",
    default_path = "/org/freedesktop/Notifications"
)]
trait Notifications {
    /// Send a notification.
    ///
    /// # Arguments
    /// * `app_name` - Application name
    /// * `replaces_id` - ID of notification to replace (0 for new)
    /// * `app_icon` - Icon name or path
    /// * `summary` - Notification title
    /// * `body` - Notification body text
    /// * `actions` - List of action identifiers and labels
    /// * `hints` - Additional metadata
    /// * `expire_timeout` - Timeout in milliseconds (-1 for default)
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

/// Icon name matching the severity of a notice.
pub fn icon_for(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Info => "document-save",
        NoticeKind::Error => "dialog-error",
    }
}

/// Send a desktop notification.
pub async fn send_notification(summary: &str, body: &str, icon: &str) -> Result<(), String> {
    let connection = Connection::session()
        .await
        .map_err(|e| format!("Failed to connect to session bus: {}", e))?;

    let proxy = NotificationsProxy::new(&connection)
        .await
        .map_err(|e| format!("Failed to create notifications proxy: {}", e))?;

    proxy
        .notify(
            APP_NAME,
            0,
            icon,
            summary,
            body,
            vec![],
            HashMap::new(),
            EXPIRE_TIMEOUT_MS,
        )
        .await
        .map_err(|e| format!("Failed to send notification: {}", e))?;

    Ok(())
}

/// Posts a notice in the background on the given runtime.
///
/// Failures are logged and otherwise ignored; the in-window notice has
/// already been shown.
pub fn send_notice_async(runtime_handle: &tokio::runtime::Handle, notice: Notice) {
    runtime_handle.spawn(async move {
        let icon = icon_for(notice.kind);
        if let Err(e) = send_notification(&notice.title, &notice.message, icon).await {
            log::warn!("Failed to send notification: {}", e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_notices_use_error_icon() {
        assert_eq!(icon_for(NoticeKind::Info), "document-save");
        assert_eq!(icon_for(NoticeKind::Error), "dialog-error");
    }
}
