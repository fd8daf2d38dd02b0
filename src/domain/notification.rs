// Fire-and-forget notifications for the presentation layer
use crate::domain::locale::{Catalog, ToastText};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NotificationKind {
    Snapshot,
    Surface,
    Connected,
    ConnectionFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    pub fn render(kind: NotificationKind, catalog: &Catalog) -> Self {
        let (text, variant): (&ToastText, Variant) = match kind {
            NotificationKind::Snapshot => (&catalog.toasts.snapshot, Variant::Default),
            NotificationKind::Surface => (&catalog.toasts.surface, Variant::Default),
            NotificationKind::Connected => (&catalog.toasts.connection, Variant::Default),
            NotificationKind::ConnectionFailed => {
                (&catalog.toasts.connection_failed, Variant::Destructive)
            }
        };

        Self {
            kind,
            title: text.title.clone(),
            description: text.description.clone(),
            variant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_failed_is_destructive() {
        let notification = Notification::render(NotificationKind::ConnectionFailed, &Catalog::english());
        assert_eq!(notification.variant, Variant::Destructive);
        assert_eq!(notification.title, "Connection failed");
    }
}
