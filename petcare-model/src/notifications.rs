use serde::{Deserialize, Serialize};

/// Envelope used by the notification settings endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notifications {
    pub notifications: NotificationInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationInfo {
    pub enabled: bool,
    pub email_address: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_matches_backend_shape() {
        let decoded: Notifications = serde_json::from_value(json!({
            "notifications": { "enabled": true, "emailAddress": "vet@example.com" }
        }))
        .unwrap();
        assert!(decoded.notifications.enabled);
        assert_eq!(decoded.notifications.email_address, "vet@example.com");
    }
}
