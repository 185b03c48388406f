#[cfg(test)]
mod tests {
    use crate::logic::GcalError;
    use crate::routes::{build_booking_calendar, routes};
    use roomcal_config::{AppConfig, GcalConfig, ServerConfig};
    use std::sync::Arc;

    fn config_without_gcal() -> Arc<AppConfig> {
        Arc::new(AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            gcal: None,
        })
    }

    #[tokio::test]
    async fn missing_gcal_section_is_a_config_error() {
        match build_booking_calendar(None).await {
            Err(GcalError::Config(msg)) => assert!(msg.contains("gcal")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_calendar_id_is_a_config_error() {
        let gcal = GcalConfig {
            calendar_id: None,
            client_email: Some("svc@example.iam.gserviceaccount.com".to_string()),
            private_key: Some("key".to_string()),
            time_zone: None,
            embed_url: None,
        };
        match build_booking_calendar(Some(&gcal)).await {
            Err(GcalError::Config(msg)) => assert!(msg.contains("calendar_id")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_client_email_is_a_config_error() {
        let gcal = GcalConfig {
            calendar_id: Some("shared-rooms".to_string()),
            client_email: None,
            private_key: Some("key".to_string()),
            time_zone: None,
            embed_url: None,
        };
        match build_booking_calendar(Some(&gcal)).await {
            Err(GcalError::Config(msg)) => assert!(msg.contains("client_email")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn router_still_builds_without_calendar_configuration() {
        // Health and embed must stay reachable on a misconfigured
        // deployment; only bookings answer with a server error.
        let _router = routes(config_without_gcal()).await;
    }
}
