// File: crates/roomcal_gcal/src/auth.rs
use crate::logic::GcalError;
use google_calendar3::{
    hyper_rustls::{self, HttpsConnectorBuilder},
    hyper_util::client::legacy::connect::HttpConnector,
    hyper_util::client::legacy::Client,
    yup_oauth2::{ServiceAccountAuthenticator, ServiceAccountKey},
    CalendarHub,
};
use roomcal_config::GcalConfig;

// Type aliases for clarity
type Connector = hyper_rustls::HttpsConnector<HttpConnector>;

pub type HubType = CalendarHub<Connector>;

const TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Restores literal newlines in a private key delivered through an
/// environment variable. Hosting platforms store the multiline PEM with
/// `\n` escape sequences; a key that already contains literal newlines
/// passes through unchanged.
pub fn normalize_private_key(key: &str) -> String {
    key.replace("\\n", "\n")
}

/// Builds the in-memory service account key from config. The key never
/// touches the filesystem; both identifiers are mandatory.
pub fn service_account_key(config: &GcalConfig) -> Result<ServiceAccountKey, GcalError> {
    let client_email = config
        .client_email
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| GcalError::Config("Missing client_email in GcalConfig".to_string()))?;
    let private_key = config
        .private_key
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| GcalError::Config("Missing private_key in GcalConfig".to_string()))?;

    Ok(ServiceAccountKey {
        key_type: Some("service_account".to_string()),
        project_id: None,
        private_key_id: None,
        private_key: normalize_private_key(private_key),
        client_email: client_email.to_string(),
        client_id: None,
        auth_uri: None,
        token_uri: TOKEN_URI.to_string(),
        auth_provider_x509_cert_url: None,
        client_x509_cert_url: None,
    })
}

pub async fn create_calendar_hub(config: &GcalConfig) -> Result<HubType, GcalError> {
    let sa_key = service_account_key(config)?;

    let auth = ServiceAccountAuthenticator::builder(sa_key)
        .build()
        .await
        .map_err(|e| GcalError::Auth(format!("Failed to build service account auth: {e}")))?;

    let https = HttpsConnectorBuilder::new()
        .with_native_roots()
        .map_err(|e| GcalError::Auth(format!("Failed to load native TLS roots: {e}")))?
        .https_or_http()
        .enable_http1()
        .build();

    // Create client without specifying body type
    let client = Client::builder(hyper_util::rt::TokioExecutor::new()).build(https);

    let hub = CalendarHub::new(client, auth);

    Ok(hub)
}
