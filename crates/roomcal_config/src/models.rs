// --- File: crates/roomcal_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Google Calendar Config ---
// Every field is optional at load time so a partially configured deployment
// still boots and can report what is missing through the health endpoint.
// Secrets arrive through env overrides, e.g. ROOMCAL_GCAL__PRIVATE_KEY.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct GcalConfig {
    /// Target calendar identifier. Mandatory for booking.
    pub calendar_id: Option<String>,
    /// Service account email. Mandatory for booking.
    pub client_email: Option<String>,
    /// Service account private key (PEM). May arrive with `\n` escape
    /// sequences instead of literal newlines. Mandatory for booking.
    pub private_key: Option<String>,
    /// IANA timezone the booking form times are interpreted in.
    /// Defaults to Europe/Bratislava when unset.
    pub time_zone: Option<String>,
    /// Public read-only embed URL shown next to the form. Optional.
    pub embed_url: Option<String>,
}

impl GcalConfig {
    pub fn has_calendar_id(&self) -> bool {
        self.calendar_id.as_deref().is_some_and(|v| !v.is_empty())
    }
    pub fn has_client_email(&self) -> bool {
        self.client_email.as_deref().is_some_and(|v| !v.is_empty())
    }
    pub fn has_private_key(&self) -> bool {
        self.private_key.as_deref().is_some_and(|v| !v.is_empty())
    }
    pub fn has_embed_url(&self) -> bool {
        self.embed_url.as_deref().is_some_and(|v| !v.is_empty())
    }
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    #[serde(default)]
    pub gcal: Option<GcalConfig>,
}
