// File: crates/roomcal_gcal/src/handlers.rs
use crate::logic::{validate_booking, BookingPayload, FieldErrors, IntervalError};
use crate::service::GcalServiceError;
use axum::{extract::State, http::StatusCode, response::Json};
use roomcal_common::services::CalendarService;
use roomcal_config::{AppConfig, GcalConfig};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

// User-facing messages, kept verbatim from the product. Internal error
// detail goes to the log only, never into a response body.
pub const MSG_INVALID_DATA: &str = "Neplatné dáta";
pub const MSG_END_NOT_AFTER_START: &str = "Koniec musí byť po začiatku.";
pub const MSG_CREATE_FAILED: &str = "Nepodarilo sa vytvoriť event v kalendári.";

/// The calendar handle the booking handler writes through.
#[derive(Clone)]
pub struct BookingCalendar {
    pub calendar_id: String,
    pub service: Arc<dyn CalendarService<Error = GcalServiceError>>,
}

impl std::fmt::Debug for BookingCalendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingCalendar")
            .field("calendar_id", &self.calendar_id)
            .finish_non_exhaustive()
    }
}

// Define shared state needed by GCal handlers
#[derive(Clone)]
pub struct GcalState {
    pub config: Arc<AppConfig>,
    /// None when the deployment is missing calendar configuration; the
    /// health endpoint still answers, bookings get a server error.
    pub calendar: Option<BookingCalendar>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BookingAck {
    pub ok: bool,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<FieldErrors>,
}

fn bad_request(error: &str, details: Option<FieldErrors>) -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: error.to_string(),
            details,
        }),
    )
}

fn server_error() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: MSG_CREATE_FAILED.to_string(),
            details: None,
        }),
    )
}

/// Handler to create a room booking.
///
/// Received -> Rejected on shape or interval failure (400 with details),
/// Received -> Validated -> Submitted on a successful insert (200),
/// Validated -> Failed on any config or Google error (500, generic body).
#[axum::debug_handler]
pub async fn create_booking_handler(
    State(state): State<Arc<GcalState>>,
    Json(payload): Json<BookingPayload>,
) -> Result<Json<BookingAck>, (StatusCode, Json<ErrorBody>)> {
    let request = validate_booking(payload)
        .map_err(|details| bad_request(MSG_INVALID_DATA, Some(details)))?;

    let event = request.to_calendar_event().map_err(|err| match err {
        IntervalError::EndNotAfterStart => bad_request(MSG_END_NOT_AFTER_START, None),
        IntervalError::Unparseable { field, message } => {
            bad_request(MSG_INVALID_DATA, Some(FieldErrors::single(field, message)))
        }
    })?;

    let calendar = state.calendar.as_ref().ok_or_else(|| {
        error!("Booking rejected: calendar client is not configured");
        server_error()
    })?;

    match calendar
        .service
        .create_event(&calendar.calendar_id, event)
        .await
    {
        Ok(result) => {
            info!(
                event_id = result.event_id.as_deref().unwrap_or("<none>"),
                room = request.room.tag(),
                "Created calendar event"
            );
            Ok(Json(BookingAck { ok: true }))
        }
        Err(e) => {
            error!(error = %e, "Error creating calendar event");
            Err(server_error())
        }
    }
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EnvPresence {
    pub has_calendar_id: bool,
    pub has_client_email: bool,
    pub has_private_key: bool,
    pub has_embed_url: bool,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct HealthResponse {
    pub ok: bool,
    pub env: EnvPresence,
}

/// Liveness and configuration presence check. Booleans only, no secret
/// values ever leave the process through this endpoint.
#[axum::debug_handler]
pub async fn health_handler(State(state): State<Arc<GcalState>>) -> Json<HealthResponse> {
    let default = GcalConfig::default();
    let gcal = state.config.gcal.as_ref().unwrap_or(&default);
    Json(HealthResponse {
        ok: true,
        env: EnvPresence {
            has_calendar_id: gcal.has_calendar_id(),
            has_client_email: gcal.has_client_email(),
            has_private_key: gcal.has_private_key(),
            has_embed_url: gcal.has_embed_url(),
        },
    })
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct EmbedResponse {
    pub url: Option<String>,
}

/// Public read-only embed URL for the form page's iframe. Null when unset.
#[axum::debug_handler]
pub async fn embed_handler(State(state): State<Arc<GcalState>>) -> Json<EmbedResponse> {
    Json(EmbedResponse {
        url: state
            .config
            .gcal
            .as_ref()
            .and_then(|g| g.embed_url.clone())
            .filter(|v| !v.is_empty()),
    })
}
