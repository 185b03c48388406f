// --- File: crates/roomcal_gcal/src/routes.rs ---

use crate::auth::create_calendar_hub;
use crate::handlers::{
    create_booking_handler, embed_handler, health_handler, BookingCalendar, GcalState,
};
use crate::logic::GcalError;
use crate::service::{resolve_time_zone, GoogleCalendarService};
use axum::{
    routing::{get, post},
    Router,
};
use roomcal_config::{AppConfig, GcalConfig};
use std::sync::Arc;
use tracing::warn;

/// Builds the calendar write handle from config. Missing any of the three
/// required values (calendar id, client email, private key) is a
/// configuration error.
pub async fn build_booking_calendar(
    gcal: Option<&GcalConfig>,
) -> Result<BookingCalendar, GcalError> {
    let gcal =
        gcal.ok_or_else(|| GcalError::Config("Missing gcal section in AppConfig".to_string()))?;
    let calendar_id = gcal
        .calendar_id
        .clone()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| GcalError::Config("Missing calendar_id in GcalConfig".to_string()))?;

    let hub = create_calendar_hub(gcal).await?;
    let service = GoogleCalendarService::new(Arc::new(hub), resolve_time_zone(gcal));

    Ok(BookingCalendar {
        calendar_id,
        service: Arc::new(service),
    })
}

/// Creates a router containing all routes for the booking feature.
///
/// A deployment with incomplete calendar configuration still gets the
/// routes: the health endpoint reports what is missing and the booking
/// endpoint answers with a server error.
pub async fn routes(config: Arc<AppConfig>) -> Router {
    let calendar = match build_booking_calendar(config.gcal.as_ref()).await {
        Ok(calendar) => Some(calendar),
        Err(e) => {
            warn!(error = %e, "Calendar booking disabled");
            None
        }
    };

    let gcal_state = Arc::new(GcalState { config, calendar });

    Router::new()
        .route("/events", post(create_booking_handler))
        .route("/health", get(health_handler))
        .route("/embed", get(embed_handler))
        .with_state(gcal_state)
}
