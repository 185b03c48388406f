// --- File: crates/roomcal_gcal/src/service.rs ---
//! Google Calendar service implementation.
//!
//! This module provides an implementation of the CalendarService trait for
//! Google Calendar and the timezone handling around it.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use roomcal_common::services::{BoxFuture, CalendarEvent, CalendarEventResult, CalendarService};
use google_calendar3::api::{Event, EventDateTime};
use roomcal_config::GcalConfig;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

use crate::auth::HubType;

/// Timezone booking times are interpreted in when the config is silent.
pub const DEFAULT_TIME_ZONE: Tz = chrono_tz::Europe::Bratislava;

/// Resolves the configured timezone, falling back to the default when the
/// value is absent or not a known IANA name.
pub fn resolve_time_zone(config: &GcalConfig) -> Tz {
    match config.time_zone.as_deref() {
        None => DEFAULT_TIME_ZONE,
        Some(name) => Tz::from_str(name).unwrap_or_else(|_| {
            warn!(time_zone = name, "Unknown time_zone in GcalConfig, using default");
            DEFAULT_TIME_ZONE
        }),
    }
}

/// Errors that can occur when interacting with Google Calendar.
#[derive(Error, Debug)]
pub enum GcalServiceError {
    #[error("Google API Error: {0}")]
    ApiError(#[from] google_calendar3::Error),
    #[error("Failed to resolve local time: {0}")]
    TimeResolveError(String),
}

/// Google Calendar service implementation.
pub struct GoogleCalendarService {
    calendar_hub: Arc<HubType>,
    time_zone: Tz,
}

impl GoogleCalendarService {
    /// Create a new Google Calendar service.
    pub fn new(calendar_hub: Arc<HubType>, time_zone: Tz) -> Self {
        Self {
            calendar_hub,
            time_zone,
        }
    }
}

fn local_to_instant(naive: NaiveDateTime, tz: Tz) -> Result<DateTime<Utc>, GcalServiceError> {
    // earliest() picks the first instant for DST-ambiguous wall times;
    // a wall time skipped by a DST jump has no instant at all.
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| {
            GcalServiceError::TimeResolveError(format!("{naive} does not exist in {tz}"))
        })
}

impl CalendarService for GoogleCalendarService {
    type Error = GcalServiceError;

    /// Creates a new calendar event in the specified calendar.
    ///
    /// Issues exactly one insert call per invocation. There is no retry and
    /// no idempotency key, so a caller-side retry creates a duplicate event.
    /// Conflicts with existing events are not checked; the shared calendar
    /// accepts overlapping events.
    fn create_event(
        &self,
        calendar_id: &str,
        event: CalendarEvent,
    ) -> BoxFuture<'_, CalendarEventResult, Self::Error> {
        let calendar_id = calendar_id.to_string();
        let calendar_hub = self.calendar_hub.clone();
        let time_zone = self.time_zone;

        Box::pin(async move {
            let start_dt = local_to_instant(event.start, time_zone)?;
            let end_dt = local_to_instant(event.end, time_zone)?;

            // Construct the Event object
            let new_event = Event {
                summary: Some(event.summary),
                description: event.description,
                color_id: event.color_id,
                start: Some(EventDateTime {
                    date_time: Some(start_dt),
                    time_zone: Some(time_zone.name().to_string()),
                    ..Default::default()
                }),
                end: Some(EventDateTime {
                    date_time: Some(end_dt),
                    time_zone: Some(time_zone.name().to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            };

            // Make the API call to insert the event
            let (_response, created_event) = calendar_hub
                .events()
                .insert(new_event, &calendar_id)
                .doit()
                .await?;

            Ok(CalendarEventResult {
                event_id: created_event.id,
                status: created_event
                    .status
                    .unwrap_or_else(|| "confirmed".to_string()),
            })
        })
    }
}
