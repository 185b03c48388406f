// --- File: crates/roomcal_gcal/src/logic.rs ---
use crate::service::GcalServiceError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use roomcal_common::services::CalendarEvent;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

// --- Error Handling ---
use thiserror::Error;
#[derive(Error, Debug)]
pub enum GcalError {
    #[error("Google API Error: {0}")]
    ApiError(#[from] google_calendar3::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Authentication error: {0}")]
    Auth(String),
    #[error("Calendar service error: {0}")]
    ServiceError(#[from] GcalServiceError),
}

// --- Data Structures ---

/// One of the two bookable rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Room {
    Call,
    Meeting,
}

impl Room {
    /// Parses the wire tag. Anything other than the two known tags is None.
    pub fn from_tag(tag: &str) -> Option<Room> {
        match tag {
            "call" => Some(Room::Call),
            "meeting" => Some(Room::Meeting),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Room::Call => "call",
            Room::Meeting => "meeting",
        }
    }

    /// Event summary prefix shown on the shared calendar.
    pub fn summary_prefix(&self) -> &'static str {
        match self {
            Room::Call => "📞 Call room",
            Room::Meeting => "👥 Meeting room",
        }
    }

    /// Google Calendar colorId: 11 is Tomato, 5 is Banana.
    /// The embed iframe may ignore event colors; known Google limitation.
    pub fn color_id(&self) -> &'static str {
        match self {
            Room::Call => "11",
            Room::Meeting => "5",
        }
    }
}

/// Room-to-color mapping as used in the event payload. No room, no color.
pub fn color_id_for_room(room: Option<Room>) -> Option<String> {
    room.map(|r| r.color_id().to_string())
}

/// Raw booking submission as it arrives on the wire. Every field is optional
/// here so presence can be reported per field instead of failing the whole
/// deserialization.
#[derive(Deserialize, Debug, Clone, Default)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct BookingPayload {
    pub name: Option<String>,
    pub room: Option<String>,
    pub description: Option<String>,
    /// YYYY-MM-DD
    pub date: Option<String>,
    /// HH:MM, 24-hour
    pub start_time: Option<String>,
    /// HH:MM, 24-hour
    pub end_time: Option<String>,
}

/// Field-attributed validation failures, keyed by wire field name.
#[derive(Serialize, Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
    pub field_errors: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.field_errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.push(field, message);
        errors
    }

    pub fn is_empty(&self) -> bool {
        self.field_errors.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.field_errors.contains_key(field)
    }
}

/// A validated booking request.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    pub name: String,
    pub room: Room,
    pub description: Option<String>,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

// --- Shape Validation ---

// Character-class check only; calendar validity is deferred to interval
// resolution, matching the submission contract.
fn is_date_shaped(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit())
}

fn is_time_shaped(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 5
        && b[2] == b':'
        && [0usize, 1, 3, 4].iter().all(|&i| b[i].is_ascii_digit())
}

/// Validates the shape of a booking submission, accumulating one error list
/// per offending field. The downstream calendar call must never be attempted
/// when this returns Err.
pub fn validate_booking(payload: BookingPayload) -> Result<BookingRequest, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = match payload.name.as_deref().map(str::trim) {
        Some(n) if !n.is_empty() => Some(n.to_string()),
        _ => {
            errors.push("name", "Required non-empty string");
            None
        }
    };

    let room = match payload.room.as_deref().map(Room::from_tag) {
        Some(Some(room)) => Some(room),
        _ => {
            errors.push("room", "Expected one of: call, meeting");
            None
        }
    };

    let date = match payload.date.as_deref() {
        Some(d) if is_date_shaped(d) => Some(d.to_string()),
        _ => {
            errors.push("date", "Expected YYYY-MM-DD");
            None
        }
    };

    let start_time = match payload.start_time.as_deref() {
        Some(t) if is_time_shaped(t) => Some(t.to_string()),
        _ => {
            errors.push("startTime", "Expected HH:MM");
            None
        }
    };

    let end_time = match payload.end_time.as_deref() {
        Some(t) if is_time_shaped(t) => Some(t.to_string()),
        _ => {
            errors.push("endTime", "Expected HH:MM");
            None
        }
    };

    match (name, room, date, start_time, end_time) {
        (Some(name), Some(room), Some(date), Some(start_time), Some(end_time)) => {
            Ok(BookingRequest {
                name,
                room,
                description: payload.description.filter(|d| !d.is_empty()),
                date,
                start_time,
                end_time,
            })
        }
        _ => Err(errors),
    }
}

// --- Interval Resolution ---

/// Failures of the second validation step: turning the date and time strings
/// into a half-open interval.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntervalError {
    /// The string passed the shape check but chrono rejected it, e.g. a
    /// calendar-invalid date like 2023-02-30 or an out-of-range time like
    /// 25:99.
    #[error("Failed to parse {field}: {message}")]
    Unparseable { field: &'static str, message: String },
    #[error("End time must be strictly after start time")]
    EndNotAfterStart,
}

impl BookingRequest {
    /// Combines `date` with the two time-of-day strings and rejects
    /// inverted or empty intervals.
    pub fn interval(&self) -> Result<(NaiveDateTime, NaiveDateTime), IntervalError> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").map_err(|e| {
            IntervalError::Unparseable {
                field: "date",
                message: e.to_string(),
            }
        })?;
        let start = NaiveTime::parse_from_str(&self.start_time, "%H:%M").map_err(|e| {
            IntervalError::Unparseable {
                field: "startTime",
                message: e.to_string(),
            }
        })?;
        let end = NaiveTime::parse_from_str(&self.end_time, "%H:%M").map_err(|e| {
            IntervalError::Unparseable {
                field: "endTime",
                message: e.to_string(),
            }
        })?;

        let start = date.and_time(start);
        let end = date.and_time(end);
        if end <= start {
            return Err(IntervalError::EndNotAfterStart);
        }
        Ok((start, end))
    }

    /// Maps the validated request to the external calendar event.
    pub fn to_calendar_event(&self) -> Result<CalendarEvent, IntervalError> {
        let (start, end) = self.interval()?;
        Ok(CalendarEvent {
            summary: format!("{} – {}", self.room.summary_prefix(), self.name),
            description: self.description.clone(),
            start,
            end,
            color_id: color_id_for_room(Some(self.room)),
        })
    }
}
