// --- File: crates/roomcal_common/src/services.rs ---
//! Service abstractions for external services.
//!
//! This module provides trait definitions for external services used by the
//! application. These traits allow for dependency injection and easier
//! testing by decoupling the application logic from specific implementations.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A calendar event to be created on an external calendar.
///
/// The start and end are naive local timestamps; the implementation decides
/// which timezone they are interpreted in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarEvent {
    pub summary: String,
    pub description: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Calendar-specific color tag. Omitted from the payload when None.
    pub color_id: Option<String>,
}

/// Result of creating a calendar event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEventResult {
    pub event_id: Option<String>,
    pub status: String,
}

/// A trait for calendar service operations.
///
/// This trait defines the single mutation this application performs against
/// a calendar backend. Implementations must issue exactly one insert per
/// call; retries and idempotency are deliberately left to the caller.
pub trait CalendarService: Send + Sync {
    /// Error type returned by calendar service operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create a calendar event.
    fn create_event(
        &self,
        calendar_id: &str,
        event: CalendarEvent,
    ) -> BoxFuture<'_, CalendarEventResult, Self::Error>;
}
