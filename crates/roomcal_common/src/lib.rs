// --- File: crates/roomcal_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod logging; // Logging utilities
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{
    config_error, external_service_error, internal_error, validation_error, HttpStatusCode,
    RoomcalError,
};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level};
