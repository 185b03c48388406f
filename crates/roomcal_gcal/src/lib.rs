// --- File: crates/roomcal_gcal/src/lib.rs ---
// Declare modules within this crate
pub mod auth;
#[cfg(test)]
mod auth_test;
pub mod doc;
pub mod handlers;
pub mod logic;
pub mod routes;
#[cfg(test)]
mod routes_test;
pub mod service;
