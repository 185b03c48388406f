// File: crates/roomcal_gcal/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::handlers::{BookingAck, EmbedResponse, EnvPresence, ErrorBody, HealthResponse};
use crate::logic::{BookingPayload, FieldErrors};

#[utoipa::path(
    post,
    path = "/events",
    request_body(content = BookingPayload, example = json!({
        "name": "Jana",
        "room": "call",
        "description": "Weekly sync",
        "date": "2025-03-10",
        "startTime": "09:00",
        "endTime": "09:30"
    })),
    responses(
        (status = 200, description = "Booking created", body = BookingAck,
         example = json!({ "ok": true })),
        (status = 400, description = "Validation failure", body = ErrorBody,
         example = json!({
             "error": "Neplatné dáta",
             "details": { "fieldErrors": { "room": ["Expected one of: call, meeting"] } }
         })),
        (status = 500, description = "Calendar write failed", body = ErrorBody,
         example = json!({ "error": "Nepodarilo sa vytvoriť event v kalendári." }))
    )
)]
fn doc_create_booking_handler() {}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Configuration presence booleans", body = HealthResponse,
         example = json!({
             "ok": true,
             "env": {
                 "hasCalendarId": true,
                 "hasClientEmail": true,
                 "hasPrivateKey": true,
                 "hasEmbedUrl": false
             }
         }))
    )
)]
fn doc_health_handler() {}

#[utoipa::path(
    get,
    path = "/embed",
    responses(
        (status = 200, description = "Public embed URL, null when unset", body = EmbedResponse)
    )
)]
fn doc_embed_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_create_booking_handler, doc_health_handler, doc_embed_handler),
    components(
        schemas(
            BookingPayload,
            BookingAck,
            ErrorBody,
            FieldErrors,
            HealthResponse,
            EnvPresence,
            EmbedResponse
        )
    ),
    tags(
        (name = "gcal", description = "Room booking over Google Calendar")
    ),
    servers(
        (url = "/api", description = "Main API prefix")
    )
)]
pub struct GcalApiDoc;
