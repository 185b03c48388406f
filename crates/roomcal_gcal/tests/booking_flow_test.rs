use axum::{extract::State, http::StatusCode, Json};
use chrono::{NaiveDate, NaiveDateTime};
use roomcal_gcal::handlers::{create_booking_handler, health_handler, GcalState};
use std::sync::Arc;

mod fixtures;

fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, 0)
        .unwrap()
}

#[tokio::test]
async fn booking_flow_creates_one_styled_event() {
    // The worked example from the submission contract: Jana books the call
    // room for half an hour.
    let service = Arc::new(fixtures::RecordingCalendarService::default());
    let state = fixtures::create_test_state(service.clone());

    let payload = fixtures::create_booking_payload("Jana", "call", "2025-03-10", "09:00", "09:30");
    let response = create_booking_handler(State(state), Json(payload))
        .await
        .expect("booking should succeed");
    assert!(response.0.ok);

    let calls = service.calls.lock().unwrap();
    assert_eq!(calls.len(), 1, "exactly one insert call must be issued");
    let (calendar_id, event) = &calls[0];
    assert_eq!(calendar_id, "shared-rooms@group.calendar.google.com");
    assert_eq!(event.summary, "📞 Call room – Jana");
    assert_eq!(event.color_id.as_deref(), Some("11"));
    assert_eq!(event.start, local(2025, 3, 10, 9, 0));
    assert_eq!(event.end, local(2025, 3, 10, 9, 30));
}

#[tokio::test]
async fn meeting_room_gets_its_own_prefix_and_color() {
    let service = Arc::new(fixtures::RecordingCalendarService::default());
    let state = fixtures::create_test_state(service.clone());

    let payload =
        fixtures::create_booking_payload("Peter", "meeting", "2025-03-11", "14:00", "15:00");
    create_booking_handler(State(state), Json(payload))
        .await
        .expect("booking should succeed");

    let calls = service.calls.lock().unwrap();
    let (_, event) = &calls[0];
    assert_eq!(event.summary, "👥 Meeting room – Peter");
    assert_eq!(event.color_id.as_deref(), Some("5"));
}

#[tokio::test]
async fn inverted_interval_never_reaches_the_calendar() {
    let service = Arc::new(fixtures::RecordingCalendarService::default());
    let state = fixtures::create_test_state(service.clone());

    let payload = fixtures::create_booking_payload("Jana", "call", "2025-03-10", "10:00", "09:00");
    let (status, body) = create_booking_handler(State(state), Json(payload))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.0.error, "Koniec musí byť po začiatku.");
    assert_eq!(service.call_count(), 0);
}

#[tokio::test]
async fn shape_rejection_never_reaches_the_calendar() {
    let service = Arc::new(fixtures::RecordingCalendarService::default());
    let state = fixtures::create_test_state(service.clone());

    let payload = fixtures::create_booking_payload("", "sauna", "today", "soon", "later");
    let (status, body) = create_booking_handler(State(state), Json(payload))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let details = body.0.details.expect("shape failures carry field details");
    for field in ["name", "room", "date", "startTime", "endTime"] {
        assert!(details.contains(field), "expected detail for {field}");
    }
    assert_eq!(service.call_count(), 0);
}

#[tokio::test]
async fn unconfigured_deployment_still_answers_health() {
    let state = Arc::new(GcalState {
        config: Arc::new(roomcal_config::AppConfig {
            server: roomcal_config::ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            gcal: None,
        }),
        calendar: None,
    });

    let health = health_handler(State(state.clone())).await;
    assert!(health.0.ok);
    assert!(!health.0.env.has_calendar_id);
    assert!(!health.0.env.has_client_email);
    assert!(!health.0.env.has_private_key);
    assert!(!health.0.env.has_embed_url);

    let payload = fixtures::create_booking_payload("Jana", "call", "2025-03-10", "09:00", "09:30");
    let (status, _) = create_booking_handler(State(state), Json(payload))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
