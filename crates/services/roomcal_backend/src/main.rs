// File: services/roomcal_backend/src/main.rs
use axum::{routing::get, Router};
use roomcal_config::load_config;
use roomcal_gcal::routes as gcal_routes;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::{info, warn};

#[tokio::main]
async fn main() {
    roomcal_common::logging::init();

    let config = Arc::new(load_config().expect("Failed to load config"));

    // Missing calendar configuration is detectable at startup; the health
    // endpoint exposes the same presence booleans to operators.
    if let Some(gcal) = config.gcal.as_ref() {
        if !gcal.has_calendar_id() || !gcal.has_client_email() || !gcal.has_private_key() {
            warn!(
                has_calendar_id = gcal.has_calendar_id(),
                has_client_email = gcal.has_client_email(),
                has_private_key = gcal.has_private_key(),
                "Incomplete gcal configuration, bookings will fail"
            );
        }
    } else {
        warn!("No gcal configuration, bookings will fail");
    }

    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to the roomcal API!" }))
        .merge(gcal_routes::routes(config.clone()).await);

    let mut app = Router::new().nest("/api", api_router);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use roomcal_gcal::doc::GcalApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        let openapi_doc = GcalApiDoc::openapi();
        info!("Adding Swagger UI at /api/docs");

        let swagger_ui = SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc);
        app = app.merge(swagger_ui);
    }

    // The booking form is a static page
    app = app.fallback_service(ServeDir::new("static"));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.expect("Failed to bind");
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
