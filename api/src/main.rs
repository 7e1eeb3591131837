use std::net::SocketAddr;

use axum::Router;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod error;
mod extract;
mod middleware;
mod routes;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Nurovia Triage API",
        version = "0.1.0",
        description = "Stroke risk screening and assistant endpoints behind the Nurovia triage page. Advisory only, never a diagnosis."
    ),
    paths(
        routes::health::health_check,
        routes::screening::assess,
        routes::assistant::chat,
    ),
    components(schemas(
        HealthResponse,
        nurovia_core::error::ApiError,
        nurovia_core::screening::ObservationSet,
        nurovia_core::screening::Assessment,
        nurovia_core::screening::RiskLevel,
        nurovia_core::assistant::ChatRequest,
        nurovia_core::assistant::ChatReply,
    ))
)]
struct ApiDoc;

#[derive(Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[tokio::main]
async fn main() {
    // Load .env if present (dev only)
    let _ = dotenvy::dotenv();

    // Structured JSON logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nurovia_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    // CORS
    let cors_layer = middleware::cors::build_cors_layer();

    // Router with per-endpoint rate limiting on the two POST endpoints
    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .merge(routes::ui::router())
        .merge(routes::health::router())
        .merge(routes::screening::router().layer(middleware::rate_limit::assess_layer()))
        .merge(routes::assistant::router().layer(middleware::rate_limit::chat_layer()))
        .fallback(routes::not_found)
        .layer(axum::middleware::from_fn(middleware::security_headers::apply))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer),
        );

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(7860);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Nurovia API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
