use axum::{
    Router,
    routing::get,
    http::StatusCode,
    response::IntoResponse
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::ping;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        ping::ping,
    ),
    components(schemas(
        ping::PingResponse,
        ping::ErrorDetail,
        ping::BadRequest,
        ping::InternalError,
    )),
    tags(
        (name = "ping", description = "Health check endpoints"),
    ),
)]
struct ApiDoc;

// Function to create the main application router
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(ping::ping))
        .fallback(handler_404)
        .with_state(state)
        // Swagger UI at root
        .merge(SwaggerUi::new("/").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

// Handler for 404 Not Found errors
async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
