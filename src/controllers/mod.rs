use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

pub mod tshirt;

/// The single route of the service. Anything else is left to axum's
/// default 404 / 405 handling.
pub fn router() -> Router {
    Router::new()
        .route("/tshirt", get(tshirt::show))
        .layer(TraceLayer::new_for_http())
}
