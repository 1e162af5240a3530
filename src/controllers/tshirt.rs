use axum::Json;
use tracing::debug;

use crate::data::tshirt::Tshirt;

#[tracing::instrument]
pub async fn show() -> Json<Tshirt> {
    debug!("Serving fixed t-shirt payload");
    Json(Tshirt::FIXED)
}
