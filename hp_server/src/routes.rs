//! HTTP routes for player hit point operations

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use hp_core::PlayerState;
use serde::Deserialize;

use crate::manager::{HitPointManager, ManagerError};

/// Request body for the damage, heal, and temporary hit point endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HitPointModifierRequest {
    pub amount: Option<i32>,
    pub damage_type: Option<String>,
}

/// Build the API router over the hit point manager.
pub fn router(manager: Arc<HitPointManager>) -> Router {
    Router::new()
        .route("/api/player/{name}/info", get(player_info))
        .route("/api/player/{name}/damage", post(deal_damage))
        .route("/api/player/{name}/heal", post(heal))
        .route("/api/player/{name}/temp", post(add_temporary_hit_points))
        .with_state(manager)
}

/// Validate the amount before it reaches the core: the core itself accepts
/// any integer, so rejecting negative modifications is this layer's job.
fn validated_amount(request: &HitPointModifierRequest) -> Result<i32, (StatusCode, String)> {
    let amount = request.amount.unwrap_or(0);
    if amount < 0 {
        return Err((
            StatusCode::BAD_REQUEST,
            "Hit point modification values must not be negative".to_string(),
        ));
    }
    Ok(amount)
}

fn not_found(err: ManagerError) -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, err.to_string())
}

async fn player_info(
    State(manager): State<Arc<HitPointManager>>,
    Path(name): Path<String>,
) -> Result<Json<PlayerState>, (StatusCode, String)> {
    manager.player_info(&name).map(Json).map_err(not_found)
}

async fn deal_damage(
    State(manager): State<Arc<HitPointManager>>,
    Path(name): Path<String>,
    Json(request): Json<HitPointModifierRequest>,
) -> Result<Json<PlayerState>, (StatusCode, String)> {
    let amount = validated_amount(&request)?;
    let damage_type = request.damage_type.unwrap_or_default();

    manager
        .deal_damage(&name, &damage_type, amount)
        .map(Json)
        .map_err(not_found)
}

async fn heal(
    State(manager): State<Arc<HitPointManager>>,
    Path(name): Path<String>,
    Json(request): Json<HitPointModifierRequest>,
) -> Result<Json<PlayerState>, (StatusCode, String)> {
    let amount = validated_amount(&request)?;

    manager.heal(&name, amount).map(Json).map_err(not_found)
}

async fn add_temporary_hit_points(
    State(manager): State<Arc<HitPointManager>>,
    Path(name): Path<String>,
    Json(request): Json<HitPointModifierRequest>,
) -> Result<Json<PlayerState>, (StatusCode, String)> {
    let amount = validated_amount(&request)?;

    manager
        .add_temporary_hit_points(&name, amount)
        .map(Json)
        .map_err(not_found)
}
