use axum::{extract::State, response::Json};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::services::RecolorService;

/// One registered palette
#[derive(Debug, Serialize, ToSchema)]
pub struct PaletteInfo {
    /// Palette name, as accepted by `palette` parameters
    pub name: String,
    /// Entries in order, as `#RRGGBBAA`
    pub colors: Vec<String>,
}

/// All registered palettes
#[derive(Debug, Serialize, ToSchema)]
pub struct PaletteListResponse {
    /// Palette used for unknown or missing names
    pub default: String,
    /// Built-in palettes first, then configured ones
    pub palettes: Vec<PaletteInfo>,
}

/// List palettes
#[utoipa::path(
    get,
    path = "/api/palettes",
    responses(
        (status = 200, description = "Registered palettes", body = PaletteListResponse),
    ),
    tag = "Palettes"
)]
pub async fn handle_palettes(
    State(recolor): State<Arc<RecolorService>>,
) -> Json<PaletteListResponse> {
    let registry = recolor.registry();

    Json(PaletteListResponse {
        default: registry.default_palette().name().to_string(),
        palettes: registry
            .iter()
            .map(|p| PaletteInfo {
                name: p.name().to_string(),
                colors: p.to_hex_strings(),
            })
            .collect(),
    })
}
