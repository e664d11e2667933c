//! HTTP surface: a thin axum layer over the pure scoring core.
//!
//! Two entry points for the UI:
//! - `POST /recommend` — fully structured inputs (scores + preferences +
//!   program profiles), straight into the engine.
//! - `POST /recommend/catalog` — raw grade records plus raw catalog rows;
//!   runs aggregate → classify → engine, and attaches the cosmetic display
//!   bias as a separate `scoreAffiche` field (never folded into `score`).

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;

use crate::aggregate::{aggregate, NoteMatiere};
use crate::bias::biais_affichage;
use crate::classify::to_formation;
use crate::engine::recommander;
use crate::profile::{CatalogRow, Formation, Preferences, ScoresEtudiant};
use crate::recommendation::Recommandation;

#[derive(Clone)]
pub struct AppState {
    /// Preferences applied when a catalog request carries none.
    default_preferences: Arc<Preferences>,
}

impl AppState {
    pub fn new(default_preferences: Preferences) -> Self {
        Self {
            default_preferences: Arc::new(default_preferences),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/recommend", post(recommend))
        .route("/recommend/catalog", post(recommend_catalog))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecommendReq {
    #[serde(default)]
    scores: ScoresEtudiant,
    preferences: Preferences,
    formations: Vec<Formation>,
}

async fn recommend(Json(body): Json<RecommendReq>) -> Json<Vec<Recommandation>> {
    let out = recommander(&body.scores, &body.preferences, &body.formations);
    tracing::debug!(
        formations = body.formations.len(),
        retenues = out.len(),
        "recommend"
    );
    Json(out)
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogReq {
    #[serde(default)]
    notes: Vec<NoteMatiere>,
    /// Omitted → configured defaults.
    #[serde(default)]
    preferences: Option<Preferences>,
    catalogue: Vec<CatalogRow>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogResp {
    #[serde(flatten)]
    recommandation: Recommandation,
    /// Engine score plus display bias, clamped back into [0,100]. Cosmetic;
    /// ranking and tier always come from `score`.
    score_affiche: f32,
}

async fn recommend_catalog(
    State(state): State<AppState>,
    Json(body): Json<CatalogReq>,
) -> Result<Json<Vec<CatalogResp>>, (StatusCode, String)> {
    let scores = aggregate(&body.notes)
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;

    let preferences = body
        .preferences
        .unwrap_or_else(|| (*state.default_preferences).clone());

    let formations: Vec<Formation> = body.catalogue.iter().map(to_formation).collect();
    let recommandations = recommander(&scores, &preferences, &formations);

    let out = recommandations
        .into_iter()
        .map(|r| {
            let score_affiche =
                (r.score + biais_affichage(&r.formation) as f32).clamp(0.0, 100.0);
            CatalogResp {
                recommandation: r,
                score_affiche,
            }
        })
        .collect();

    Ok(Json(out))
}
