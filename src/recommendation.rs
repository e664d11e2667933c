//! recommendation.rs — Output shape of the scoring engine, with explainability.
//!
//! One `Recommandation` per surviving program: numeric score, qualitative
//! tier, strongest subjects, prerequisite gaps, plus pass-through display
//! fields. Created fresh per invocation and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::profile::Mode;

/// Qualitative tier bucketing the 0–100 score into three bands.
/// Lower bounds are inclusive: `>= 75`, `>= 50`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Niveau {
    #[serde(rename = "Fortement recommandé")]
    FortementRecommande,
    #[serde(rename = "Adapté")]
    Adapte,
    #[serde(rename = "À renforcer")]
    ARenforcer,
}

impl Niveau {
    /// Pure, deterministic mapping from a final score to its tier.
    pub fn from_score(score: f32) -> Self {
        if score >= 75.0 {
            Self::FortementRecommande
        } else if score >= 50.0 {
            Self::Adapte
        } else {
            Self::ARenforcer
        }
    }

    /// Human-readable French label, identical to the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Self::FortementRecommande => "Fortement recommandé",
            Self::Adapte => "Adapté",
            Self::ARenforcer => "À renforcer",
        }
    }
}

/// Compatibility result for one program. The caller owns the resulting list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommandation {
    /// Display name of the program.
    pub formation: String,
    /// Final score in [0,100].
    pub score: f32,
    pub niveau: Niveau,
    /// Top 2 subjects by weighted contribution (grade × weight, descending).
    #[serde(default)]
    pub points_forts: Vec<String>,
    /// Subjects strictly below their prerequisite threshold.
    #[serde(default)]
    pub gaps: Vec<String>,
    pub mode: Mode,
    pub cout: f32,
    pub distance_km: f32,
}
