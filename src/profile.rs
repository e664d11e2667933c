//! Domain value objects: student scores, preferences, and program profiles.
//!
//! Field names serialize in camelCase to match the JSON shape the front-end
//! already speaks (`budgetMax`, `distanceKm`, `capaciteDisponible`, ...).
//! Subject maps are `BTreeMap` so iteration order is deterministic; the
//! engine's tie-breaks rely on that.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Notes par matière sur l'échelle 0–20. Subjects with no recorded grade are
/// simply absent (never zero-filled at this stage).
pub type ScoresEtudiant = BTreeMap<String, f32>;

/// Teaching mode of a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Presentiel,
    Distanciel,
    Mixte,
}

/// Teaching mode the student wishes for. Unlike [`Mode`], this side of the
/// comparison admits `indifferent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeSouhaite {
    Presentiel,
    Distanciel,
    Mixte,
    Indifferent,
}

impl ModeSouhaite {
    pub fn is_indifferent(self) -> bool {
        self == Self::Indifferent
    }

    /// Exact match against a program mode. `indifferent` matches nothing here;
    /// it only disables the mismatch malus in the engine.
    pub fn matches(self, mode: Mode) -> bool {
        matches!(
            (self, mode),
            (Self::Presentiel, Mode::Presentiel)
                | (Self::Distanciel, Mode::Distanciel)
                | (Self::Mixte, Mode::Mixte)
        )
    }
}

/// Constraints and wishes of the student, immutable per computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub budget_max: f32,
    pub distance_max_km: f32,
    pub mode_souhaite: ModeSouhaite,
    /// Free text, unused in scoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localisation: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags_interets: Vec<String>,
}

/// Scoring profile of one school program, either supplied directly by the
/// caller or derived from a raw catalog row by the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Formation {
    pub nom: String,
    /// Matière -> seuil minimum (0–20).
    #[serde(default)]
    pub prerequis: BTreeMap<String, f32>,
    /// Matière -> poids; weights are interpreted as approximate fractions of
    /// 100 competence points and are not renormalized.
    #[serde(default)]
    pub poids: BTreeMap<String, f32>,
    pub cout: f32,
    pub distance_km: f32,
    pub mode: Mode,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    pub capacite_disponible: i32,
}

/// One raw row of the externally loaded school catalog. The catalog source
/// only carries display fields; scoring metadata is derived by the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRow {
    pub nom: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etablissement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ville: Option<String>,
}
