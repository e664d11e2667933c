//! Grade aggregation: collapse possibly-repeated per-subject grade records
//! into one representative grade per subject.
//!
//! This is the validation boundary for numeric input: non-finite grades are
//! rejected here with an error, so the engine downstream only ever sees
//! finite values (which it still clamps defensively). Finite out-of-range
//! grades are clamped into [0,20] before averaging.

use anyhow::{bail, Result};

use crate::profile::ScoresEtudiant;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One recorded grade entry, as fetched from the external grade store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteMatiere {
    pub matiere: String,
    /// Note sur 0–20.
    pub note: f32,
}

/// Arithmetic mean of all grades recorded per subject, rounded to 2 decimal
/// places. Subjects never recorded are absent from the result; zero-default
/// substitution only happens inside the engine's per-subject lookups.
pub fn aggregate(notes: &[NoteMatiere]) -> Result<ScoresEtudiant> {
    let mut groupes: BTreeMap<&str, (f32, u32)> = BTreeMap::new();

    for entry in notes {
        if !entry.note.is_finite() {
            bail!(
                "note non finie pour la matière '{}': {}",
                entry.matiere,
                entry.note
            );
        }
        let note = entry.note.clamp(0.0, 20.0);
        let slot = groupes.entry(entry.matiere.as_str()).or_insert((0.0, 0));
        slot.0 += note;
        slot.1 += 1;
    }

    Ok(groupes
        .into_iter()
        .map(|(matiere, (somme, n))| (matiere.to_string(), round2(somme / n as f32)))
        .collect())
}

fn round2(x: f32) -> f32 {
    (x * 100.0).round() / 100.0
}
