//! # Scoring Engine
//! Pure, testable logic that maps `(scores, preferences, formations)` →
//! ranked `Recommandation`s. No I/O, suitable for unit tests and repeated
//! concurrent invocation — each call is referentially transparent.
//!
//! Policy: hard filters (capacity, budget, distance) exclude a program
//! entirely; survivors get a weighted competence score on the 0–100 scale,
//! adjusted by prerequisite penalties and small mode/tag/distance
//! bonus-malus terms, then clamped to [0,100].

use crate::profile::{Formation, Preferences, ScoresEtudiant};
use crate::recommendation::{Niveau, Recommandation};

/// Maximum penalty per unmet prerequisite subject, approached as the grade
/// tends to 0 relative to its threshold.
const PENALITE_PREREQUIS_MAX: f32 = 15.0;

/// Score one student against a catalog of programs and return the surviving
/// results sorted by descending score (stable: ties keep input order).
///
/// Absent subjects count as grade 0 both for the weighted competence term and
/// for prerequisite checks; no input combination makes this function fail.
pub fn recommander(
    scores: &ScoresEtudiant,
    preferences: &Preferences,
    formations: &[Formation],
) -> Vec<Recommandation> {
    let mut recommandations = Vec::with_capacity(formations.len());

    for formation in formations {
        // 1) Filtrage dur
        if formation.capacite_disponible <= 0 {
            continue;
        }
        if formation.cout > preferences.budget_max {
            continue;
        }
        if formation.distance_km > preferences.distance_max_km {
            continue;
        }

        // 2) Score de compétences pondéré (base 100)
        let mut score_competences = 0.0f32;
        for (matiere, poids) in &formation.poids {
            let note = note_etudiant(scores, matiere);
            score_competences += normalize_note_20_to_100(note) * poids;
        }

        // 3) Pénalité prérequis
        let mut penalite_prerequis = 0.0f32;
        for (matiere, seuil) in &formation.prerequis {
            let note = note_etudiant(scores, matiere).clamp(0.0, 20.0);
            if note < *seuil {
                let deficit_ratio = (seuil - note) / seuil.max(1.0);
                penalite_prerequis += deficit_ratio * PENALITE_PREREQUIS_MAX;
            }
        }

        // 4) Bonus / malus selon préférences. Both mode checks are evaluated
        // independently, as the original does; equality and inequality cannot
        // both hold, so at most one of them fires per program.
        let mut bonus = 0.0f32;
        let mut malus = 0.0f32;

        if preferences.mode_souhaite.matches(formation.mode) {
            bonus += 5.0;
        }
        if !preferences.mode_souhaite.is_indifferent()
            && !preferences.mode_souhaite.matches(formation.mode)
        {
            malus += 3.0;
        }

        // Interest tags: case-sensitive exact intersection.
        if formation
            .tags
            .iter()
            .any(|tag| preferences.tags_interets.iter().any(|t| t == tag))
        {
            bonus += 5.0;
        }

        if formation.distance_km <= preferences.distance_max_km / 2.0 {
            bonus += 2.0;
        } else {
            malus += 2.0;
        }

        // 5) Score final borné
        let score_final =
            (score_competences + bonus - malus - penalite_prerequis).clamp(0.0, 100.0);

        recommandations.push(Recommandation {
            formation: formation.nom.clone(),
            score: score_final,
            niveau: Niveau::from_score(score_final),
            points_forts: points_forts(scores, formation, 2),
            gaps: matieres_sous_seuil(scores, formation),
            mode: formation.mode,
            cout: formation.cout,
            distance_km: formation.distance_km,
        });
    }

    // 6) Tri décroissant, stable (ties retain input order).
    recommandations.sort_by(|a, b| b.score.total_cmp(&a.score));
    recommandations
}

/// Student grade for a subject, 0 if absent.
fn note_etudiant(scores: &ScoresEtudiant, matiere: &str) -> f32 {
    scores.get(matiere).copied().unwrap_or(0.0)
}

/// Normalize a 0–20 grade onto the 0–100 scale, clamping out-of-range input.
fn normalize_note_20_to_100(note: f32) -> f32 {
    note.clamp(0.0, 20.0) / 20.0 * 100.0
}

/// Top `top` subjects of the program's weight map ranked by `grade × weight`
/// descending. The sort is stable, so ties keep the map's iteration order.
fn points_forts(scores: &ScoresEtudiant, formation: &Formation, top: usize) -> Vec<String> {
    let mut entries: Vec<(&String, f32)> = formation
        .poids
        .iter()
        .map(|(matiere, poids)| (matiere, note_etudiant(scores, matiere) * poids))
        .collect();
    entries.sort_by(|a, b| b.1.total_cmp(&a.1));
    entries
        .into_iter()
        .take(top)
        .map(|(matiere, _)| matiere.clone())
        .collect()
}

/// Every prerequisite subject whose clamped grade is strictly below its
/// threshold, in the prerequisite map's iteration order.
fn matieres_sous_seuil(scores: &ScoresEtudiant, formation: &Formation) -> Vec<String> {
    formation
        .prerequis
        .iter()
        .filter_map(|(matiere, seuil)| {
            if note_etudiant(scores, matiere).clamp(0.0, 20.0) < *seuil {
                Some(matiere.clone())
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Mode, ModeSouhaite};
    use std::collections::BTreeMap;

    fn mk_scores(pairs: &[(&str, f32)]) -> ScoresEtudiant {
        pairs.iter().map(|(m, n)| (m.to_string(), *n)).collect()
    }

    fn mk_prefs(mode: ModeSouhaite) -> Preferences {
        Preferences {
            budget_max: 8000.0,
            distance_max_km: 30.0,
            mode_souhaite: mode,
            localisation: None,
            tags_interets: vec!["data".to_string()],
        }
    }

    fn mk_formation(nom: &str) -> Formation {
        Formation {
            nom: nom.to_string(),
            prerequis: BTreeMap::from([("Mathématiques".to_string(), 12.0)]),
            poids: BTreeMap::from([
                ("Mathématiques".to_string(), 0.6),
                ("Anglais".to_string(), 0.4),
            ]),
            cout: 7000.0,
            distance_km: 10.0,
            mode: Mode::Presentiel,
            tags: vec!["data".to_string()],
            capacite_disponible: 25,
        }
    }

    #[test]
    fn worked_example_scores_87_strongly_recommended() {
        let scores = mk_scores(&[("Mathématiques", 17.0), ("Anglais", 12.0)]);
        let prefs = mk_prefs(ModeSouhaite::Presentiel);
        let out = recommander(&scores, &prefs, &[mk_formation("Licence Data")]);

        assert_eq!(out.len(), 1);
        let r = &out[0];
        // competence 75 + mode 5 + tag 5 + distance 2 = 87, no penalty
        assert!((r.score - 87.0).abs() < 1e-4, "got {}", r.score);
        assert_eq!(r.niveau, Niveau::FortementRecommande);
        assert!(r.gaps.is_empty());
        assert_eq!(r.points_forts, vec!["Mathématiques", "Anglais"]);
    }

    #[test]
    fn zero_capacity_is_excluded_entirely() {
        let scores = mk_scores(&[("Mathématiques", 17.0)]);
        let prefs = mk_prefs(ModeSouhaite::Presentiel);
        let mut f = mk_formation("Licence Data");
        f.capacite_disponible = 0;
        assert!(recommander(&scores, &prefs, &[f]).is_empty());
    }

    #[test]
    fn budget_and_distance_filters_exclude() {
        let scores = mk_scores(&[("Mathématiques", 17.0)]);
        let prefs = mk_prefs(ModeSouhaite::Presentiel);

        let mut too_expensive = mk_formation("Chère");
        too_expensive.cout = 8000.01;
        let mut too_far = mk_formation("Lointaine");
        too_far.distance_km = 30.01;

        assert!(recommander(&scores, &prefs, &[too_expensive, too_far]).is_empty());
    }

    #[test]
    fn missing_prerequisite_subject_counts_as_zero_and_appears_in_gaps() {
        let scores = ScoresEtudiant::new();
        let prefs = mk_prefs(ModeSouhaite::Presentiel);
        let out = recommander(&scores, &prefs, &[mk_formation("Licence Data")]);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].gaps, vec!["Mathématiques"]);
        // competence 0, bonuses 12, full penalty 15 → clamp at 0
        assert!(out[0].score >= 0.0);
    }

    #[test]
    fn grade_exactly_at_threshold_incurs_no_penalty() {
        let scores = mk_scores(&[("Mathématiques", 12.0), ("Anglais", 12.0)]);
        let prefs = mk_prefs(ModeSouhaite::Presentiel);
        let out = recommander(&scores, &prefs, &[mk_formation("Licence Data")]);

        // competence = 60*0.6 + 60*0.4 = 60; bonuses 12 → 72 exactly
        assert!((out[0].score - 72.0).abs() < 1e-4, "got {}", out[0].score);
        assert!(out[0].gaps.is_empty());
    }

    #[test]
    fn empty_weight_map_scores_bonuses_only() {
        let scores = mk_scores(&[("Mathématiques", 20.0)]);
        let prefs = mk_prefs(ModeSouhaite::Presentiel);
        let mut f = mk_formation("Sans poids");
        f.poids.clear();
        f.prerequis.clear();
        let out = recommander(&scores, &prefs, &[f]);

        // mode +5, tag +5, distance +2
        assert!((out[0].score - 12.0).abs() < 1e-4, "got {}", out[0].score);
        assert!(out[0].points_forts.is_empty());
    }

    #[test]
    fn mode_mismatch_takes_malus_and_indifferent_takes_neither() {
        let scores = mk_scores(&[("Mathématiques", 17.0), ("Anglais", 12.0)]);

        let mismatched = recommander(
            &scores,
            &mk_prefs(ModeSouhaite::Distanciel),
            &[mk_formation("Licence Data")],
        );
        // competence 75 + tag 5 + distance 2 - mode 3 = 79
        assert!((mismatched[0].score - 79.0).abs() < 1e-4);

        let indifferent = recommander(
            &scores,
            &mk_prefs(ModeSouhaite::Indifferent),
            &[mk_formation("Licence Data")],
        );
        // competence 75 + tag 5 + distance 2 = 82 (no mode bonus, no malus)
        assert!((indifferent[0].score - 82.0).abs() < 1e-4);
    }

    #[test]
    fn distance_above_half_limit_takes_malus() {
        let scores = mk_scores(&[("Mathématiques", 17.0), ("Anglais", 12.0)]);
        let prefs = mk_prefs(ModeSouhaite::Presentiel);
        let mut f = mk_formation("Licence Data");
        f.distance_km = 20.0; // > 30/2 but within the hard limit
        let out = recommander(&scores, &prefs, &[f]);

        // 75 + mode 5 + tag 5 - distance 2 = 83
        assert!((out[0].score - 83.0).abs() < 1e-4, "got {}", out[0].score);
    }

    #[test]
    fn output_is_sorted_descending_and_stable_on_ties() {
        let scores = mk_scores(&[("Mathématiques", 17.0), ("Anglais", 12.0)]);
        let prefs = mk_prefs(ModeSouhaite::Presentiel);

        let strong = mk_formation("Forte");
        let mut weak = mk_formation("Faible");
        weak.prerequis.insert("SVT".to_string(), 15.0);
        let tie_a = mk_formation("Égalité A");
        let tie_b = mk_formation("Égalité B");

        let out = recommander(&scores, &prefs, &[weak, tie_a, strong, tie_b]);
        let names: Vec<&str> = out.iter().map(|r| r.formation.as_str()).collect();
        assert_eq!(names, vec!["Égalité A", "Forte", "Égalité B", "Faible"]);
        for pair in out.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn out_of_range_grades_are_clamped() {
        let scores = mk_scores(&[("Mathématiques", 25.0), ("Anglais", -3.0)]);
        let prefs = mk_prefs(ModeSouhaite::Presentiel);
        let out = recommander(&scores, &prefs, &[mk_formation("Licence Data")]);

        // Mathématiques clamps to 20 (100*0.6=60), Anglais to 0.
        // 60 + 12 bonuses = 72, no penalty (20 >= 12).
        assert!((out[0].score - 72.0).abs() < 1e-4, "got {}", out[0].score);
        assert!(out[0].score <= 100.0 && out[0].score >= 0.0);
    }
}
