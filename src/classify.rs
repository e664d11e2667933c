//! Program classifier: derives a scoring profile from a free-text program
//! name using a fixed, ordered keyword rule table.
//!
//! Matching is case-insensitive substring containment, first match wins in
//! table order (ingénierie, data, commerce, santé, design), with a generalist
//! fallback when nothing matches. This is deliberately coarse: it is a
//! heuristic over catalog display names, not a guarantee of correctness.
//! Word-boundary matching would change classification outcomes and is a
//! behavior change, not a fix.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

use crate::profile::{CatalogRow, Formation, Mode};

/// One classification rule: keyword set plus the prerequisite thresholds and
/// subject weights it assigns. Immutable after startup, not user-editable.
#[derive(Debug, Clone)]
pub struct Regle {
    pub domaine: &'static str,
    pub keywords: &'static [&'static str],
    pub prerequis: BTreeMap<String, f32>,
    pub poids: BTreeMap<String, f32>,
}

impl Regle {
    fn new(
        domaine: &'static str,
        keywords: &'static [&'static str],
        prerequis: &[(&str, f32)],
        poids: &[(&str, f32)],
    ) -> Self {
        let to_map = |pairs: &[(&str, f32)]| {
            pairs
                .iter()
                .map(|(m, v)| (m.to_string(), *v))
                .collect::<BTreeMap<String, f32>>()
        };
        Self {
            domaine,
            keywords,
            prerequis: to_map(prerequis),
            poids: to_map(poids),
        }
    }
}

/// Domain rules, checked in fixed order. An ordered sequence, not a map:
/// order is the tie-break when several keyword sets could match.
static REGLES: Lazy<Vec<Regle>> = Lazy::new(|| {
    vec![
        Regle::new(
            "ingenierie",
            &["ingénieur", "ingenieur", "polytech", "prépa", "prepa", "physique", "science"],
            &[("Mathématiques", 12.0), ("Physique-Chimie", 11.0)],
            &[("Mathématiques", 0.5), ("Physique-Chimie", 0.3), ("Anglais", 0.2)],
        ),
        Regle::new(
            "data",
            &["data", "informatique", "numérique", "numerique", "logiciel", "cyber", "nsi"],
            &[("Mathématiques", 12.0), ("Anglais", 10.0)],
            &[("Mathématiques", 0.6), ("Anglais", 0.4)],
        ),
        Regle::new(
            "commerce",
            &["commerce", "gestion", "management", "marketing", "économie", "economie"],
            &[("Mathématiques", 10.0), ("Anglais", 11.0)],
            &[("Mathématiques", 0.4), ("Anglais", 0.4), ("SES", 0.2)],
        ),
        Regle::new(
            "sante",
            &["santé", "sante", "médecine", "medecine", "infirmier", "biologie", "pharma"],
            &[("SVT", 12.0), ("Physique-Chimie", 10.0)],
            &[("SVT", 0.5), ("Physique-Chimie", 0.3), ("Mathématiques", 0.2)],
        ),
        Regle::new(
            "design",
            &["design", "arts", "art", "architecture", "graphisme", "audiovisuel"],
            &[("Arts", 11.0), ("Français", 10.0)],
            &[("Arts", 0.5), ("Français", 0.3), ("Anglais", 0.2)],
        ),
    ]
});

/// Fallback profile when no keyword matches (or the name is empty/unparsable).
static REGLE_DEFAUT: Lazy<Regle> = Lazy::new(|| {
    Regle::new(
        "general",
        &[],
        &[("Mathématiques", 10.0), ("Anglais", 10.0)],
        &[("Mathématiques", 0.6), ("Anglais", 0.4)],
    )
});

/// First rule whose keyword set substring-matches the lower-cased name;
/// falls back to the generalist rule.
pub fn classify(nom: &str) -> &'static Regle {
    let lower = nom.to_lowercase();
    REGLES
        .iter()
        .find(|regle| regle.keywords.iter().any(|kw| lower.contains(kw)))
        .unwrap_or(&REGLE_DEFAUT)
}

/// Build a scorable [`Formation`] from a raw catalog row.
///
/// The catalog source carries no cost/distance/capacity information, so those
/// fields take uniform placeholder defaults that always pass the engine's
/// budget and distance filters and are never seat-blocked.
pub fn to_formation(row: &CatalogRow) -> Formation {
    let regle = classify(&row.nom);
    Formation {
        nom: row.nom.clone(),
        prerequis: regle.prerequis.clone(),
        poids: regle.poids.clone(),
        cout: 0.0,
        distance_km: 10.0,
        mode: Mode::Presentiel,
        tags: regle.keywords.iter().map(|kw| kw.to_string()).collect(),
        capacite_disponible: 100,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(nom: &str) -> CatalogRow {
        CatalogRow {
            nom: nom.to_string(),
            etablissement: None,
            ville: None,
        }
    }

    #[test]
    fn keyword_match_is_case_insensitive_substring() {
        assert_eq!(classify("Licence Informatique").domaine, "data");
        assert_eq!(classify("BUT SCIENCE DES DONNÉES").domaine, "ingenierie");
        assert_eq!(classify("Master Cybersécurité").domaine, "data");
        assert_eq!(classify("École de Commerce de Lyon").domaine, "commerce");
        assert_eq!(classify("IFSI — Soins Infirmiers").domaine, "sante");
        assert_eq!(classify("DN MADE Design Graphique").domaine, "design");
    }

    #[test]
    fn first_matching_rule_wins_in_table_order() {
        // "ingénieur" (ingenierie) appears before "informatique" (data) in
        // the table, so the engineering rule takes it.
        assert_eq!(
            classify("École d'ingénieurs en informatique").domaine,
            "ingenierie"
        );
    }

    #[test]
    fn unmatched_names_fall_back_to_default_rule() {
        let regle = classify("Licence de Philosophie");
        assert_eq!(regle.domaine, "general");
        assert_eq!(regle.prerequis.get("Mathématiques"), Some(&10.0));
        assert_eq!(regle.prerequis.get("Anglais"), Some(&10.0));
        assert_eq!(regle.poids.get("Mathématiques"), Some(&0.6));
        assert_eq!(regle.poids.get("Anglais"), Some(&0.4));

        // Empty names classify too, they just never match a keyword.
        assert_eq!(classify("").domaine, "general");
    }

    #[test]
    fn catalog_row_gets_placeholder_profile_fields() {
        let f = to_formation(&row("Licence Data"));
        assert_eq!(f.nom, "Licence Data");
        assert_eq!(f.cout, 0.0);
        assert_eq!(f.distance_km, 10.0);
        assert_eq!(f.mode, Mode::Presentiel);
        assert_eq!(f.capacite_disponible, 100);
        // Tags mirror the matched rule's keywords.
        assert!(f.tags.iter().any(|t| t == "data"));
        assert_eq!(f.poids.get("Mathématiques"), Some(&0.6));
    }
}
