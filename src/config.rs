//! Runtime defaults for `Preferences`, loaded from a small TOML file.
//!
//! Used by the catalog endpoint when a request carries no preferences. The
//! file is optional: a missing file falls back to built-in defaults, a
//! malformed one is an error (fail fast at startup rather than scoring with
//! half-parsed constraints).

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::profile::{ModeSouhaite, Preferences};

pub const DEFAULT_CONFIG_PATH: &str = "config/defaults.toml";
pub const ENV_CONFIG_PATH: &str = "CAMPUS_MATCH_CONFIG_PATH";

#[derive(Debug, Deserialize)]
struct ConfigRoot {
    preferences: Preferences,
}

/// Built-in fallback: generous budget/distance, no mode constraint. These
/// neutralize the hard filters for catalog rows, which carry placeholder
/// cost/distance anyway.
pub fn builtin_defaults() -> Preferences {
    Preferences {
        budget_max: 10_000.0,
        distance_max_km: 50.0,
        mode_souhaite: ModeSouhaite::Indifferent,
        localisation: None,
        tags_interets: Vec::new(),
    }
}

/// Parse default preferences from a TOML string.
pub fn from_toml_str(toml_str: &str) -> Result<Preferences> {
    let root: ConfigRoot = toml::from_str(toml_str).context("invalid defaults config")?;
    Ok(root.preferences)
}

/// Load default preferences. Path resolution: `CAMPUS_MATCH_CONFIG_PATH`,
/// else `config/defaults.toml`; missing file → built-in defaults.
pub fn load_default_preferences() -> Result<Preferences> {
    let path = std::env::var(ENV_CONFIG_PATH)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

    match fs::read_to_string(&path) {
        Ok(content) => {
            let prefs = from_toml_str(&content)
                .with_context(|| format!("failed to parse {}", path.display()))?;
            info!(path = %path.display(), "loaded default preferences");
            Ok(prefs)
        }
        Err(_) => {
            info!(path = %path.display(), "no defaults config, using built-ins");
            Ok(builtin_defaults())
        }
    }
}
