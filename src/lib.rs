// src/lib.rs
// Public library surface for integration tests (and the front-end service).

pub mod aggregate;
pub mod api;
pub mod bias;
pub mod classify;
pub mod config;
pub mod engine;
pub mod profile;
pub mod recommendation;

// ---- Re-exports for a stable public API ----
pub use crate::aggregate::{aggregate, NoteMatiere};
pub use crate::api::{router, AppState};
pub use crate::bias::biais_affichage;
pub use crate::classify::{classify, to_formation, Regle};
pub use crate::engine::recommander;
pub use crate::profile::{CatalogRow, Formation, Mode, ModeSouhaite, Preferences, ScoresEtudiant};
pub use crate::recommendation::{Niveau, Recommandation};
