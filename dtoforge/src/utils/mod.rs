// FICHIER : dtoforge/src/utils/mod.rs

// =========================================================================
//  DTOFORGE UTILS - Foundation Layer
// =========================================================================

// --- 1. MODULES INTERNES ---

pub mod config;
pub mod env;
pub mod error;
pub mod logger;

// --- 2. FAÇADES SÉMANTIQUES ---
// Points d'entrée que le code métier (catalogue, formateurs...) DOIT utiliser.

/// **Core Foundation** : Types de base et Erreurs.
pub mod core {
    pub use super::error::{AppError, Result};
    pub use chrono::{DateTime, Utc};
    pub use uuid::Uuid;
}

/// **Data Abstraction** : Manipulation JSON et collections.
pub mod data {
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::{json, Map, Value};
    pub use std::collections::{HashMap, HashSet};
}

/// **Application Context** : Accès Config/Log/Env.
pub mod context {
    pub use super::config::{GeneratorConfig, MatrixDefaults, ENV_MODE_VAR};
    pub use super::env::{get, get_optional, get_or, get_parsed, is_enabled};
    pub use super::logger::init_logging;
}

/// **Le Prélude** : À utiliser via `use crate::utils::prelude::*;`
pub mod prelude {
    pub use super::context::GeneratorConfig;
    pub use super::core::{AppError, Result, Utc, Uuid};
    pub use super::data::{json, Deserialize, Serialize, Value};
    pub use tracing::{debug, error, info, instrument, warn};
}

// =========================================================================
// 3. EXPORTS DIRECTS
// =========================================================================

// --> Config & Erreurs
pub use config::GeneratorConfig;
pub use error::{AppError, Result};
pub use logger::init_logging;
