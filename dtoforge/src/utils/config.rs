// FICHIER : dtoforge/src/utils/config.rs

use crate::utils::env::{get_optional, get_or, is_enabled};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Variable qui force le mode d'exécution (test / development / production).
pub const ENV_MODE_VAR: &str = "DTOFORGE_ENV_MODE";

/// Configuration du générateur, structurée par niveaux de responsabilité.
/// Pas de singleton global : la bibliothèque construit la valeur et la
/// remet à l'appelant, qui décide de sa durée de vie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratorConfig {
    // --- NIVEAU 1 : EXECUTION ---
    #[serde(default = "default_env_mode")]
    pub env_mode: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Répertoire des journaux JSON. Aucun fichier n'est écrit si absent.
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Console en JSON plutôt qu'en format compact (DTOFORGE_LOG_JSON).
    #[serde(default)]
    pub log_json: bool,

    // --- NIVEAU 2 : METIER ---
    /// Valeurs de repli injectées dans les matrices incomplètes.
    #[serde(default)]
    pub defaults: MatrixDefaults,
}

/// Rubriques de traçabilité communes à toutes les matrices d'un projet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MatrixDefaults {
    pub package_name: Option<String>,
    pub project_name: Option<String>,
    pub version: Option<String>,
}

// --- HELPERS SERDE ---

fn default_env_mode() -> String {
    GeneratorConfig::resolve_env_mode()
}

fn default_log_level() -> String {
    default_level_for(&GeneratorConfig::resolve_env_mode()).to_string()
}

fn default_level_for(mode: &str) -> &'static str {
    match mode {
        "production" => "warn",
        _ => "debug",
    }
}

// --- IMPLÉMENTATION PRINCIPALE ---

impl GeneratorConfig {
    /// Détermine le mode d'exécution effectif.
    /// Priorité : harnais de test > variable d'environnement > profil de build.
    pub fn resolve_env_mode() -> String {
        if cfg!(test) || env::var(ENV_MODE_VAR).as_deref() == Ok("test") {
            "test".to_string()
        } else if let Ok(env_override) = env::var(ENV_MODE_VAR) {
            env_override
        } else if cfg!(debug_assertions) {
            "development".to_string()
        } else {
            "production".to_string()
        }
    }

    /// Construit la configuration depuis l'environnement du processus.
    pub fn from_env() -> Self {
        let env_mode = Self::resolve_env_mode();
        let log_level = get_or("DTOFORGE_LOG", default_level_for(&env_mode));
        let log_dir = get_optional("DTOFORGE_LOG_DIR").map(PathBuf::from);
        let log_json = is_enabled("DTOFORGE_LOG_JSON");

        let defaults = MatrixDefaults {
            package_name: get_optional("DTOFORGE_PACKAGE"),
            project_name: get_optional("DTOFORGE_PROJECT"),
            version: get_optional("DTOFORGE_VERSION"),
        };

        Self {
            env_mode,
            log_level,
            log_dir,
            log_json,
            defaults,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let env_mode = Self::resolve_env_mode();
        let log_level = default_level_for(&env_mode).to_string();
        Self {
            env_mode,
            log_level,
            log_dir: None,
            log_json: false,
            defaults: MatrixDefaults::default(),
        }
    }
}

// --- TESTS UNITAIRES ---
