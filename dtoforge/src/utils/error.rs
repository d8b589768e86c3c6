// FICHIER : dtoforge/src/utils/error.rs

// --- RE-EXPORTS ANYHOW (pour la flexibilité des couches hautes) ---
// On expose les outils flexibles pour les binaires et les tests
pub use anyhow::{anyhow, Context};
// On renomme le Result de anyhow pour ne pas qu'il écrase le nôtre
pub use anyhow::Result as AnyResult;

// --- GESTION D'ERREUR STRICTE (Cœur du framework) ---

/// Type de résultat standard pour dtoforge.
/// Utilise notre AppError unifiée au lieu d'une erreur générique.
pub type Result<T> = std::result::Result<T, AppError>;

/// Enumération centrale des erreurs du framework.
/// Elle dérive `thiserror::Error` pour faciliter la conversion automatique.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Valeur dégénérée refusée avant toute mutation d'état
    /// (nom vide, identifiant mal formé, descripteur incomplet).
    #[error("Argument invalide : {0}")]
    InvalidArgument(String),

    /// Point d'extension assumé : l'opération est déclarée mais son
    /// algorithme n'est pas encore fourni. Toujours une erreur, jamais
    /// un résultat vide silencieux.
    #[error("Opération non implémentée : {0}")]
    Unimplemented(&'static str),

    /// Code entier absent de la table de constantes visée.
    #[error("Code {code} inconnu dans le catalogue '{catalog}'")]
    UnknownCode { catalog: &'static str, code: i32 },

    #[error("Erreur de configuration : {0}")]
    Config(String),

    #[error("Erreur de sérialisation : {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Erreur Système : {0}")]
    System(#[from] anyhow::Error),
}

// Helpers pour convertir des erreurs string en AppError
// Permet de faire : return Err("Mon erreur".into());
impl From<String> for AppError {
    fn from(s: String) -> Self {
        AppError::System(anyhow::anyhow!(s))
    }
}

// Permet de faire : return Err("Mon erreur literal".into());
impl From<&str> for AppError {
    fn from(s: &str) -> Self {
        AppError::System(anyhow::anyhow!(s.to_string()))
    }
}
