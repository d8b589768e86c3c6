// FICHIER : dtoforge/src/constructor/mod.rs

// =========================================================================
//  CONSTRUCTEURS - Rendu des sous-parties d'un constructeur
// =========================================================================

pub mod context;
pub mod strategies;

pub use context::ConstructorContext;
pub use strategies::JavaConstructorStrategy;

use crate::model::is_valid_identifier;
use crate::utils::data::{Deserialize, Serialize};
use crate::utils::{AppError, Result};

// --- DESCRIPTEURS ---

/// Descripteur d'un paramètre de constructeur, tel que lu dans une matrice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Parameter {
    /// Nom source du paramètre. La stratégie le normalise au rendu.
    pub name: String,

    /// Type déclaré, rendu tel quel.
    #[serde(rename = "type")]
    pub type_name: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }

    /// Refuse les descripteurs dégénérés avant toute délégation.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::InvalidArgument("paramètre sans nom".to_string()));
        }
        if self.type_name.trim().is_empty() {
            return Err(AppError::InvalidArgument(format!(
                "paramètre '{}' sans type",
                self.name
            )));
        }
        Ok(())
    }
}

/// Descripteur d'une étape du corps : l'affectation d'un champ.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Process {
    /// Champ cible de l'affectation. Doit être un identifiant déjà formé.
    pub target: String,

    /// Expression affectée, rendue telle quelle.
    pub expression: String,
}

impl Process {
    pub fn new(target: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            expression: expression.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !is_valid_identifier(&self.target) {
            return Err(AppError::InvalidArgument(format!(
                "cible d'affectation mal formée : '{}'",
                self.target
            )));
        }
        if self.expression.trim().is_empty() {
            return Err(AppError::InvalidArgument(format!(
                "affectation de '{}' sans expression",
                self.target
            )));
        }
        Ok(())
    }
}

// --- LE CONTRAT DE STRATEGIE ---

/// Le Contrat : politique de rendu des sous-parties d'un constructeur.
/// Une stratégie ne reçoit que des descripteurs déjà validés par le
/// contexte ; elle n'a pas à refaire ce travail.
pub trait ConstructorStrategy {
    /// Rend la déclaration textuelle d'un paramètre.
    fn to_parameter(&self, parameter: &Parameter) -> Result<String>;

    /// Rend l'instruction textuelle d'une étape du corps.
    fn to_process(&self, process: &Process) -> Result<String>;
}

// --- TESTS UNITAIRES ---
