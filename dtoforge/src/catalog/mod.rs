// FICHIER : dtoforge/src/catalog/mod.rs

// =========================================================================
//  CATALOGUE - Tables de constantes indexées par code entier
// =========================================================================

pub mod dto_item;

pub use dto_item::DtoItem;

use crate::utils::{AppError, Result};

/// Le Contrat : une table fermée de constantes, chacune portant un code
/// entier stable. Le code est l'identité d'échange (fichiers de mapping,
/// matrices sérialisées) ; le nom n'est qu'un confort de lecture.
pub trait Catalog: Sized + Copy + 'static {
    /// Nom de la table, cité dans les messages d'erreur.
    const NAME: &'static str;

    /// Code entier non négatif de la constante.
    fn code(&self) -> i32;

    /// Recherche par code. `None` si le code n'appartient pas à la table.
    fn from_code(code: i32) -> Option<Self>;

    /// Toutes les constantes, rangées par code croissant.
    fn all() -> &'static [Self];

    /// Recherche stricte : un code hors table est une erreur explicite,
    /// jamais une valeur de repli silencieuse.
    fn require_code(code: i32) -> Result<Self> {
        Self::from_code(code).ok_or(AppError::UnknownCode {
            catalog: Self::NAME,
            code,
        })
    }
}
