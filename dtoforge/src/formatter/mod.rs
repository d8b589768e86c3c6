// FICHIER : dtoforge/src/formatter/mod.rs

// =========================================================================
//  FORMATEURS - Transformation matrice -> ressource
// =========================================================================

use crate::model::{Resource, ResourceMatrix};
use crate::utils::Result;

pub mod content;

pub use content::ContentResourceFormatter;

/// Le Contrat : transformer une matrice de définition `I` en ressource `R`.
///
/// Un formateur ne lit que la matrice qu'on lui passe : une valeur
/// dégénérée échoue immédiatement, sans résultat partiel.
pub trait ResourceFormatter<I: ResourceMatrix, R: Resource> {
    fn format(&self, resource_matrix: &I) -> Result<R>;
}

/// Le Contrat : point d'exécution unique d'un travail de formatage.
/// Remplace les anciens duos run/execute à drapeau booléen : le succès
/// rend la valeur produite, l'échec rend l'erreur, rien d'autre.
pub trait Command {
    /// Valeur rendue par une exécution réussie.
    type Output;

    fn run(&mut self) -> Result<Self::Output>;
}
