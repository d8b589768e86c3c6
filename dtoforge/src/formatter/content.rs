// FICHIER : dtoforge/src/formatter/content.rs

use super::{Command, ResourceFormatter};
use crate::model::{ContentMatrix, ContentResource};
use crate::utils::prelude::*;

/// Formateur de contenus : porte une matrice de contenu et, après une
/// exécution réussie, la ressource produite.
///
/// Le moteur de rendu matrice -> ressource n'est pas encore écrit :
/// `format` échoue toujours avec [`AppError::Unimplemented`]. Tout le
/// reste du cycle (validation, portage de la matrice, relecture du
/// résultat) est complet et définitif.
#[derive(Debug)]
pub struct ContentResourceFormatter {
    content_matrix: ContentMatrix,
    content_resource: Option<ContentResource>,
    /// Corrélation des traces d'une même exécution.
    run_id: Uuid,
}

impl ContentResourceFormatter {
    /// Fabrique unique : refuse toute matrice dégénérée avant de construire.
    pub fn try_new(content_matrix: ContentMatrix) -> Result<Self> {
        content_matrix.validate()?;

        let formatter = Self {
            run_id: Uuid::new_v4(),
            content_matrix,
            content_resource: None,
        };
        debug!(
            "🧩 Formateur prêt pour la matrice '{}'",
            formatter.content_matrix.name
        );
        Ok(formatter)
    }

    /// La matrice portée, telle que reçue à la construction.
    pub fn matrix(&self) -> &ContentMatrix {
        &self.content_matrix
    }

    /// La ressource de la dernière exécution réussie, s'il y en a une.
    pub fn resource(&self) -> Option<&ContentResource> {
        self.content_resource.as_ref()
    }
}

impl ResourceFormatter<ContentMatrix, ContentResource> for ContentResourceFormatter {
    fn format(&self, resource_matrix: &ContentMatrix) -> Result<ContentResource> {
        resource_matrix.validate()?;

        // Pas de moteur de rendu : échec explicite, jamais de ressource vide.
        Err(AppError::Unimplemented("rendu de matrice de contenu"))
    }
}

impl Command for ContentResourceFormatter {
    type Output = ContentResource;

    /// Exécution unique : formate la matrice portée, retient la ressource
    /// produite puis la rend. Toute erreur remonte telle quelle, sans
    /// laisser d'état partiel.
    #[instrument(skip(self), fields(run_id = %self.run_id, matrix = %self.content_matrix.name))]
    fn run(&mut self) -> Result<ContentResource> {
        debug!("Formatage de contenu demandé");

        let content_resource = self.format(&self.content_matrix)?;

        self.content_resource = Some(content_resource.clone());
        info!("✅ Ressource '{}' produite", content_resource.name);
        Ok(content_resource)
    }
}

// --- TESTS UNITAIRES ---
