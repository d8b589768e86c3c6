// FICHIER : dtoforge/src/model/resource.rs

use super::{Component, Resource};
use crate::utils::data::{Deserialize, Serialize};

/// Ressource de contenu : le texte produit par un formatage, accompagné
/// de sa traçabilité minimale vers la matrice d'origine.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ContentResource {
    /// Nom de la ressource (élément, fichier cible...).
    pub name: String,

    /// Texte complet de la ressource.
    pub content: String,

    /// Identifiant de la matrice dont la ressource est issue.
    #[serde(default)]
    pub source_id: String,
}

impl ContentResource {
    pub fn new(
        name: impl Into<String>,
        content: impl Into<String>,
        source_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            source_id: source_id.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl Resource for ContentResource {}

impl Component for ContentResource {
    /// La ressource EST son propre composant : le texte se rend tel quel,
    /// sans retouche ni enrichissement.
    fn create_resource(&self) -> String {
        self.content.clone()
    }
}
