// FICHIER : dtoforge/src/model/matrix.rs

use super::{is_valid_identifier, is_valid_package, ResourceMatrix};
use crate::catalog::DtoItem;
use crate::utils::config::MatrixDefaults;
use crate::utils::core::{DateTime, Utc, Uuid};
use crate::utils::data::{Deserialize, HashMap, Serialize, Value};
use crate::utils::{AppError, Result};

// --- MATRICE DE CONTENU (GENERIQUE) ---

/// Matrice de contenu : description générique d'un élément à produire.
/// Les champs qui ne sont pas prévus ici sont conservés tels quels
/// dans `properties` (relations, attributs techniques...).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ContentMatrix {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// Nature du contenu (ex: "entity", "note", "snippet")
    #[serde(default, rename = "type", alias = "@type")]
    pub kind: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Tous les autres champs de la matrice
    #[serde(flatten)]
    pub properties: HashMap<String, Value>,
}

impl ContentMatrix {
    /// Nouvelle matrice nommée, identifiant tiré au hasard.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Attribut libre de la matrice.
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    pub fn set_property(&mut self, key: impl Into<String>, value: Value) {
        self.properties.insert(key.into(), value);
    }

    /// Refuse les matrices dégénérées avant tout travail de formatage.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::InvalidArgument(
                "matrice de contenu sans nom".to_string(),
            ));
        }
        Ok(())
    }
}

impl ResourceMatrix for ContentMatrix {}

// --- MATRICE DE DEFINITION DE DTO ---

/// Matrice de définition d'un DTO : une valeur par rubrique du catalogue
/// [`DtoItem`]. Seul le nom physique est obligatoire, les autres rubriques
/// absentes restent `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DtoMatrix {
    /// Rubrique 0 du catalogue, la seule exigée.
    pub physical_name: String,

    #[serde(default)]
    pub logical_name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub creator: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub logical_delete: bool,

    #[serde(default)]
    pub layer: Option<String>,

    #[serde(default)]
    pub variable_name: Option<String>,

    #[serde(default)]
    pub data_type: Option<String>,

    #[serde(default)]
    pub invariant: bool,

    #[serde(default)]
    pub initial_value: Option<String>,

    #[serde(default)]
    pub package_name: Option<String>,

    #[serde(default)]
    pub project_name: Option<String>,

    #[serde(default)]
    pub version: Option<String>,
}

impl DtoMatrix {
    pub fn new(physical_name: impl Into<String>) -> Self {
        Self {
            physical_name: physical_name.into(),
            logical_name: None,
            description: None,
            creator: None,
            created_at: None,
            updated_at: None,
            logical_delete: false,
            layer: None,
            variable_name: None,
            data_type: None,
            invariant: false,
            initial_value: None,
            package_name: None,
            project_name: None,
            version: None,
        }
    }

    /// Projection textuelle de la rubrique demandée.
    /// `None` si la rubrique n'est pas renseignée dans cette matrice.
    pub fn value_of(&self, item: DtoItem) -> Option<String> {
        match item {
            DtoItem::PhysicalName => Some(self.physical_name.clone()),
            DtoItem::LogicalName => self.logical_name.clone(),
            DtoItem::Description => self.description.clone(),
            DtoItem::Creator => self.creator.clone(),
            DtoItem::CreatedAt => self.created_at.map(|date| date.to_rfc3339()),
            DtoItem::UpdatedAt => self.updated_at.map(|date| date.to_rfc3339()),
            DtoItem::LogicalDelete => Some(self.logical_delete.to_string()),
            DtoItem::Layer => self.layer.clone(),
            DtoItem::VariableName => self.variable_name.clone(),
            DtoItem::DataType => self.data_type.clone(),
            DtoItem::Invariant => Some(self.invariant.to_string()),
            DtoItem::InitialValue => self.initial_value.clone(),
            DtoItem::PackageName => self.package_name.clone(),
            DtoItem::ProjectName => self.project_name.clone(),
            DtoItem::Version => self.version.clone(),
        }
    }

    /// Complète les rubriques de traçabilité absentes avec les valeurs
    /// de repli de la configuration. Les rubriques déjà renseignées priment.
    pub fn with_defaults(mut self, defaults: &MatrixDefaults) -> Self {
        if self.package_name.is_none() {
            self.package_name = defaults.package_name.clone();
        }
        if self.project_name.is_none() {
            self.project_name = defaults.project_name.clone();
        }
        if self.version.is_none() {
            self.version = defaults.version.clone();
        }
        self
    }

    /// Refuse les définitions dégénérées : nom physique vide, identifiant
    /// de variable mal formé, paquet mal formé.
    pub fn validate(&self) -> Result<()> {
        if self.physical_name.trim().is_empty() {
            return Err(AppError::InvalidArgument("nom physique vide".to_string()));
        }

        if let Some(variable_name) = &self.variable_name {
            if !is_valid_identifier(variable_name) {
                return Err(AppError::InvalidArgument(format!(
                    "nom de variable mal formé : '{}'",
                    variable_name
                )));
            }
        }

        if let Some(package_name) = &self.package_name {
            if !is_valid_package(package_name) {
                return Err(AppError::InvalidArgument(format!(
                    "nom de paquet mal formé : '{}'",
                    package_name
                )));
            }
        }

        Ok(())
    }
}

impl ResourceMatrix for DtoMatrix {}

// --- TESTS UNITAIRES ---
