// FICHIER : dtoforge/src/catalog/dto_item.rs

use super::Catalog;
use serde::{Deserialize, Serialize};

/// Les quinze rubriques d'une matrice de définition de DTO.
/// Les codes sont denses (0..=14) et gravés : ils servent d'index de
/// colonne dans les matrices et ne doivent jamais être renumérotés.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum DtoItem {
    PhysicalName = 0,  // Nom physique (classe / table)
    LogicalName = 1,   // Nom logique (libellé métier)
    Description = 2,   // Description libre
    Creator = 3,       // Auteur de la définition
    CreatedAt = 4,     // Date de création
    UpdatedAt = 5,     // Date de mise à jour
    LogicalDelete = 6, // Suppression logique activée
    Layer = 7,         // Couche d'architecture cible
    VariableName = 8,  // Nom de variable du champ
    DataType = 9,      // Type de donnée du champ
    Invariant = 10,    // Champ figé après construction
    InitialValue = 11, // Valeur initiale du champ
    PackageName = 12,  // Paquet cible
    ProjectName = 13,  // Projet d'appartenance
    Version = 14,      // Version de la définition
}

/// Rangées par code croissant (même ordre que la déclaration).
const ALL_ITEMS: [DtoItem; 15] = [
    DtoItem::PhysicalName,
    DtoItem::LogicalName,
    DtoItem::Description,
    DtoItem::Creator,
    DtoItem::CreatedAt,
    DtoItem::UpdatedAt,
    DtoItem::LogicalDelete,
    DtoItem::Layer,
    DtoItem::VariableName,
    DtoItem::DataType,
    DtoItem::Invariant,
    DtoItem::InitialValue,
    DtoItem::PackageName,
    DtoItem::ProjectName,
    DtoItem::Version,
];

impl DtoItem {
    /// Nom technique de la rubrique, identique à sa forme sérialisée.
    pub fn as_str(&self) -> &'static str {
        match self {
            DtoItem::PhysicalName => "physical_name",
            DtoItem::LogicalName => "logical_name",
            DtoItem::Description => "description",
            DtoItem::Creator => "creator",
            DtoItem::CreatedAt => "created_at",
            DtoItem::UpdatedAt => "updated_at",
            DtoItem::LogicalDelete => "logical_delete",
            DtoItem::Layer => "layer",
            DtoItem::VariableName => "variable_name",
            DtoItem::DataType => "data_type",
            DtoItem::Invariant => "invariant",
            DtoItem::InitialValue => "initial_value",
            DtoItem::PackageName => "package_name",
            DtoItem::ProjectName => "project_name",
            DtoItem::Version => "version",
        }
    }
}

impl Catalog for DtoItem {
    const NAME: &'static str = "dto_item";

    fn code(&self) -> i32 {
        *self as i32
    }

    fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(DtoItem::PhysicalName),
            1 => Some(DtoItem::LogicalName),
            2 => Some(DtoItem::Description),
            3 => Some(DtoItem::Creator),
            4 => Some(DtoItem::CreatedAt),
            5 => Some(DtoItem::UpdatedAt),
            6 => Some(DtoItem::LogicalDelete),
            7 => Some(DtoItem::Layer),
            8 => Some(DtoItem::VariableName),
            9 => Some(DtoItem::DataType),
            10 => Some(DtoItem::Invariant),
            11 => Some(DtoItem::InitialValue),
            12 => Some(DtoItem::PackageName),
            13 => Some(DtoItem::ProjectName),
            14 => Some(DtoItem::Version),
            _ => None,
        }
    }

    fn all() -> &'static [Self] {
        &ALL_ITEMS
    }
}

// --- TESTS UNITAIRES ---
