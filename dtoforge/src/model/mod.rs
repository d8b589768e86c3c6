// FICHIER : dtoforge/src/model/mod.rs

// =========================================================================
//  MODELE - Matrices de définition et ressources produites
// =========================================================================

pub mod matrix;
pub mod resource;

pub use matrix::{ContentMatrix, DtoMatrix};
pub use resource::ContentResource;

use regex::Regex;
use std::sync::OnceLock;

// --- CAPACITES (MARQUEURS) ---

/// Capacité : valeur de définition acceptée en entrée d'un formateur.
/// Marqueur volontairement vide, le contenu réel reste propre à chaque matrice.
pub trait ResourceMatrix {}

/// Capacité : valeur produite par un formateur.
pub trait Resource {}

// --- LE CONTRAT DE RENDU ---

/// Le Contrat : sait se rendre sous forme de ressource textuelle complète.
pub trait Component {
    /// Texte intégral de la ressource, prêt à écrire sur disque.
    fn create_resource(&self) -> String;
}

// --- VALIDATION DES IDENTIFIANTS ---

static IDENT_RE: OnceLock<Regex> = OnceLock::new();

/// Vrai si `s` est un identifiant simple : lettre, '_' ou '$' en tête,
/// alphanumériques ensuite.
pub fn is_valid_identifier(s: &str) -> bool {
    let re = IDENT_RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("Regex d'identifiant invalide")
    });
    re.is_match(s)
}

/// Vrai si `s` est un nom de paquet pointé (ex: `com.acme.dto`).
pub fn is_valid_package(s: &str) -> bool {
    !s.is_empty() && s.split('.').all(is_valid_identifier)
}

// --- TESTS UNITAIRES ---
