// FICHIER : dtoforge/src/constructor/context.rs

use super::{ConstructorStrategy, Parameter, Process};
use crate::utils::Result;

/// Porte-stratégie immuable : la politique de rendu est fixée à la
/// construction et ne change plus pendant toute la vie du contexte.
///
/// C'est lui qui applique la discipline commune (validation des
/// descripteurs) avant de déléguer le rendu à la stratégie.
#[derive(Debug, Clone)]
pub struct ConstructorContext<S: ConstructorStrategy> {
    constructor_strategy: S,
}

impl<S: ConstructorStrategy> ConstructorContext<S> {
    pub fn new(constructor_strategy: S) -> Self {
        Self {
            constructor_strategy,
        }
    }

    /// La stratégie portée.
    pub fn strategy(&self) -> &S {
        &self.constructor_strategy
    }

    /// Valide le descripteur puis délègue le rendu du paramètre.
    pub fn to_parameter(&self, parameter: &Parameter) -> Result<String> {
        parameter.validate()?;
        self.constructor_strategy.to_parameter(parameter)
    }

    /// Valide le descripteur puis délègue le rendu de l'étape.
    pub fn to_process(&self, process: &Process) -> Result<String> {
        process.validate()?;
        self.constructor_strategy.to_process(process)
    }
}

// --- TESTS UNITAIRES ---
