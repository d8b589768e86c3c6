// FICHIER : dtoforge/src/constructor/strategies.rs

use super::{ConstructorStrategy, Parameter, Process};
use crate::utils::Result;
use heck::ToLowerCamelCase;

/// Stratégie Java : paramètres `final`, affectations `this.x = ...;`.
///
/// Le nom du paramètre est normalisé en lowerCamelCase (convention Java),
/// le type et l'expression sont rendus tels quels.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaConstructorStrategy;

impl JavaConstructorStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl ConstructorStrategy for JavaConstructorStrategy {
    fn to_parameter(&self, parameter: &Parameter) -> Result<String> {
        Ok(format!(
            "final {} {}",
            parameter.type_name,
            parameter.name.to_lower_camel_case()
        ))
    }

    fn to_process(&self, process: &Process) -> Result<String> {
        Ok(format!("this.{} = {};", process.target, process.expression))
    }
}

// --- TESTS UNITAIRES ---
