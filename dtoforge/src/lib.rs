pub mod catalog;
pub mod constructor;
pub mod formatter;
pub mod model;
pub mod utils;

// Re-exports de l'API principale, pour un usage direct via dtoforge::...
pub use catalog::{Catalog, DtoItem};
pub use constructor::{
    ConstructorContext, ConstructorStrategy, JavaConstructorStrategy, Parameter, Process,
};
pub use formatter::{Command, ContentResourceFormatter, ResourceFormatter};
pub use model::{Component, ContentMatrix, ContentResource, DtoMatrix, Resource, ResourceMatrix};
pub use utils::{AppError, GeneratorConfig, Result};
