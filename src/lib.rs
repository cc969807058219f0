//! Application-definition synthesis: lowers relational schema metadata
//! into a canonical entity model and merges per-environment application
//! configuration with a view catalog into one deterministic document.

pub mod case;
pub mod definition;
pub mod document;
pub mod error;
pub mod schema;

pub use definition::{
    generate, merge, populate_view_visibility, AppDefinition, ApplicationDescriptor, DataModel,
    Entity, Property, Relationship, ViewCatalog, ViewDescriptor, ViewParameter,
};
pub use error::DefinitionError;
pub use schema::{ColumnDescriptor, ForeignKeyDescriptor, SchemaInput, TableDescriptor};
