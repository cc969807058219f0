//! Schema lowering: raw table descriptors into the canonical entity model.
//!
//! Pure structural transformation, not validation: malformed references
//! pass through uninterpreted, and an empty table list yields an empty
//! data-model section rather than an error.

use crate::case;
use crate::definition::model::{
    AppDefinition, ApplicationDescriptor, DataModel, Entity, Property, Relationship, ViewCatalog,
};
use crate::schema::{ColumnDescriptor, ForeignKeyDescriptor, TableDescriptor};

/// Lower an ordered table list into a complete definition document.
///
/// Entities are emitted in input order under a placeholder application
/// block (lowering runs carry no application configuration of their own).
pub fn generate(tables: &[TableDescriptor]) -> AppDefinition {
    tracing::debug!(tables = tables.len(), "lowering schema");
    let entities: Vec<Entity> = tables.iter().map(lower_table).collect();
    let placeholder_schema = entities.iter().find_map(|e| e.schema.clone());
    AppDefinition {
        applications: vec![ApplicationDescriptor::placeholder(placeholder_schema)],
        data_model: DataModel { entities },
        view_catalog: ViewCatalog::default(),
    }
}

fn lower_table(table: &TableDescriptor) -> Entity {
    Entity {
        name: case::singularize(&table.name),
        schema: table.schema.clone(),
        properties: table.columns.iter().map(lower_column).collect(),
        relationships: table.foreign_keys.iter().map(lower_foreign_key).collect(),
    }
}

fn lower_column(column: &ColumnDescriptor) -> Property {
    Property {
        name: column.name.clone(),
        data_type: map_type_token(&column.data_type),
        nullable: column.nullable,
        primary_key: column.primary_key,
        identity: column.identity,
        max_length: column.max_length,
        precision: column.precision,
        scale: column.scale,
        default: column.default.clone(),
    }
}

fn lower_foreign_key(fk: &ForeignKeyDescriptor) -> Relationship {
    Relationship {
        target_entity: case::singularize(&fk.references_table),
        foreign_key: fk.column.clone(),
    }
}

/// Map a raw column type token, case-insensitively, to its semantic tag.
///
/// The lookup is open: an unrecognized token passes through verbatim, so
/// one exotic column type degrades a single property instead of failing
/// the whole run.
pub fn map_type_token(raw: &str) -> String {
    let mapped = match raw.to_lowercase().as_str() {
        "int" | "integer" => "int",
        "bigint" => "long",
        "smallint" => "short",
        "tinyint" => "byte",
        "bit" | "bool" | "boolean" => "bool",
        "decimal" | "numeric" | "money" | "smallmoney" => "decimal",
        "float" => "double",
        "real" => "float",
        "char" | "nchar" | "varchar" | "nvarchar" | "text" | "ntext" => "string",
        "date" | "datetime" | "datetime2" | "smalldatetime" | "datetimeoffset" => "datetime",
        "time" => "time",
        "uniqueidentifier" | "uuid" | "guid" => "guid",
        "binary" | "varbinary" | "image" => "binary",
        _ => return raw.to_string(),
    };
    mapped.to_string()
}
