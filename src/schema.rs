//! Raw schema descriptors: the table/column/foreign-key input consumed by
//! the lowering step, matching the JSON shape of a definition file.

use serde::{Deserialize, Serialize};

use crate::definition::{Entity, ViewDescriptor};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDescriptor {
    pub name: String,
    /// Raw source type token (e.g. `nvarchar`, `uniqueidentifier`),
    /// lowered case-insensitively into a semantic tag.
    #[serde(rename = "type")]
    pub data_type: String,
    #[serde(default = "default_true")]
    pub nullable: bool,
    #[serde(default)]
    pub primary_key: bool,
    #[serde(default)]
    pub identity: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<u8>,
    /// Default-value expression, preserved verbatim (e.g. `GETDATE()`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

fn default_true() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForeignKeyDescriptor {
    pub column: String,
    pub references_table: String,
    pub references_column: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default)]
    pub columns: Vec<ColumnDescriptor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub foreign_keys: Vec<ForeignKeyDescriptor>,
}

/// Data-model input envelope read by the orchestrator.
///
/// A definition file may carry raw tables, pre-lowered entities, or both,
/// plus an optional view catalog. Unknown keys are ignored so hand-edited
/// input keeps loading.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SchemaInput {
    #[serde(default)]
    pub tables: Vec<TableDescriptor>,
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub views: Vec<ViewDescriptor>,
}
