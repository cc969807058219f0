//! Canonical application-definition model: the one document shape both the
//! lowering and merge steps produce and every downstream consumer reads.
//!
//! All values are transient, per-run value objects. Key naming is
//! lower-camel-case and follows struct declaration order, which together
//! with stable input ordering makes the serialized document diffable
//! across runs.

use serde::{Deserialize, Serialize};

/// A lowered column: semantic type tag plus the structural facts copied
/// through from the source column, never defaulted or invented.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    #[serde(default)]
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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

/// A lowered foreign key: the singularized target entity and the source
/// column holding the key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub target_entity: String,
    pub foreign_key: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    /// Singular form of the source table name.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<Relationship>,
}

/// Per-environment application metadata. `views` stays absent until the
/// merge first grants the application a view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDescriptor {
    /// Unique case-insensitively across one document.
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default)]
    pub entities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl ApplicationDescriptor {
    /// Placeholder block emitted for zero-application runs so the document
    /// always carries a non-empty application section. Downstream readers
    /// tolerate its presence or absence.
    pub fn placeholder(schema: Option<String>) -> Self {
        ApplicationDescriptor {
            name: "application".to_string(),
            title: "Application".to_string(),
            schema: schema.or_else(|| Some("dbo".to_string())),
            entities: Vec::new(),
            views: None,
            theme: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewDescriptor {
    pub name: String,
    /// Source-file reference the view was declared in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ViewParameter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Property>,
    /// Names of the applications allowed to see this view. Unknown names
    /// are not an error; views may be declared ahead of application
    /// configuration.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applications: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataModel {
    #[serde(default)]
    pub entities: Vec<Entity>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewCatalog {
    #[serde(default)]
    pub views: Vec<ViewDescriptor>,
}

/// Root of the canonical document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppDefinition {
    #[serde(default)]
    pub applications: Vec<ApplicationDescriptor>,
    #[serde(default)]
    pub data_model: DataModel,
    #[serde(default)]
    pub view_catalog: ViewCatalog,
}
