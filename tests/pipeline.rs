//! Document-level tests: lowering output survives serialize/deserialize
//! intact, and the merge consumes a lowering result directly.

use pretty_assertions::assert_eq;

use appdef::{
    definition, document, ApplicationDescriptor, ColumnDescriptor, ForeignKeyDescriptor,
    TableDescriptor, ViewCatalog, ViewDescriptor, ViewParameter,
};

fn column(name: &str, data_type: &str) -> ColumnDescriptor {
    ColumnDescriptor {
        name: name.to_string(),
        data_type: data_type.to_string(),
        nullable: true,
        primary_key: false,
        identity: false,
        max_length: None,
        precision: None,
        scale: None,
        default: None,
    }
}

fn catalog_tables() -> Vec<TableDescriptor> {
    let mut id = column("Id", "int");
    id.nullable = false;
    id.primary_key = true;
    id.identity = true;
    let mut name = column("Name", "nvarchar");
    name.max_length = Some(100);
    let mut price = column("Price", "decimal");
    price.precision = Some(18);
    price.scale = Some(2);
    let mut created = column("CreatedAt", "datetime");
    created.default = Some("GETDATE()".to_string());
    let category_id = column("CategoryId", "int");

    let mut cat_id = column("Id", "int");
    cat_id.nullable = false;
    cat_id.primary_key = true;
    cat_id.identity = true;

    vec![
        TableDescriptor {
            name: "Products".to_string(),
            schema: Some("acme".to_string()),
            columns: vec![id, name, price, created, category_id],
            foreign_keys: vec![ForeignKeyDescriptor {
                column: "CategoryId".to_string(),
                references_table: "Categories".to_string(),
                references_column: "Id".to_string(),
            }],
        },
        TableDescriptor {
            name: "Categories".to_string(),
            schema: Some("tenant1".to_string()),
            columns: vec![cat_id],
            foreign_keys: Vec::new(),
        },
    ]
}

#[test]
fn lowered_document_round_trips_field_for_field() {
    let generated = definition::generate(&catalog_tables());
    let text = document::to_json(&generated).unwrap();
    let reread = document::from_json(&text).unwrap();

    assert_eq!(reread, generated);

    let product = &reread.data_model.entities[0];
    assert_eq!(product.name, "Product");
    assert_eq!(product.schema.as_deref(), Some("acme"));
    assert_eq!(product.properties[1].max_length, Some(100));
    assert_eq!(product.properties[2].precision, Some(18));
    assert_eq!(product.properties[2].scale, Some(2));
    assert_eq!(product.properties[3].default.as_deref(), Some("GETDATE()"));
    assert!(product.properties[0].primary_key);
    assert!(product.properties[0].identity);
    assert_eq!(product.relationships[0].target_entity, "Category");
    assert_eq!(product.relationships[0].foreign_key, "CategoryId");

    let category = &reread.data_model.entities[1];
    assert_eq!(category.schema.as_deref(), Some("tenant1"));
}

#[test]
fn empty_generate_is_parseable_and_never_an_error() {
    let generated = definition::generate(&[]);
    let text = document::to_json(&generated).unwrap();
    let reread = document::from_json(&text).unwrap();

    assert!(reread.data_model.entities.is_empty());
    assert!(!reread.applications.is_empty());
}

#[test]
fn merge_consumes_a_lowering_result() {
    let lowered = document::from_json(&document::to_json(&definition::generate(&catalog_tables())).unwrap()).unwrap();

    let applications = vec![ApplicationDescriptor {
        name: "Admin".to_string(),
        title: "Administration".to_string(),
        schema: Some("acme".to_string()),
        entities: vec!["Product".to_string(), "Category".to_string()],
        views: None,
        theme: Some("dark".to_string()),
    }];
    let view_catalog = ViewCatalog {
        views: vec![ViewDescriptor {
            name: "SalesReportView".to_string(),
            source: Some("views/sales_report.sql".to_string()),
            parameters: vec![ViewParameter {
                name: "startDate".to_string(),
                data_type: "datetime".to_string(),
            }],
            properties: Vec::new(),
            applications: vec!["admin".to_string()],
        }],
    };

    let merged = definition::merge(applications, lowered.data_model, view_catalog);
    let text = document::to_json(&merged).unwrap();
    let reread = document::from_json(&text).unwrap();

    assert_eq!(reread, merged);
    assert_eq!(
        reread.applications[0].views.as_deref(),
        Some(&["SalesReportView".to_string()][..])
    );
    assert_eq!(reread.applications[0].theme.as_deref(), Some("dark"));
    assert_eq!(reread.data_model.entities.len(), 2);
    assert_eq!(reread.view_catalog.views[0].source.as_deref(), Some("views/sales_report.sql"));
    assert_eq!(reread.view_catalog.views[0].parameters[0].name, "startDate");
}

#[test]
fn document_keys_are_lower_camel_case() {
    let text = document::to_json(&definition::generate(&catalog_tables())).unwrap();

    assert!(text.contains("\"dataModel\""));
    assert!(text.contains("\"viewCatalog\""));
    assert!(text.contains("\"maxLength\""));
    assert!(text.contains("\"primaryKey\""));
    assert!(text.contains("\"targetEntity\""));
    assert!(text.contains("\"foreignKey\""));
    assert!(!text.contains("\"data_model\""));
}
