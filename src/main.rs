//! Orchestrator: reads the application-list and data-model inputs, runs
//! the synthesis pipeline, and writes the definition document.

use std::env;
use std::error::Error;
use std::path::Path;
use std::process::ExitCode;

use appdef::{
    definition, document, ApplicationDescriptor, DataModel, DefinitionError, SchemaInput,
    ViewCatalog,
};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("appdef=info")),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() != 3 {
        eprintln!("usage: appdef <applications-file> <data-model-file> <output-file>");
        return ExitCode::from(1);
    }

    match run(Path::new(&args[0]), Path::new(&args[1]), Path::new(&args[2])) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("appdef: {err}");
            if let Some(cause) = err.source() {
                eprintln!("  caused by: {cause}");
            }
            ExitCode::from(1)
        }
    }
}

fn run(
    applications_path: &Path,
    model_path: &Path,
    output_path: &Path,
) -> Result<(), DefinitionError> {
    let applications: Vec<ApplicationDescriptor> = document::read_input(applications_path)?;
    let input: SchemaInput = document::read_input(model_path)?;

    // Pre-lowered entities win over raw tables; a file carrying only
    // tables goes through schema lowering first.
    let data_model = if input.entities.is_empty() {
        definition::generate(&input.tables).data_model
    } else {
        DataModel {
            entities: input.entities,
        }
    };
    if data_model.entities.is_empty() {
        return Err(DefinitionError::EmptyModel);
    }

    let applications = if applications.is_empty() {
        let schema = data_model.entities.iter().find_map(|e| e.schema.clone());
        vec![ApplicationDescriptor::placeholder(schema)]
    } else {
        applications
    };

    let view_catalog = ViewCatalog { views: input.views };
    let merged = definition::merge(applications, data_model, view_catalog);
    document::write(output_path, &merged)?;
    tracing::info!(path = %output_path.display(), "definition document written");
    Ok(())
}
