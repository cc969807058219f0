//! Merge per-environment application metadata with the canonical data
//! model and view catalog, resolving per-application view visibility.
//!
//! Safe to call at every stage of incremental configuration assembly:
//! missing, empty, or unknown input never fails here.

use crate::case;
use crate::definition::model::{AppDefinition, ApplicationDescriptor, DataModel, ViewCatalog};

/// Combine the three inputs into one definition document, resolving view
/// visibility on the way.
pub fn merge(
    mut applications: Vec<ApplicationDescriptor>,
    data_model: DataModel,
    view_catalog: ViewCatalog,
) -> AppDefinition {
    tracing::debug!(
        applications = applications.len(),
        entities = data_model.entities.len(),
        views = view_catalog.views.len(),
        "merging definition"
    );
    populate_view_visibility(&mut applications, &view_catalog);
    AppDefinition {
        applications,
        data_model,
        view_catalog,
    }
}

/// Distribute each view to the applications its allowed-list names.
///
/// Matching is case-insensitive and insertion is idempotent membership:
/// re-running resolution, or a view already granted by hand, never
/// duplicates. Unknown application names are skipped so a catalog can be
/// declared ahead of application configuration. Resulting order follows
/// catalog order, then the order names appear within each view's list.
pub fn populate_view_visibility(
    applications: &mut [ApplicationDescriptor],
    catalog: &ViewCatalog,
) {
    if applications.is_empty() || catalog.views.is_empty() {
        return;
    }
    for view in &catalog.views {
        for requested in &view.applications {
            let matched = applications
                .iter_mut()
                .find(|app| case::eq_ignore_case(&app.name, requested));
            if let Some(app) = matched {
                let views = app.views.get_or_insert_with(Vec::new);
                if !case::contains_ignore_case(views, &view.name) {
                    views.push(view.name.clone());
                }
                debug_assert!(
                    views.iter().filter(|v| case::eq_ignore_case(v, &view.name)).count() == 1,
                    "view visibility insertion must stay idempotent"
                );
            }
        }
    }
}
