//! Identifier handling: case-insensitive name matching (applications, views)
//! and singularization of table names into entity names.

/// Case-insensitive identifier equality.
///
/// Every name comparison in the merge goes through this one helper so that
/// matching and dedup agree: a view naming application `admin` attaches to
/// an `ApplicationDescriptor` named `Admin`.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Case-insensitive membership test over a name list.
pub fn contains_ignore_case(names: &[String], name: &str) -> bool {
    names.iter().any(|n| eq_ignore_case(n, name))
}

/// Derive the singular entity name from a table identifier.
///
/// `Products` -> `Product`, `Categories` -> `Category`; already-singular
/// names pass through unchanged, as do names ending in a double `s`
/// (`Address` stays `Address`).
pub fn singularize(name: &str) -> String {
    if let Some(stem) = name.strip_suffix("ies") {
        if !stem.is_empty() {
            let mut out = String::with_capacity(stem.len() + 1);
            out.push_str(stem);
            out.push('y');
            return out;
        }
    }
    if name.len() > 1 && name.ends_with('s') && !name.ends_with("ss") {
        return name[..name.len() - 1].to_string();
    }
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singularizes_plural_table_names() {
        assert_eq!(singularize("Products"), "Product");
        assert_eq!(singularize("Orders"), "Order");
        assert_eq!(singularize("Categories"), "Category");
    }

    #[test]
    fn singular_names_pass_through() {
        assert_eq!(singularize("Category"), "Category");
        assert_eq!(singularize("Person"), "Person");
        assert_eq!(singularize("Address"), "Address");
    }

    #[test]
    fn short_names_are_left_alone() {
        assert_eq!(singularize("s"), "s");
        assert_eq!(singularize(""), "");
    }

    #[test]
    fn name_matching_ignores_case() {
        assert!(eq_ignore_case("admin", "Admin"));
        assert!(eq_ignore_case("REPORTING", "reporting"));
        assert!(!eq_ignore_case("admin", "admins"));
    }

    #[test]
    fn membership_ignores_case() {
        let names = vec!["SalesReportView".to_string()];
        assert!(contains_ignore_case(&names, "salesreportview"));
        assert!(!contains_ignore_case(&names, "SystemHealthView"));
    }
}
