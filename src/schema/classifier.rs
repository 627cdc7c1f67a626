use crate::catalog::SchemaCatalog;
use crate::error::Result;
use crate::schema::{title_case, ChainOutcome, Classification, RuleChain, SchemaTag};

/// Maps model names to schema tags: static rules first, catalog lookup last.
///
/// No results are cached; every call re-evaluates the chain so a run always
/// reflects the current catalog.
pub struct SchemaClassifier<'a> {
    rules: RuleChain,
    catalog: &'a dyn SchemaCatalog,
}

impl<'a> SchemaClassifier<'a> {
    pub fn new(rules: RuleChain, catalog: &'a dyn SchemaCatalog) -> Self {
        Self { rules, catalog }
    }

    pub fn rules(&self) -> &RuleChain {
        &self.rules
    }

    /// Classifies `model_name`.
    ///
    /// # Returns
    /// * `Ok(Classification::Resolved(_))` - a rule or the catalog produced a tag
    /// * `Ok(Classification::Unresolved { .. })` - the catalog has no such table
    /// * `Err(_)` - the catalog could not be queried
    pub fn classify(&self, model_name: &str) -> Result<Classification> {
        match self.rules.evaluate(model_name) {
            ChainOutcome::Tagged { tag, .. } => Ok(Classification::Resolved(tag)),
            ChainOutcome::Fallthrough { lookup_key } => {
                match self.catalog.lookup(&lookup_key)? {
                    Some(schema) => {
                        let tag = SchemaTag::new(title_case(&schema));
                        log::debug!("'{model_name}' resolved to {tag} via catalog key '{lookup_key}'");
                        Ok(Classification::Resolved(tag))
                    }
                    None => Ok(Classification::Unresolved { lookup_key }),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::cell::RefCell;

    /// Records every key it is asked about.
    #[derive(Default)]
    struct RecordingCatalog {
        tables: Vec<(&'static str, &'static str)>,
        calls: RefCell<Vec<String>>,
    }

    impl SchemaCatalog for RecordingCatalog {
        fn lookup(&self, table_name: &str) -> Result<Option<String>> {
            self.calls.borrow_mut().push(table_name.to_string());
            Ok(self
                .tables
                .iter()
                .find(|(table, _)| *table == table_name)
                .map(|(_, schema)| schema.to_string()))
        }
    }

    struct OfflineCatalog;

    impl SchemaCatalog for OfflineCatalog {
        fn lookup(&self, table_name: &str) -> Result<Option<String>> {
            Err(Error::CatalogError { name: table_name.into(), reason: "connection refused".into() })
        }
    }

    #[test]
    fn static_exceptions_never_reach_the_catalog() {
        let catalog = RecordingCatalog::default();
        let classifier = SchemaClassifier::new(RuleChain::default(), &catalog);

        for name in ["cnetmedium", "Range", "delegate", "RegistratorDetail", "VwArrivals", "GuestView"] {
            assert!(classifier.classify(name).unwrap().is_resolved(), "{name}");
        }
        assert!(catalog.calls.borrow().is_empty());
    }

    #[test]
    fn pluralised_key_is_looked_up() {
        let catalog = RecordingCatalog {
            tables: vec![("Weekdays", "common")],
            ..Default::default()
        };
        let classifier = SchemaClassifier::new(RuleChain::default(), &catalog);

        assert_eq!(
            classifier.classify("Weekday").unwrap(),
            Classification::Resolved(SchemaTag::common())
        );
        assert_eq!(*catalog.calls.borrow(), vec!["Weekdays".to_string()]);
    }

    #[test]
    fn catalog_result_is_title_cased() {
        let catalog = RecordingCatalog { tables: vec![("Booking", "SALES")], ..Default::default() };
        let classifier = SchemaClassifier::new(RuleChain::default(), &catalog);
        assert_eq!(
            classifier.classify("Booking").unwrap(),
            Classification::Resolved(SchemaTag::new("Sales"))
        );
    }

    #[test]
    fn missing_table_is_unresolved() {
        let catalog = RecordingCatalog::default();
        let classifier = SchemaClassifier::new(RuleChain::default(), &catalog);
        assert_eq!(
            classifier.classify("Ghost").unwrap(),
            Classification::Unresolved { lookup_key: "Ghost".into() }
        );
    }

    #[test]
    fn classification_is_idempotent() {
        let catalog = RecordingCatalog { tables: vec![("Booking", "sales")], ..Default::default() };
        let classifier = SchemaClassifier::new(RuleChain::default(), &catalog);
        for name in ["Booking", "Range", "Ghost", "Medium"] {
            assert_eq!(classifier.classify(name).unwrap(), classifier.classify(name).unwrap());
        }
    }

    #[test]
    fn catalog_failure_propagates() {
        let classifier = SchemaClassifier::new(RuleChain::default(), &OfflineCatalog);
        assert!(matches!(classifier.classify("Booking"), Err(Error::CatalogError { .. })));
        // Static rules still answer without touching the catalog.
        assert!(classifier.classify("Range").is_ok());
    }
}
