use std::collections::HashMap;

use log::debug;

/// Map of infinitives to past roots that can't be derived from the infinitive itself.
#[derive(Debug, Clone)]
pub struct IrregularPastRootCatalog {
    past_roots: HashMap<String, String>,
}

impl Default for IrregularPastRootCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl IrregularPastRootCatalog {
    /// Creates the default catalog of irregular past roots.
    pub fn new() -> IrregularPastRootCatalog {
        IrregularPastRootCatalog {
            past_roots: build_standard_past_roots(),
        }
    }

    /// Creates a catalog with no irregular past roots in it.
    pub fn empty() -> IrregularPastRootCatalog {
        IrregularPastRootCatalog {
            past_roots: HashMap::new(),
        }
    }

    /// Sets the past root of the provided infinitive, replacing any previous one.
    pub fn set<I: Into<String>, P: Into<String>>(&mut self, infinitive: I, past_root: P) {
        let infinitive = infinitive.into();
        let past_root = past_root.into();
        debug!("Registering irregular past root {past_root:?} for {infinitive:?}");
        self.past_roots.insert(infinitive, past_root);
    }

    /// Finds the irregular past root of the provided infinitive, if it has one.
    pub fn get(&self, infinitive: &str) -> Option<&str> {
        self.past_roots.get(infinitive).map(String::as_str)
    }
}

/// Builds the past roots of the standard irregular verbs.
fn build_standard_past_roots() -> HashMap<String, String> {
    [("जानु", "ग")]
        .into_iter()
        .map(|(infinitive, past_root)| (infinitive.to_string(), past_root.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_has_janu() {
        assert_eq!(Some("ग"), IrregularPastRootCatalog::new().get("जानु"));
    }

    #[test]
    fn regular_verbs_are_not_in_standard_catalog() {
        let catalog = IrregularPastRootCatalog::new();
        assert_eq!(None, catalog.get("गर्नु"));
        assert_eq!(None, catalog.get("पकाउनु"));
    }

    #[test]
    fn empty_catalog() {
        assert_eq!(None, IrregularPastRootCatalog::empty().get("जानु"));
    }

    #[test]
    fn set_replaces() {
        let mut catalog = IrregularPastRootCatalog::new();
        catalog.set("आउनु", "आ");
        catalog.set("जानु", "गइ");

        assert_eq!(Some("आ"), catalog.get("आउनु"));
        assert_eq!(Some("गइ"), catalog.get("जानु"));
    }
}
