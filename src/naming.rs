use crate::constants::namespaces;
use indexmap::IndexMap;
use serde::Deserialize;

/// Reserved-word lists for identifier derivation.
#[derive(Debug, Clone, Deserialize)]
pub struct NamingConfig {
    /// Model names that collide with framework types and must be namespace-qualified.
    #[serde(default = "get_default_qualified")]
    pub qualified: Vec<String>,
    /// Model names whose camel-cased form is a keyword; mapped to a literal replacement.
    #[serde(default = "get_default_parameter_fallbacks")]
    pub parameter_fallbacks: IndexMap<String, String>,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            qualified: get_default_qualified(),
            parameter_fallbacks: get_default_parameter_fallbacks(),
        }
    }
}

fn get_default_qualified() -> Vec<String> {
    ["delegate", "range", "route"].iter().map(|s| s.to_string()).collect()
}

fn get_default_parameter_fallbacks() -> IndexMap<String, String> {
    [("delegate", "delegateObj"), ("range", "rangeObj")]
        .iter()
        .map(|(name, fallback)| (name.to_string(), fallback.to_string()))
        .collect()
}

/// Derives safe identifier variants from a model name. Both derivations are total.
#[derive(Debug, Clone)]
pub struct NamePolicy {
    entities_namespace: String,
    naming: NamingConfig,
}

impl NamePolicy {
    pub fn new<S: Into<String>>(entities_namespace: S, naming: NamingConfig) -> Self {
        Self { entities_namespace: entities_namespace.into(), naming }
    }

    /// The type name to use for the entity, qualified when it collides with a reserved type.
    ///
    /// ```
    /// use tiergen::naming::NamePolicy;
    ///
    /// let policy = NamePolicy::default();
    /// assert_eq!(policy.safe_name("Booking"), "Booking");
    /// assert_eq!(policy.safe_name("Range"), "App.Entities.DataModels.Range");
    /// ```
    pub fn safe_name(&self, model_name: &str) -> String {
        if self.naming.qualified.iter().any(|name| name.eq_ignore_ascii_case(model_name)) {
            format!("{}.{model_name}", self.entities_namespace)
        } else {
            model_name.to_string()
        }
    }

    /// The local-variable name for the entity.
    ///
    /// ```
    /// use tiergen::naming::NamePolicy;
    ///
    /// let policy = NamePolicy::default();
    /// assert_eq!(policy.parameter_name("GuestLedger"), "guestLedger");
    /// assert_eq!(policy.parameter_name("Delegate"), "delegateObj");
    /// ```
    pub fn parameter_name(&self, model_name: &str) -> String {
        let fallback = self
            .naming
            .parameter_fallbacks
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(model_name));
        match fallback {
            Some((_, replacement)) => replacement.clone(),
            None => lower_first(model_name),
        }
    }
}

impl Default for NamePolicy {
    fn default() -> Self {
        Self::new(namespaces::ENTITIES, NamingConfig::default())
    }
}

fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
