use indexmap::IndexMap;
use std::fmt::Display;

/// The fixed placeholder vocabulary templates may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Placeholder {
    ModelName,
    Schema,
    SafeName,
    ParameterName,
    Imports,
    Declarations,
    Initializations,
    Instantiations,
}

impl Placeholder {
    pub const ALL: [Placeholder; 8] = [
        Placeholder::ModelName,
        Placeholder::Schema,
        Placeholder::SafeName,
        Placeholder::ParameterName,
        Placeholder::Imports,
        Placeholder::Declarations,
        Placeholder::Initializations,
        Placeholder::Instantiations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Placeholder::ModelName => "model_name",
            Placeholder::Schema => "schema",
            Placeholder::SafeName => "safe_name",
            Placeholder::ParameterName => "parameter_name",
            Placeholder::Imports => "imports",
            Placeholder::Declarations => "declarations",
            Placeholder::Initializations => "initializations",
            Placeholder::Instantiations => "instantiations",
        }
    }
}

impl Display for Placeholder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values for one rendered file, produced fresh per (model, artifact) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings(IndexMap<Placeholder, String>);

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind<S: Into<String>>(mut self, placeholder: Placeholder, value: S) -> Self {
        self.insert(placeholder, value);
        self
    }

    pub fn insert<S: Into<String>>(&mut self, placeholder: Placeholder, value: S) {
        self.0.insert(placeholder, value.into());
    }

    pub fn get(&self, placeholder: Placeholder) -> Option<&str> {
        self.0.get(&placeholder).map(String::as_str)
    }

    /// Whether a template variable name has a value.
    pub fn is_bound(&self, name: &str) -> bool {
        self.0.keys().any(|placeholder| placeholder.as_str() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Placeholder, &String)> {
        self.0.iter()
    }

    pub fn to_context(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .0
            .iter()
            .map(|(placeholder, value)| {
                (placeholder.as_str().to_string(), serde_json::Value::String(value.clone()))
            })
            .collect();
        serde_json::Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_bind_overwrites_value() {
        let bindings = Bindings::new()
            .bind(Placeholder::ModelName, "Booking")
            .bind(Placeholder::ModelName, "Invoice");
        assert_eq!(bindings.get(Placeholder::ModelName), Some("Invoice"));
    }

    #[test]
    fn context_uses_placeholder_names() {
        let bindings = Bindings::new()
            .bind(Placeholder::Schema, "Sales")
            .bind(Placeholder::SafeName, "Booking");
        assert_eq!(
            bindings.to_context(),
            serde_json::json!({"schema": "Sales", "safe_name": "Booking"})
        );
        assert!(bindings.is_bound("schema"));
        assert!(!bindings.is_bound("model_name"));
    }

    #[test]
    fn vocabulary_names_are_unique() {
        let mut names: Vec<_> = Placeholder::ALL.iter().map(Placeholder::as_str).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Placeholder::ALL.len());
    }
}
