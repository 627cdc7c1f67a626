//! Ordered classification rules.
//!
//! A [`RuleChain`] is evaluated top to bottom against a lookup key that starts
//! out as the model name. Tagging rules stop the chain; rewriting rules replace
//! the key and let evaluation continue. When nothing tags the key, the caller
//! falls back to the schema catalog with the (possibly rewritten) key.

use crate::constants::tags;
use crate::schema::SchemaTag;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Rule {
    /// Case-insensitive exact name match resolves to a fixed tag.
    Fixed { names: Vec<String>, tag: SchemaTag },
    /// Case-insensitive exact name match appends `suffix` to the lookup key.
    Suffix { names: Vec<String>, suffix: String },
    /// Case-insensitive exact name match replaces the lookup key.
    Rename { names: Vec<String>, to: String },
    /// Case-sensitive substring match resolves to a fixed tag.
    Contains { markers: Vec<String>, tag: SchemaTag },
}

/// What a single rule did to a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    Tag(SchemaTag),
    Rewrite(String),
    NoMatch,
}

/// What the whole chain decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainOutcome {
    /// Rule at `rule` produced `tag`.
    Tagged { tag: SchemaTag, rule: usize },
    /// No rule tagged the key; consult the catalog with `lookup_key`.
    Fallthrough { lookup_key: String },
}

fn matches_name(names: &[String], key: &str) -> bool {
    names.iter().any(|name| name.eq_ignore_ascii_case(key))
}

impl Rule {
    pub fn apply(&self, key: &str) -> RuleOutcome {
        match self {
            Rule::Fixed { names, tag } if matches_name(names, key) => {
                RuleOutcome::Tag(tag.clone())
            }
            Rule::Suffix { names, suffix } if matches_name(names, key) => {
                RuleOutcome::Rewrite(format!("{key}{suffix}"))
            }
            Rule::Rename { names, to } if matches_name(names, key) => {
                RuleOutcome::Rewrite(to.clone())
            }
            Rule::Contains { markers, tag }
                if markers.iter().any(|marker| key.contains(marker.as_str())) =>
            {
                RuleOutcome::Tag(tag.clone())
            }
            _ => RuleOutcome::NoMatch,
        }
    }

    /// Short label used in debug logs.
    pub fn describe(&self) -> String {
        match self {
            Rule::Fixed { names, tag } => format!("fixed [{}] -> {tag}", names.join(", ")),
            Rule::Suffix { names, suffix } => {
                format!("suffix [{}] + '{suffix}'", names.join(", "))
            }
            Rule::Rename { names, to } => format!("rename [{}] -> '{to}'", names.join(", ")),
            Rule::Contains { markers, tag } => {
                format!("contains [{}] -> {tag}", markers.join(", "))
            }
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            Rule::Fixed { names, .. }
            | Rule::Suffix { names, .. }
            | Rule::Rename { names, .. } => names.is_empty(),
            Rule::Contains { markers, .. } => {
                markers.is_empty() || markers.iter().any(|marker| marker.is_empty())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleChain(Vec<Rule>);

impl RuleChain {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self(rules)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.0
    }

    pub fn evaluate(&self, model_name: &str) -> ChainOutcome {
        let mut key = model_name.to_string();
        for (index, rule) in self.0.iter().enumerate() {
            match rule.apply(&key) {
                RuleOutcome::Tag(tag) => {
                    log::debug!("'{model_name}' tagged {tag} by rule #{index} ({})", rule.describe());
                    return ChainOutcome::Tagged { tag, rule: index };
                }
                RuleOutcome::Rewrite(rewritten) => {
                    log::debug!(
                        "'{model_name}' lookup key '{key}' rewritten to '{rewritten}' by rule #{index}"
                    );
                    key = rewritten;
                }
                RuleOutcome::NoMatch => {}
            }
        }
        ChainOutcome::Fallthrough { lookup_key: key }
    }

    /// Returns the index of the first rule with nothing to match against.
    pub fn first_empty_rule(&self) -> Option<usize> {
        self.0.iter().position(Rule::is_empty)
    }
}

impl Default for RuleChain {
    fn default() -> Self {
        Self(default_rules())
    }
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|name| name.to_string()).collect()
}

/// The built-in chain for entities whose catalog name diverges from the model name.
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule::Fixed {
            names: names(&["cnetmedium", "range", "delegate"]),
            tag: SchemaTag::common(),
        },
        Rule::Suffix {
            names: names(&[
                "roomfeature",
                "vouchervalue",
                "ratecodepackage",
                "weekday",
                "removeditem",
            ]),
            suffix: "s".into(),
        },
        Rule::Rename { names: names(&["medium"]), to: "Media".into() },
        Rule::Fixed { names: names(&["registratordetail"]), tag: SchemaTag::new("Pms") },
        Rule::Contains { markers: names(&["Vw", tags::VIEW]), tag: SchemaTag::view() },
    ]
}
