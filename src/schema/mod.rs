//! Schema classification
//!
//! - `tag`: schema tags and classification results
//! - `rules`: the ordered rule chain checked before any catalog lookup
//! - `classifier`: rule chain plus catalog fallback

pub mod classifier;
pub mod rules;
pub mod tag;

pub use classifier::SchemaClassifier;
pub use rules::{default_rules, ChainOutcome, Rule, RuleChain, RuleOutcome};
pub use tag::{title_case, Classification, SchemaTag};
