//! Configuration management for tiergen
//!
//! This module contains the configuration system components:
//! - `types`: namespace settings shared by the generators
//! - `loader`: configuration file loading, defaults and validation

pub mod loader;
pub mod types;


pub use loader::{Config, ConfigV1};
pub use types::Namespaces;
