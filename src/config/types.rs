//! Basic types for configuration

use crate::constants::namespaces;
use serde::Deserialize;

/// Namespace prefixes used by lines tiergen builds itself (DTO namespace
/// declarations, aggregate import lists, qualified safe names).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Namespaces {
    #[serde(default = "get_default_entities")]
    pub entities: String,
    #[serde(default = "get_default_dto")]
    pub dto: String,
    #[serde(default = "get_default_repository_contracts")]
    pub repository_contracts: String,
    #[serde(default = "get_default_repository_implementation")]
    pub repository_implementation: String,
    #[serde(default = "get_default_service_contracts")]
    pub service_contracts: String,
    #[serde(default = "get_default_service_implementation")]
    pub service_implementation: String,
}

impl Default for Namespaces {
    fn default() -> Self {
        Self {
            entities: get_default_entities(),
            dto: get_default_dto(),
            repository_contracts: get_default_repository_contracts(),
            repository_implementation: get_default_repository_implementation(),
            service_contracts: get_default_service_contracts(),
            service_implementation: get_default_service_implementation(),
        }
    }
}

fn get_default_entities() -> String {
    namespaces::ENTITIES.to_string()
}

fn get_default_dto() -> String {
    namespaces::DTO.to_string()
}

fn get_default_repository_contracts() -> String {
    namespaces::REPOSITORY_CONTRACTS.to_string()
}

fn get_default_repository_implementation() -> String {
    namespaces::REPOSITORY_IMPLEMENTATION.to_string()
}

fn get_default_service_contracts() -> String {
    namespaces::SERVICE_CONTRACTS.to_string()
}

fn get_default_service_implementation() -> String {
    namespaces::SERVICE_IMPLEMENTATION.to_string()
}
