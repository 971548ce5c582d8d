//! services/api/src/error.rs
//!
//! Defines the primary error type for the entire service.

use crate::config::ConfigError;
use crate::seed::SeedError;
use kotoba_core::ports::PortError;

/// The primary error type for the `api` service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents an error that propagated up from one of the store ports.
    #[error("Service Port Error: {0}")]
    Port(#[from] PortError),

    /// Represents a failure to build the initial store contents.
    #[error("Seed Error: {0}")]
    Seed(#[from] SeedError),
}

impl ApiError {
    /// The port error behind this failure, if it came from a store.
    pub fn port(&self) -> Option<&PortError> {
        match self {
            ApiError::Port(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.port().is_some_and(PortError::is_not_found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kotoba_core::ports::EntityKind;

    #[test]
    fn only_store_errors_carry_a_port_error() {
        let missing: ApiError = PortError::not_found(EntityKind::Deck, 7).into();
        assert!(missing.is_not_found());
        assert_eq!(missing.to_string(), "Service Port Error: Deck 7 not found");

        let config: ApiError =
            ConfigError::InvalidValue("SEED_FIXTURES".into(), "'maybe'".into()).into();
        assert!(config.port().is_none());
        assert!(!config.is_not_found());
    }
}
