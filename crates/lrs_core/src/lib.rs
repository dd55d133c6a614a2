//! Core conversion logic for the learning record store.
//! Translates xAPI statements into Caliper events and back, and stores events
//! per tenant.

pub mod convert;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod vocab;

pub use convert::{ConversionError, ConversionResult};
pub use logging::{
    default_log_level, init_logging, init_logging_from_env, logging_status, LoggingConfig,
};
pub use model::event::{Actor, Entity, Event, Extensions, Generated, Group};
pub use model::statement::{
    Statement, XApiAccount, XApiActor, XApiContext, XApiContextActivities, XApiObject,
    XApiObjectDefinition, XApiResult, XApiVerb,
};
pub use repo::event_repo::{
    EventId, EventRepository, InMemoryEventRepository, Page, PageRequest, RepoError, RepoResult,
};
pub use service::conversion_service::ConversionService;
pub use service::statement_service::{StatementFilter, StatementService, StatementServiceError};
pub use vocab::action::Action;
pub use vocab::entity_type::EntityType;
pub use vocab::event_type::EventType;
pub use vocab::tables::VocabularyTables;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
