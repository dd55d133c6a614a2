//! Statement use-case service.
//!
//! # Responsibility
//! - Accept xAPI statements, convert them to Caliper events and store them.
//! - Serve stored events back as xAPI statements with tenant-scoped paging.
//!
//! # Invariants
//! - The repository only ever sees converted events.
//! - A statement without an id is stored under the id assigned by conversion.
//! - Listing uses the narrowest repository lookup the filter allows.
//!
//! # See also
//! - crate::service::conversion_service for the mapping rules.

use crate::convert::ConversionError;
use crate::model::statement::Statement;
use crate::repo::event_repo::{EventId, EventRepository, Page, PageRequest, RepoError};
use crate::service::conversion_service::ConversionService;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for statement use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementServiceError {
    Conversion(ConversionError),
    Repo(RepoError),
}

impl Display for StatementServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Conversion(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StatementServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Conversion(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<ConversionError> for StatementServiceError {
    fn from(value: ConversionError) -> Self {
        Self::Conversion(value)
    }
}

impl From<RepoError> for StatementServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Optional narrowing for statement listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatementFilter {
    /// Group (course section, organization) id.
    pub group_id: Option<String>,
    /// Actor id as stored on the event (mailbox, OpenID or account name).
    pub actor_id: Option<String>,
}

/// Statement service facade over repository implementations.
pub struct StatementService<R: EventRepository> {
    repo: R,
    converter: ConversionService,
}

impl<R: EventRepository> StatementService<R> {
    /// Creates a service using the provided repository and converter.
    pub fn new(repo: R, converter: ConversionService) -> Self {
        Self { repo, converter }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Converts and stores one statement, returning the stored event id.
    pub fn save_statement(
        &self,
        tenant_id: &str,
        statement: &Statement,
    ) -> Result<EventId, StatementServiceError> {
        let event = self.converter.from_xapi(statement)?;
        let event_id = self.repo.save_event(tenant_id, &event)?;
        info!(
            "event=statement_save module=service status=ok has_group={} has_actor={}",
            event.group.is_some(),
            event.actor.is_some()
        );
        Ok(event_id)
    }

    /// Gets one statement by id.
    pub fn get_statement(
        &self,
        tenant_id: &str,
        statement_id: &str,
    ) -> Result<Option<Statement>, StatementServiceError> {
        let event = self.repo.find_by_tenant_and_event_id(tenant_id, statement_id)?;
        Ok(event
            .map(|event| self.converter.to_xapi(&event))
            .transpose()?)
    }

    /// Lists statements, newest first.
    pub fn list_statements(
        &self,
        tenant_id: &str,
        filter: &StatementFilter,
        page: PageRequest,
    ) -> Result<Page<Statement>, StatementServiceError> {
        let group_id = filter.group_id.as_deref();
        let actor_id = filter.actor_id.as_deref();
        let events = match (group_id, actor_id) {
            (Some(group_id), Some(actor_id)) => {
                self.repo
                    .find_by_tenant_group_and_actor(tenant_id, group_id, actor_id, page)?
            }
            (Some(group_id), None) => self.repo.find_by_tenant_and_group(tenant_id, group_id, page)?,
            (None, Some(actor_id)) => self.repo.find_by_tenant_and_actor(tenant_id, actor_id, page)?,
            (None, None) => self.repo.find_by_tenant(tenant_id, page)?,
        };

        Ok(events.try_map(|event| self.converter.to_xapi(&event))?)
    }
}

#[cfg(test)]
mod tests {
    use super::{StatementFilter, StatementService, StatementServiceError};
    use crate::model::statement::{Statement, XApiActor, XApiVerb};
    use crate::repo::event_repo::{InMemoryEventRepository, PageRequest, RepoError};
    use crate::service::conversion_service::ConversionService;

    fn service() -> StatementService<InMemoryEventRepository> {
        StatementService::new(InMemoryEventRepository::new(), ConversionService::standard())
    }

    #[test]
    fn save_assigns_id_to_anonymous_statement() {
        let service = service();
        let statement = Statement {
            verb: Some(XApiVerb::new("http://adlnet.gov/expapi/verbs/completed")),
            ..Statement::default()
        };

        let id = service.save_statement("tenant-a", &statement).expect("save");
        assert!(!id.is_empty());
        let loaded = service
            .get_statement("tenant-a", &id)
            .expect("get")
            .expect("statement exists");
        assert_eq!(loaded.id, id);
    }

    #[test]
    fn blank_tenant_is_rejected() {
        let service = service();
        let err = service
            .save_statement(" ", &Statement::default())
            .expect_err("blank tenant must fail");
        assert!(matches!(err, StatementServiceError::Repo(RepoError::InvalidTenant(_))));
    }

    #[test]
    fn actor_filter_uses_stored_actor_id() {
        let service = service();
        for (id, mbox) in [("s-1", "mailto:a@example.com"), ("s-2", "mailto:b@example.com")] {
            let statement = Statement {
                id: id.to_string(),
                actor: Some(XApiActor {
                    mbox: Some(mbox.to_string()),
                    ..XApiActor::default()
                }),
                ..Statement::default()
            };
            service.save_statement("tenant-a", &statement).expect("save");
        }

        let filter = StatementFilter {
            actor_id: Some("mailto:b@example.com".to_string()),
            ..StatementFilter::default()
        };
        let page = service
            .list_statements("tenant-a", &filter, PageRequest::default())
            .expect("list");
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id, "s-2");
    }
}
