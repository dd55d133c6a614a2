//! Tenant-scoped event storage contract and in-memory implementation.
//!
//! # Responsibility
//! - Define the paged lookups the statement service relies on.
//! - Provide a process-local store for tests, the CLI and embedding hosts.
//!
//! # Invariants
//! - Every read and write is scoped to one non-blank tenant id.
//! - Event ids are unique per tenant; saving an existing id replaces it.
//! - Pages are ordered by event time descending, then id ascending.
//!
//! # See also
//! - crate::service::statement_service for the consumer of this contract.

use crate::model::event::Event;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::RwLock;

const PAGE_SIZE_DEFAULT: u32 = 20;
const PAGE_SIZE_MAX: u32 = 100;

/// Stable event identifier (the converted statement id).
pub type EventId = String;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for event persistence and query operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    InvalidTenant(String),
    InvalidEvent(String),
    /// A writer panicked while holding the store lock.
    Poisoned,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTenant(message) => write!(f, "invalid tenant: {message}"),
            Self::InvalidEvent(message) => write!(f, "invalid event: {message}"),
            Self::Poisoned => write!(f, "event store lock poisoned"),
        }
    }
}

impl Error for RepoError {}

/// Page selection for list lookups. Pages are zero-based.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    /// Page size. Defaults to 20 and clamps to 100.
    pub size: Option<u32>,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size: Some(size),
        }
    }

    /// Effective page size after normalization.
    pub fn size(&self) -> u32 {
        normalize_page_size(self.size)
    }

    /// Number of matches skipped before this page. Saturates instead of
    /// wrapping for page numbers far past the end.
    pub fn offset(&self) -> usize {
        (self.page as usize).saturating_mul(self.size() as usize)
    }
}

/// One page of results plus the total number of matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total: usize,
}

impl<T> Page<T> {
    /// Number of pages needed to cover `total` matches.
    pub fn total_pages(&self) -> usize {
        if self.size == 0 {
            return 0;
        }
        self.total.div_ceil(self.size as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total: self.total,
        }
    }

    /// Maps every item, failing on the first error.
    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Page<U>, E> {
        Ok(Page {
            items: self.items.into_iter().map(f).collect::<Result<Vec<_>, E>>()?,
            page: self.page,
            size: self.size,
            total: self.total,
        })
    }
}

/// Repository interface for tenant-scoped event storage.
pub trait EventRepository {
    /// Saves one event and returns its id.
    fn save_event(&self, tenant_id: &str, event: &Event) -> RepoResult<EventId>;
    fn find_by_tenant(&self, tenant_id: &str, page: PageRequest) -> RepoResult<Page<Event>>;
    fn find_by_tenant_and_group(
        &self,
        tenant_id: &str,
        group_id: &str,
        page: PageRequest,
    ) -> RepoResult<Page<Event>>;
    fn find_by_tenant_group_and_actor(
        &self,
        tenant_id: &str,
        group_id: &str,
        actor_id: &str,
        page: PageRequest,
    ) -> RepoResult<Page<Event>>;
    fn find_by_tenant_and_actor(
        &self,
        tenant_id: &str,
        actor_id: &str,
        page: PageRequest,
    ) -> RepoResult<Page<Event>>;
    fn find_by_tenant_and_event_id(
        &self,
        tenant_id: &str,
        event_id: &str,
    ) -> RepoResult<Option<Event>>;
}

/// Process-local event store keyed by tenant, then event id.
#[derive(Debug, Default)]
pub struct InMemoryEventRepository {
    tenants: RwLock<HashMap<String, HashMap<EventId, Event>>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of events stored for one tenant.
    pub fn count(&self, tenant_id: &str) -> RepoResult<usize> {
        let tenants = self.tenants.read().map_err(|_| RepoError::Poisoned)?;
        Ok(tenants.get(tenant_id).map_or(0, HashMap::len))
    }

    fn find_page(
        &self,
        tenant_id: &str,
        page: PageRequest,
        filter: impl Fn(&Event) -> bool,
    ) -> RepoResult<Page<Event>> {
        ensure_tenant(tenant_id)?;
        let tenants = self.tenants.read().map_err(|_| RepoError::Poisoned)?;

        let mut matches: Vec<&Event> = tenants
            .get(tenant_id)
            .into_iter()
            .flat_map(HashMap::values)
            .filter(|event| filter(event))
            .collect();
        matches.sort_by(|left, right| {
            right
                .event_time
                .cmp(&left.event_time)
                .then_with(|| left.id.cmp(&right.id))
        });

        let size = page.size();
        Ok(Page {
            total: matches.len(),
            items: matches
                .into_iter()
                .skip(page.offset())
                .take(size as usize)
                .cloned()
                .collect(),
            page: page.page,
            size,
        })
    }
}

impl EventRepository for InMemoryEventRepository {
    fn save_event(&self, tenant_id: &str, event: &Event) -> RepoResult<EventId> {
        ensure_tenant(tenant_id)?;
        if event.id.trim().is_empty() {
            return Err(RepoError::InvalidEvent(
                "event id must not be blank".to_string(),
            ));
        }

        let mut tenants = self.tenants.write().map_err(|_| RepoError::Poisoned)?;
        tenants
            .entry(tenant_id.to_string())
            .or_default()
            .insert(event.id.clone(), event.clone());
        Ok(event.id.clone())
    }

    fn find_by_tenant(&self, tenant_id: &str, page: PageRequest) -> RepoResult<Page<Event>> {
        self.find_page(tenant_id, page, |_| true)
    }

    fn find_by_tenant_and_group(
        &self,
        tenant_id: &str,
        group_id: &str,
        page: PageRequest,
    ) -> RepoResult<Page<Event>> {
        self.find_page(tenant_id, page, |event| event.group_id() == Some(group_id))
    }

    fn find_by_tenant_group_and_actor(
        &self,
        tenant_id: &str,
        group_id: &str,
        actor_id: &str,
        page: PageRequest,
    ) -> RepoResult<Page<Event>> {
        self.find_page(tenant_id, page, |event| {
            event.group_id() == Some(group_id) && event.actor_id() == Some(actor_id)
        })
    }

    fn find_by_tenant_and_actor(
        &self,
        tenant_id: &str,
        actor_id: &str,
        page: PageRequest,
    ) -> RepoResult<Page<Event>> {
        self.find_page(tenant_id, page, |event| event.actor_id() == Some(actor_id))
    }

    fn find_by_tenant_and_event_id(
        &self,
        tenant_id: &str,
        event_id: &str,
    ) -> RepoResult<Option<Event>> {
        ensure_tenant(tenant_id)?;
        let tenants = self.tenants.read().map_err(|_| RepoError::Poisoned)?;
        Ok(tenants
            .get(tenant_id)
            .and_then(|events| events.get(event_id))
            .cloned())
    }
}

/// Normalizes a requested page size.
///
/// `None` and `0` fall back to 20; larger values clamp to 100.
pub fn normalize_page_size(size: Option<u32>) -> u32 {
    match size {
        Some(0) => PAGE_SIZE_DEFAULT,
        Some(value) if value > PAGE_SIZE_MAX => PAGE_SIZE_MAX,
        Some(value) => value,
        None => PAGE_SIZE_DEFAULT,
    }
}

fn ensure_tenant(tenant_id: &str) -> RepoResult<()> {
    if tenant_id.trim().is_empty() {
        return Err(RepoError::InvalidTenant(
            "tenant id must not be blank".to_string(),
        ));
    }
    Ok(())
}
