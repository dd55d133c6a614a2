//! Caliper event model.
//!
//! # Responsibility
//! - Mirror the Caliper v1 event/entity shapes produced by the converter.
//!
//! # Invariants
//! - `Event::event_time` and `Event::created_at` are always populated.
//! - Extension values are flattened to strings; keys stay opaque strings until
//!   they are converted back into xAPI IRIs.
//!
//! # See also
//! - crate::convert for the mapping rules between both formats.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// JSON-LD context stamped on every event and entity.
pub const CALIPER_CONTEXT: &str = "http://purl.imsglobal.org/ctx/caliper/v1/Context";

/// `@type` of the result entity generated from an xAPI result.
pub const RESULT_TYPE: &str = "http://purl.imsglobal.org/caliper/v1/Result";

/// Caliper extension attributes (string keys, string values).
pub type Extensions = BTreeMap<String, String>;

fn caliper_context() -> String {
    CALIPER_CONTEXT.to_string()
}

/// One Caliper event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    #[serde(rename = "@context", default = "caliper_context")]
    pub context: String,
    /// Event type IRI, e.g. `http://purl.imsglobal.org/caliper/v1/AssignableEvent`.
    #[serde(rename = "@type")]
    pub kind: String,
    /// When the activity happened.
    pub event_time: DateTime<Utc>,
    /// When this event record was produced.
    #[serde(rename = "dateCreated")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<Actor>,
    /// Action IRI. Holds the xAPI verb IRI verbatim for converted statements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<Entity>,
    /// Never populated by conversion; xAPI has no equivalent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Entity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<Group>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated: Option<Generated>,
}

impl Event {
    /// Creates an event with only the always-present fields set.
    ///
    /// `created_at` is stamped with the current UTC time.
    pub fn new(id: impl Into<String>, kind: impl Into<String>, event_time: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            context: caliper_context(),
            kind: kind.into(),
            event_time,
            created_at: Utc::now(),
            actor: None,
            action: None,
            object: None,
            target: None,
            group: None,
            generated: None,
        }
    }

    /// Group id used by repository lookups.
    pub fn group_id(&self) -> Option<&str> {
        self.group.as_ref().map(|group| group.id.as_str())
    }

    /// Actor id used by repository lookups.
    pub fn actor_id(&self) -> Option<&str> {
        self.actor.as_ref().and_then(|actor| actor.id.as_deref())
    }
}

/// Flat actor record.
///
/// `kind` carries the identity scheme marker (OpenID, mailbox or account) and
/// `id` the scheme-specific identifier. Both are absent when the source actor
/// had no usable identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "@context", default = "caliper_context")]
    pub context: String,
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extensions: Extensions,
}

/// Generic entity: event object, target or sub-organization link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    #[serde(rename = "@context", default = "caliper_context")]
    pub context: String,
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extensions: Extensions,
}

impl Entity {
    /// Creates an entity carrying only its identifier.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            context: caliper_context(),
            kind: None,
            name: None,
            description: None,
            extensions: Extensions::new(),
        }
    }
}

/// Organizational context (course section, organization, ...).
///
/// At most one parent is modeled, and the parent is a plain entity rather than
/// another group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    #[serde(rename = "@context", default = "caliper_context")]
    pub context: String,
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extensions: Extensions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_organization_of: Option<Entity>,
}

impl Group {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            context: caliper_context(),
            kind: None,
            name: None,
            description: None,
            extensions: Extensions::new(),
            sub_organization_of: None,
        }
    }
}

/// Entity generated by the event. Converted xAPI results land here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generated {
    pub id: String,
    #[serde(rename = "@context", default = "caliper_context")]
    pub context: String,
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extensions: Extensions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<Actor>,
}
