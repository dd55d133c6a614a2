//! xAPI statement model.
//!
//! # Responsibility
//! - Mirror the subset of the xAPI statement schema the converter reads and
//!   writes.
//!
//! # Invariants
//! - Extension keys are absolute IRIs; a key that does not parse as one is
//!   rejected during deserialization.
//! - Unmapped xAPI fields are ignored on input and never emitted.

use iri_string::types::IriString;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Language tag -> localized text, e.g. `{"en": "Intro to Rust"}`.
pub type LanguageMap = BTreeMap<String, String>;

/// xAPI extension attributes keyed by absolute IRI (RFC 3987), kept verbatim.
pub type XApiExtensions = BTreeMap<IriString, Value>;

/// One xAPI statement (actor, verb, object plus optional result/context).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    /// Statement UUID. Empty when the client did not assign one.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// ISO-8601 timestamp as sent by the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<XApiActor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verb: Option<XApiVerb>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<XApiObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<XApiResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<XApiContext>,
}

/// Agent identified by exactly one inverse functional identifier.
///
/// The schema allows several identifier fields on the wire; the converter
/// reads them in priority order `openid`, `mbox`, `account`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XApiActor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `mailto:` IRI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mbox: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<XApiAccount>,
}

/// Account on an external system (`homePage` + `name`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XApiAccount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_page: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XApiVerb {
    /// Verb IRI, e.g. `http://adlnet.gov/expapi/verbs/completed`.
    pub id: String,
    /// Display labels. Accepted on input, not mapped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<LanguageMap>,
}

impl XApiVerb {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display: None,
        }
    }
}

/// Activity used as statement object, grouping or parent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XApiObject {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<XApiObjectDefinition>,
}

impl XApiObject {
    /// Creates an activity reference that carries only its identifier.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            object_type: None,
            definition: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XApiObjectDefinition {
    /// Activity type IRI. Serialized as `type`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<LanguageMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LanguageMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<XApiExtensions>,
}

/// Statement outcome. Only `extensions` participates in conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XApiResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<XApiExtensions>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XApiContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_activities: Option<XApiContextActivities>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<XApiExtensions>,
}

/// Context activity lists. `category` and `other` are not mapped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XApiContextActivities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Vec<XApiObject>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grouping: Option<Vec<XApiObject>>,
}
