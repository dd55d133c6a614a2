//! Hand-curated lookup tables between Caliper symbols and xAPI IRIs.
//!
//! # Responsibility
//! - Map Caliper actions to xAPI verb IRIs and back.
//! - Map Caliper entity types to xAPI activity-type IRIs and back.
//! - Map Caliper actions to the coarser event type used as event `@type`.
//!
//! # Invariants
//! - Tables are intentionally incomplete; a miss is a normal `None`.
//! - Each bidirectional table is built from an ordered entry list; when two
//!   entries share a symbol or an IRI the later entry wins on both sides.
//! - Built tables expose no mutation.

use crate::vocab::action::Action;
use crate::vocab::entity_type::EntityType;
use crate::vocab::event_type::EventType;
use std::collections::HashMap;
use std::hash::Hash;

/// Verb used by callers that need an xAPI verb for an unmapped action.
pub const DEFAULT_XAPI_VERB: &str = "http://adlnet.gov/expapi/verbs/experienced";

/// Action -> xAPI verb IRI.
///
/// Alternatives for the session verbs exist
/// (`https://w3id.org/xapi/adl/verbs/logged-in`, `.../logged-out`); the
/// brindlewaye IRIs are the ones clients send today.
pub const STANDARD_VERB_ENTRIES: &[(Action, &str)] = &[
    (Action::Abandoned, "https://w3id.org/xapi/adl/verbs/abandoned"),
    (Action::Attached, "http://activitystrea.ms/schema/1.0/attach"),
    (Action::Bookmarked, "http://id.tincanapi.com/verb/bookmarked"),
    (Action::Commented, "http://adlnet.gov/expapi/verbs/commented"),
    (Action::Completed, "http://adlnet.gov/expapi/verbs/completed"),
    (Action::Disliked, "http://activitystrea.ms/schema/1.0/dislike"),
    (Action::Graded, "http://adlnet.gov/expapi/verbs/scored"),
    (Action::Liked, "http://activitystrea.ms/schema/1.0/like"),
    (Action::LoggedIn, "https://brindlewaye.com/xAPITerms/verbs/loggedin/"),
    (Action::LoggedOut, "https://brindlewaye.com/xAPITerms/verbs/loggedout/"),
    (Action::Paused, "http://id.tincanapi.com/verb/paused"),
    (Action::Questioned, "http://adlnet.gov/expapi/verbs/asked"),
    (Action::Replied, "http://adlnet.gov/expapi/verbs/responded"),
    (Action::Resumed, "http://adlnet.gov/expapi/verbs/resumed"),
    (Action::Reviewed, "http://id.tincanapi.com/verb/reviewed"),
    (Action::Searched, "http://activitystrea.ms/schema/1.0/search"),
    (Action::Shared, "http://activitystrea.ms/schema/1.0/share"),
    (Action::Skipped, "http://id.tincanapi.com/verb/skipped"),
    (Action::Started, "http://activitystrea.ms/schema/1.0/start"),
    (Action::Submitted, "http://activitystrea.ms/schema/1.0/submit"),
    (Action::Tagged, "http://activitystrea.ms/schema/1.0/tag"),
    (Action::Viewed, "http://id.tincanapi.com/verb/viewed"),
];

/// Entity type -> xAPI activity-type IRI.
///
/// `DigitalResource` and `MediaObject` share the ADL media IRI; `MediaObject`
/// is listed last and owns it.
pub const STANDARD_ACTIVITY_TYPE_ENTRIES: &[(EntityType, &str)] = &[
    (
        EntityType::Annotation,
        "http://risc-inc.com/annotator/activities/highlight",
    ),
    (
        EntityType::CourseSection,
        "http://adlnet.gov/expapi/activities/course",
    ),
    (
        EntityType::DigitalResource,
        "http://adlnet.gov/expapi/activities/media",
    ),
    (EntityType::Group, "http://activitystrea.ms/schema/1.0/group"),
    (
        EntityType::LearningObjective,
        "http://adlnet.gov/expapi/activities/objective",
    ),
    (EntityType::Person, "http://activitystrea.ms/schema/1.0/person"),
    (
        EntityType::Organization,
        "http://activitystrea.ms/schema/1.0/organization",
    ),
    (
        EntityType::SoftwareApplication,
        "http://activitystrea.ms/schema/1.0/application",
    ),
    (
        EntityType::MediaObject,
        "http://adlnet.gov/expapi/activities/media",
    ),
    (EntityType::WebPage, "http://activitystrea.ms/schema/1.0/page"),
];

/// Action -> event type used for the event `@type`.
pub const STANDARD_EVENT_TYPE_ENTRIES: &[(Action, EventType)] = &[
    (Action::Abandoned, EventType::Assignable),
    (Action::Activated, EventType::Assignable),
    (Action::Attached, EventType::Annotation),
    (Action::Bookmarked, EventType::Annotation),
    (Action::ChangedResolution, EventType::Media),
    (Action::ChangedSize, EventType::Media),
    (Action::ChangedVolume, EventType::Media),
    (Action::Classified, EventType::Annotation),
    (Action::ClosedPopout, EventType::Media),
    (Action::Commented, EventType::Annotation),
    (Action::Completed, EventType::Assignable),
    (Action::Deactivated, EventType::Assignable),
    (Action::Described, EventType::Annotation),
    (Action::Disliked, EventType::Annotation),
    (Action::DisabledClosedCaptioning, EventType::Media),
    (Action::EnabledClosedCaptioning, EventType::Media),
    (Action::Ended, EventType::Media),
    (Action::EnteredFullscreen, EventType::Media),
    (Action::ExitedFullscreen, EventType::Media),
    (Action::ForwardedTo, EventType::Media),
    (Action::Graded, EventType::Outcome),
    (Action::Hid, EventType::Assignable),
    (Action::Highlighted, EventType::Annotation),
    (Action::JumpedTo, EventType::Media),
    (Action::Identified, EventType::Annotation),
    (Action::Liked, EventType::Annotation),
    (Action::Linked, EventType::Annotation),
    (Action::LoggedIn, EventType::Session),
    (Action::LoggedOut, EventType::Session),
    (Action::Muted, EventType::Media),
    (Action::NavigatedTo, EventType::Navigation),
    (Action::OpenedPopout, EventType::Media),
    (Action::Paused, EventType::Media),
    (Action::Ranked, EventType::Annotation),
    (Action::Questioned, EventType::Annotation),
    (Action::Recommended, EventType::Annotation),
    (Action::Replied, EventType::Annotation),
    (Action::Restarted, EventType::Assessment),
    (Action::Resumed, EventType::Media),
    (Action::Reviewed, EventType::Assignable),
    (Action::Rewound, EventType::Media),
    (Action::Searched, EventType::Reading),
    (Action::Shared, EventType::Annotation),
    (Action::Showed, EventType::Assignable),
    (Action::Skipped, EventType::AssessmentItem),
    (Action::Started, EventType::Event),
    (Action::Submitted, EventType::Event),
    (Action::Subscribed, EventType::Annotation),
    (Action::Tagged, EventType::Annotation),
    (Action::TimedOut, EventType::Session),
    (Action::Viewed, EventType::Event),
    (Action::Unmuted, EventType::Media),
];

/// Two one-directional maps built together from the same entry list.
#[derive(Debug, Clone)]
struct SymbolIriTable<S> {
    iri_by_symbol: HashMap<S, &'static str>,
    symbol_by_iri: HashMap<&'static str, S>,
}

impl<S: Copy + Eq + Hash> SymbolIriTable<S> {
    fn from_entries(entries: &[(S, &'static str)]) -> Self {
        let mut iri_by_symbol: HashMap<S, &'static str> = HashMap::new();
        let mut symbol_by_iri: HashMap<&'static str, S> = HashMap::new();

        for &(symbol, iri) in entries {
            if let Some(previous_iri) = iri_by_symbol.remove(&symbol) {
                symbol_by_iri.remove(previous_iri);
            }
            if let Some(previous_symbol) = symbol_by_iri.remove(iri) {
                iri_by_symbol.remove(&previous_symbol);
            }
            iri_by_symbol.insert(symbol, iri);
            symbol_by_iri.insert(iri, symbol);
        }

        Self {
            iri_by_symbol,
            symbol_by_iri,
        }
    }

    fn iri(&self, symbol: S) -> Option<&'static str> {
        self.iri_by_symbol.get(&symbol).copied()
    }

    fn symbol(&self, iri: &str) -> Option<S> {
        self.symbol_by_iri.get(iri).copied()
    }

    fn len(&self) -> usize {
        self.iri_by_symbol.len()
    }
}

/// Immutable vocabulary lookup set shared by every conversion call.
#[derive(Debug, Clone)]
pub struct VocabularyTables {
    verbs: SymbolIriTable<Action>,
    activity_types: SymbolIriTable<EntityType>,
    event_types: HashMap<Action, EventType>,
}

impl VocabularyTables {
    /// Builds tables from explicit entry lists.
    ///
    /// Later entries override earlier ones that share a symbol or an IRI.
    pub fn new(
        verb_entries: &[(Action, &'static str)],
        activity_type_entries: &[(EntityType, &'static str)],
        event_type_entries: &[(Action, EventType)],
    ) -> Self {
        Self {
            verbs: SymbolIriTable::from_entries(verb_entries),
            activity_types: SymbolIriTable::from_entries(activity_type_entries),
            event_types: event_type_entries.iter().copied().collect(),
        }
    }

    /// Builds the curated xAPI <-> Caliper v1 tables.
    pub fn standard() -> Self {
        Self::new(
            STANDARD_VERB_ENTRIES,
            STANDARD_ACTIVITY_TYPE_ENTRIES,
            STANDARD_EVENT_TYPE_ENTRIES,
        )
    }

    pub fn action_for_verb(&self, verb_iri: &str) -> Option<Action> {
        self.verbs.symbol(verb_iri)
    }

    pub fn verb_for_action(&self, action: Action) -> Option<&'static str> {
        self.verbs.iri(action)
    }

    pub fn type_for_activity_type(&self, activity_type_iri: &str) -> Option<EntityType> {
        self.activity_types.symbol(activity_type_iri)
    }

    pub fn activity_type_for_type(&self, entity_type: EntityType) -> Option<&'static str> {
        self.activity_types.iri(entity_type)
    }

    pub fn event_type_for_action(&self, action: Action) -> Option<EventType> {
        self.event_types.get(&action).copied()
    }

    /// Maps an xAPI activity-type IRI to a Caliper entity type IRI.
    ///
    /// Unmapped values pass through unchanged.
    pub fn entity_type_for_activity_type_str<'a>(&self, activity_type_iri: &'a str) -> &'a str {
        match self.type_for_activity_type(activity_type_iri) {
            Some(entity_type) => entity_type.as_str(),
            None => activity_type_iri,
        }
    }

    /// Maps a Caliper entity type IRI to an xAPI activity-type IRI.
    ///
    /// Unknown symbols and symbols without a table entry pass through unchanged.
    pub fn activity_type_for_entity_type_str<'a>(&self, entity_type_iri: &'a str) -> &'a str {
        EntityType::parse(entity_type_iri)
            .and_then(|entity_type| self.activity_type_for_type(entity_type))
            .unwrap_or(entity_type_iri)
    }

    /// Maps a Caliper action IRI to an xAPI verb IRI.
    ///
    /// Falls back to [`DEFAULT_XAPI_VERB`] when the action is unknown or has no
    /// verb entry.
    pub fn verb_for_action_str(&self, action_iri: &str) -> &'static str {
        Action::parse(action_iri)
            .and_then(|action| self.verb_for_action(action))
            .unwrap_or(DEFAULT_XAPI_VERB)
    }

    /// Event type for an xAPI verb, or `None` when the verb is unmapped or its
    /// action has no event type.
    pub fn event_type_for_verb(&self, verb_iri: &str) -> Option<EventType> {
        self.action_for_verb(verb_iri)
            .and_then(|action| self.event_type_for_action(action))
    }

    /// Actions that currently have a verb mapping.
    pub fn mapped_actions(&self) -> Vec<Action> {
        let mut actions: Vec<Action> = self.verbs.iri_by_symbol.keys().copied().collect();
        actions.sort();
        actions
    }

    /// Number of mapped verbs.
    pub fn verb_count(&self) -> usize {
        self.verbs.len()
    }
}
