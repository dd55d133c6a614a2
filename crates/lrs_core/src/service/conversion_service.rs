//! Statement <-> event conversion service.
//!
//! # Responsibility
//! - Orchestrate actor, entity and group mappers into whole-record
//!   conversions in both directions.
//! - Own timestamp handling and the event `@type` decision.
//!
//! # Invariants
//! - Conversion is synchronous, CPU-only and side-effect free apart from
//!   metadata-only log lines.
//! - Vocabulary tables are injected at construction and never mutated.
//! - `to_xapi` either returns a complete statement or an error; no partial
//!   statement escapes.
//! - The two directions are intentionally asymmetric: the verb IRI is kept
//!   verbatim as action and back, groups lose everything but their id on the
//!   way back, and only `generated` extensions become an xAPI result.

use crate::convert::actor::{resolve_from_xapi, resolve_to_xapi};
use crate::convert::entity::{parse_extensions, stringify_extensions, EntityMapper};
use crate::convert::group::ContextGroupMapper;
use crate::convert::{non_blank, ConversionError, ConversionResult};
use crate::model::event::{Event, Generated, CALIPER_CONTEXT, RESULT_TYPE};
use crate::model::statement::{Statement, XApiResult, XApiVerb};
use crate::vocab::event_type::EventType;
use crate::vocab::tables::VocabularyTables;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use log::{debug, warn};
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

/// Extended-format date-times with a numeric offset, seconds optional.
const OFFSET_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%dT%H:%M%:z",
];
/// Date-times without an offset (or with a `Z` already stripped), read as UTC.
const LOCAL_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Bidirectional xAPI <-> Caliper converter.
///
/// Cheap to clone; clones share the same vocabulary tables.
#[derive(Debug, Clone)]
pub struct ConversionService {
    tables: Arc<VocabularyTables>,
}

impl ConversionService {
    /// Creates a converter over the given tables.
    pub fn new(tables: Arc<VocabularyTables>) -> Self {
        Self { tables }
    }

    /// Creates a converter over the curated standard tables.
    pub fn standard() -> Self {
        Self::new(Arc::new(VocabularyTables::standard()))
    }

    /// Converts an xAPI statement into a Caliper event.
    ///
    /// # Contract
    /// - A blank statement id is replaced by a fresh UUID.
    /// - Missing timestamp defaults to the current UTC time.
    /// - `created_at` is always the current UTC time.
    /// - The verb IRI is copied verbatim into `action`.
    /// - `@type` is the event type mapped from the verb, else `Event`.
    ///
    /// # Errors
    /// - `MalformedTimestamp` when a non-blank timestamp cannot be parsed.
    pub fn from_xapi(&self, statement: &Statement) -> ConversionResult<Event> {
        let started_at = Instant::now();
        let result = self.convert_from_xapi(statement);
        match &result {
            Ok(event) => debug!(
                "event=xapi_to_caliper module=convert status=ok duration_us={} type={} has_actor={} has_object={} has_group={}",
                started_at.elapsed().as_micros(),
                event.kind,
                event.actor.is_some(),
                event.object.is_some(),
                event.group.is_some()
            ),
            Err(err) => warn!(
                "event=xapi_to_caliper module=convert status=error duration_us={} error_code={}",
                started_at.elapsed().as_micros(),
                err.code()
            ),
        }
        result
    }

    /// Converts a Caliper event back into an xAPI statement.
    ///
    /// # Errors
    /// - `MalformedIdentifier` when any object, group or generated extension
    ///   key is not an absolute IRI.
    pub fn to_xapi(&self, event: &Event) -> ConversionResult<Statement> {
        let started_at = Instant::now();
        let result = self.convert_to_xapi(event);
        match &result {
            Ok(statement) => debug!(
                "event=caliper_to_xapi module=convert status=ok duration_us={} has_actor={} has_object={} has_context={}",
                started_at.elapsed().as_micros(),
                statement.actor.is_some(),
                statement.object.is_some(),
                statement.context.is_some()
            ),
            Err(err) => warn!(
                "event=caliper_to_xapi module=convert status=error duration_us={} error_code={}",
                started_at.elapsed().as_micros(),
                err.code()
            ),
        }
        result
    }

    fn convert_from_xapi(&self, statement: &Statement) -> ConversionResult<Event> {
        let entities = EntityMapper::new(&self.tables);
        let groups = ContextGroupMapper::new(entities);

        let event_time = match non_blank(statement.timestamp.as_deref()) {
            Some(raw) => parse_event_time(raw)?,
            None => Utc::now(),
        };
        let id = match non_blank(Some(statement.id.as_str())) {
            Some(id) => id.to_string(),
            None => Uuid::new_v4().to_string(),
        };
        let verb_id = statement.verb.as_ref().map(|verb| verb.id.as_str());

        let mut event = Event::new(id, self.event_type_for_verb(verb_id).as_str(), event_time);
        event.actor = statement.actor.as_ref().map(resolve_from_xapi);
        event.action = verb_id.map(str::to_string);
        event.object = statement
            .object
            .as_ref()
            .map(|object| entities.object_from_xapi(object));
        event.group = statement
            .context
            .as_ref()
            .and_then(|context| groups.group_from_xapi(context));
        event.generated = statement.result.as_ref().map(|result| Generated {
            id: Uuid::new_v4().to_string(),
            context: CALIPER_CONTEXT.to_string(),
            kind: Some(RESULT_TYPE.to_string()),
            name: None,
            description: None,
            extensions: stringify_extensions(result.extensions.as_ref()),
            actor: event.actor.clone(),
        });

        Ok(event)
    }

    fn convert_to_xapi(&self, event: &Event) -> ConversionResult<Statement> {
        let entities = EntityMapper::new(&self.tables);
        let groups = ContextGroupMapper::new(entities);

        let result = match event.generated.as_ref() {
            Some(generated) => parse_extensions(&generated.extensions)?.map(|extensions| {
                XApiResult {
                    extensions: Some(extensions),
                }
            }),
            None => None,
        };

        Ok(Statement {
            id: event.id.clone(),
            timestamp: Some(format_event_time(&event.event_time)),
            actor: event.actor.as_ref().map(resolve_to_xapi),
            verb: non_blank(event.action.as_deref()).map(XApiVerb::new),
            object: event
                .object
                .as_ref()
                .map(|object| entities.object_to_xapi(object))
                .transpose()?,
            result,
            context: event
                .group
                .as_ref()
                .map(|group| groups.group_to_xapi(group))
                .transpose()?,
        })
    }

    fn event_type_for_verb(&self, verb_id: Option<&str>) -> EventType {
        verb_id
            .and_then(|verb| self.tables.event_type_for_verb(verb))
            .unwrap_or(EventType::Event)
    }
}

/// Parses an xAPI ISO-8601 timestamp.
///
/// Accepted, in order:
/// - RFC 3339;
/// - extended date-times with a `+hh:mm` or `+hhmm` offset, seconds optional;
/// - the same without offset, or with `Z`, read as UTC;
/// - a calendar date alone, read as UTC midnight.
///
/// # Errors
/// - `MalformedTimestamp` when no form matches.
pub fn parse_event_time(raw: &str) -> ConversionResult<DateTime<Utc>> {
    let trimmed = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Some(parsed) = OFFSET_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(trimmed, format).ok())
    {
        return Ok(parsed.with_timezone(&Utc));
    }

    let local = trimmed
        .strip_suffix('Z')
        .or_else(|| trimmed.strip_suffix('z'))
        .unwrap_or(trimmed);
    let naive = LOCAL_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(local, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(local, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        });

    naive
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| ConversionError::MalformedTimestamp {
            value: raw.to_string(),
            message: "not an ISO-8601 date or date-time".to_string(),
        })
}

/// Formats an event time as RFC 3339 with millisecond precision and `Z`.
pub fn format_event_time(event_time: &DateTime<Utc>) -> String {
    event_time.to_rfc3339_opts(SecondsFormat::Millis, true)
}
