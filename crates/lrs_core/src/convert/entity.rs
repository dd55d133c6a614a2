//! Activity <-> entity mapping.
//!
//! # Responsibility
//! - Map xAPI activities (statement object, context activities) to Caliper
//!   entities and back.
//! - Own the localization and extension-key rules shared with group mapping.
//!
//! # Invariants
//! - A language map with one entry yields that entry; otherwise only `en` is
//!   taken, and no value is emitted when `en` is missing.
//! - Rebuilt xAPI extensions only contain absolute IRI keys.

use crate::convert::{non_blank, ConversionError, ConversionResult};
use crate::model::event::{Entity, Extensions};
use crate::model::statement::{LanguageMap, XApiExtensions, XApiObject, XApiObjectDefinition};
use crate::vocab::tables::VocabularyTables;
use iri_string::types::{IriStr, IriString};
use serde_json::Value;

/// Language tag preferred when a language map has several entries.
pub const PREFERRED_LANGUAGE: &str = "en";

/// Maps activities using one shared vocabulary table set.
#[derive(Debug, Clone, Copy)]
pub struct EntityMapper<'t> {
    tables: &'t VocabularyTables,
}

impl<'t> EntityMapper<'t> {
    pub fn new(tables: &'t VocabularyTables) -> Self {
        Self { tables }
    }

    /// Converts an xAPI activity into a Caliper entity.
    pub fn object_from_xapi(&self, activity: &XApiObject) -> Entity {
        let mut entity = Entity::with_id(activity.id.clone());
        if let Some(definition) = activity.definition.as_ref() {
            entity.kind = self.entity_type_from_xapi(definition.kind.as_deref());
            entity.name = pick_localized(definition.name.as_ref());
            entity.description = pick_localized(definition.description.as_ref());
            entity.extensions = stringify_extensions(definition.extensions.as_ref());
        }
        entity
    }

    /// Converts a Caliper entity into an xAPI activity.
    ///
    /// The definition container is always emitted, even when it ends up empty.
    ///
    /// # Errors
    /// - `MalformedIdentifier` when an extension key is not an absolute IRI.
    pub fn object_to_xapi(&self, entity: &Entity) -> ConversionResult<XApiObject> {
        let definition = XApiObjectDefinition {
            kind: entity
                .kind
                .as_deref()
                .map(|kind| self.tables.activity_type_for_entity_type_str(kind).to_string()),
            name: non_blank(entity.name.as_deref()).map(single_localization),
            description: non_blank(entity.description.as_deref()).map(single_localization),
            extensions: parse_extensions(&entity.extensions)?,
        };

        Ok(XApiObject {
            id: entity.id.clone(),
            object_type: None,
            definition: Some(definition),
        })
    }

    /// Maps a raw xAPI activity type, passing unmapped values through.
    pub fn entity_type_from_xapi(&self, activity_type: Option<&str>) -> Option<String> {
        non_blank(activity_type)
            .map(|raw| self.tables.entity_type_for_activity_type_str(raw).to_string())
    }
}

/// Applies the "single value, else English" rule to a language map.
pub fn pick_localized(values: Option<&LanguageMap>) -> Option<String> {
    let values = values?;
    if values.len() == 1 {
        return values.values().next().cloned();
    }
    values.get(PREFERRED_LANGUAGE).cloned()
}

/// Wraps text as a one-entry English language map.
pub fn single_localization(text: &str) -> LanguageMap {
    LanguageMap::from([(PREFERRED_LANGUAGE.to_string(), text.to_string())])
}

/// Flattens xAPI extensions into string keys and string values.
///
/// JSON strings are copied verbatim; other JSON values keep their compact
/// JSON text.
pub fn stringify_extensions(extensions: Option<&XApiExtensions>) -> Extensions {
    extensions
        .into_iter()
        .flatten()
        .map(|(key, value)| (key.as_str().to_string(), stringify_value(value)))
        .collect()
}

/// Rebuilds xAPI extensions from string pairs. Empty input yields `None`.
///
/// # Errors
/// - `MalformedIdentifier` for the first key that is not an absolute IRI.
pub fn parse_extensions(extensions: &Extensions) -> ConversionResult<Option<XApiExtensions>> {
    if extensions.is_empty() {
        return Ok(None);
    }

    let mut parsed = XApiExtensions::new();
    for (key, value) in extensions {
        parsed.insert(parse_extension_key(key)?, Value::String(value.clone()));
    }
    Ok(Some(parsed))
}

/// Validates one extension key as an absolute RFC 3987 IRI.
///
/// The key is kept byte for byte; nothing is normalized or percent-encoded.
///
/// # Errors
/// - `MalformedIdentifier` for relative references and for keys with
///   characters outside the IRI grammar (spaces, `<`, `"`, ...).
pub fn parse_extension_key(key: &str) -> ConversionResult<IriString> {
    IriStr::new(key)
        .map(ToOwned::to_owned)
        .map_err(|err| ConversionError::MalformedIdentifier {
            key: key.to_string(),
            message: err.to_string(),
        })
}

fn stringify_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
