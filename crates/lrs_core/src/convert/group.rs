//! Context activities <-> group mapping.
//!
//! # Responsibility
//! - Rebuild a Caliper group (with at most one parent link) from xAPI
//!   `contextActivities`.
//! - Collapse a Caliper group back into a single xAPI grouping activity.
//!
//! # Invariants
//! - Only the first grouping entry is read; there is no merge policy for
//!   several groupings.
//! - A parent link is attached only when exactly one parent exists.
//! - The reverse direction emits the group id alone: type, name,
//!   description and parent link are dropped.

use crate::convert::entity::{
    parse_extensions, pick_localized, stringify_extensions, EntityMapper,
};
use crate::convert::ConversionResult;
use crate::model::event::{Entity, Extensions, Group};
use crate::model::statement::{XApiContext, XApiContextActivities, XApiObject};

/// Maps xAPI context activities to a Caliper group.
#[derive(Debug, Clone, Copy)]
pub struct ContextGroupMapper<'t> {
    entities: EntityMapper<'t>,
}

impl<'t> ContextGroupMapper<'t> {
    pub fn new(entities: EntityMapper<'t>) -> Self {
        Self { entities }
    }

    /// Builds the group for a statement context, if the context names one.
    ///
    /// Context-level extensions become group extensions.
    pub fn group_from_xapi(&self, context: &XApiContext) -> Option<Group> {
        let activities = context.context_activities.as_ref()?;
        let extensions = stringify_extensions(context.extensions.as_ref());
        let groupings = activities.grouping.as_deref().unwrap_or_default();
        let parents = activities.parent.as_deref().unwrap_or_default();

        if let Some(grouping) = groupings.first() {
            let mut group = self.group_from_activity(grouping, extensions);
            if let [parent] = parents {
                group.sub_organization_of = Some(self.parent_from_xapi(parent));
            }
            return Some(group);
        }

        parents
            .first()
            .map(|parent| self.group_from_activity(parent, extensions))
    }

    /// Collapses a group into a context with one id-only grouping activity.
    ///
    /// # Errors
    /// - `MalformedIdentifier` when a group extension key is not an absolute
    ///   IRI.
    pub fn group_to_xapi(&self, group: &Group) -> ConversionResult<XApiContext> {
        Ok(XApiContext {
            context_activities: Some(XApiContextActivities {
                parent: None,
                grouping: Some(vec![XApiObject::with_id(group.id.clone())]),
            }),
            extensions: parse_extensions(&group.extensions)?,
        })
    }

    fn group_from_activity(&self, activity: &XApiObject, extensions: Extensions) -> Group {
        let mut group = Group::with_id(activity.id.clone());
        if let Some(definition) = activity.definition.as_ref() {
            group.kind = self.entities.entity_type_from_xapi(definition.kind.as_deref());
            group.name = pick_localized(definition.name.as_ref());
            group.description = pick_localized(definition.description.as_ref());
        }
        group.extensions = extensions;
        group
    }

    fn parent_from_xapi(&self, parent: &XApiObject) -> Entity {
        Entity {
            extensions: Extensions::new(),
            ..self.entities.object_from_xapi(parent)
        }
    }
}
