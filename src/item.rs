use crate::{Entity, EntityType, MissingEntity, WikibaseError};
use serde_json::Value;
use std::ops::Deref;

/// A Wikibase item (`Q` id).
#[derive(Debug, Clone, PartialEq)]
pub struct Item(Entity);

impl Item {
    /// Decodes an item from its entity JSON.
    /// # Errors
    /// Returns a `Decode` error for malformed JSON, or `MissingItem` if the JSON is not an item.
    pub fn from_json(j: &Value) -> Result<Self, WikibaseError> {
        Self::try_from(Entity::from_json(j)?)
    }

    pub fn into_entity(self) -> Entity {
        self.0
    }
}

impl TryFrom<Entity> for Item {
    type Error = WikibaseError;

    fn try_from(entity: Entity) -> Result<Self, Self::Error> {
        match entity.entity_type() {
            EntityType::Item => Ok(Self(entity)),
            _ => Err(WikibaseError::MissingItem(MissingEntity::with_id(entity.id()))),
        }
    }
}

impl Deref for Item {
    type Target = Entity;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
