use crate::{DataType, Entity, EntityType, MissingEntity, WikibaseError};
use serde_json::Value;
use std::ops::Deref;

/// A Wikibase property (`P` id). Unlike an item, a property always has a datatype.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    entity: Entity,
    datatype: DataType,
}

impl Property {
    /// Decodes a property from its entity JSON.
    /// # Errors
    /// Returns a `Decode` error for malformed JSON or a missing `datatype`,
    /// or `MissingProperty` if the JSON is not a property.
    pub fn from_json(j: &Value) -> Result<Self, WikibaseError> {
        Self::try_from(Entity::from_json(j)?)
    }

    /// Returns the datatype of the values of this property.
    pub const fn datatype(&self) -> DataType {
        self.datatype
    }

    pub fn into_entity(self) -> Entity {
        self.entity
    }
}

impl TryFrom<Entity> for Property {
    type Error = WikibaseError;

    fn try_from(entity: Entity) -> Result<Self, Self::Error> {
        if entity.entity_type() != EntityType::Property {
            return Err(WikibaseError::MissingProperty(MissingEntity::with_id(
                entity.id(),
            )));
        }
        let datatype = entity
            .datatype()
            .ok_or_else(|| WikibaseError::decode("datatype", &Value::String(entity.id().into())))?;
        Ok(Self { entity, datatype })
    }
}

impl Deref for Property {
    type Target = Entity;

    fn deref(&self) -> &Self::Target {
        &self.entity
    }
}
