use std::fmt;

use crate::{config::WIKIDATA_CONFIG, Config, WikibaseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    Item,
    Property,
}

impl EntityType {
    /// Returns the type name used by the API, as in the `type` field of an entity.
    pub const fn type_name(&self) -> &str {
        match self {
            EntityType::Item => "item",
            EntityType::Property => "property",
        }
    }

    /// Parses the `type` field of an entity.
    pub fn from_type_name(s: &str) -> Option<Self> {
        match s {
            "item" => Some(EntityType::Item),
            "property" => Some(EntityType::Property),
            _ => None,
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityId {
    Item(String),
    Property(String),
}

impl EntityId {
    /// Returns the ID of the entity.
    pub fn id(&self) -> &str {
        match self {
            EntityId::Item(id) | EntityId::Property(id) => id,
        }
    }

    /// Returns the entity type of the entity.
    pub const fn entity_type(&self) -> EntityType {
        match self {
            EntityId::Item(_) => EntityType::Item,
            EntityId::Property(_) => EntityType::Property,
        }
    }

    /// Creates a new entity ID from a string, using the default Wikidata configuration.
    pub fn new<S: Into<String>>(id: S) -> Result<EntityId, WikibaseError> {
        Self::new_from_config(id, &WIKIDATA_CONFIG)
    }

    /// Creates a new entity ID from a string, using a bespoke configuration.
    pub fn new_from_config<S: Into<String>>(
        id: S,
        config: &Config,
    ) -> Result<EntityId, WikibaseError> {
        let id = id.into();
        if config.is_item_id(&id) {
            Ok(EntityId::Item(id))
        } else if config.is_property_id(&id) {
            Ok(EntityId::Property(id))
        } else {
            Err(WikibaseError::Config(format!("not an entity id: {id}")))
        }
    }

    /// Returns a new entity ID for an item.
    pub fn item<S: Into<String>>(s: S) -> EntityId {
        EntityId::Item(s.into())
    }

    /// Returns a new entity ID for a property.
    pub fn property<S: Into<String>>(s: S) -> EntityId {
        EntityId::Property(s.into())
    }
}

impl From<EntityId> for String {
    fn from(val: EntityId) -> Self {
        match val {
            EntityId::Item(id) | EntityId::Property(id) => id,
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
