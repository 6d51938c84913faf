// Session
pub use crate::session::{Assertion, Session, NO_PARAMS};
pub use crate::session_builder::SessionBuilder;
pub use crate::fetch::{FetchOptions, ItemQuery};
pub use crate::search::{Search, SearchLimit, SearchResult};
pub use crate::warning::ApiWarning;

// Entities
pub use crate::entity::Entity;
pub use crate::entity_id::{EntityId, EntityType};
pub use crate::item::Item;
pub use crate::property::Property;
pub use crate::statement::Statement;
pub use crate::snak::{Snak, SnakValue};
pub use crate::data_value::DataValue;
pub use crate::data_type::DataType;
pub use crate::language::Language;
pub use crate::sitelink::Sitelink;
pub use crate::error::{MissingEntity, WikibaseError};
