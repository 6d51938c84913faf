use crate::WikibaseError;
use serde_json::Value;

/// The datatype of a property, as given in the `datatype` field of a property or snak.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Copy)]
pub enum DataType {
    #[default]
    String,
    WikibaseItem,
    WikibaseProperty,
    Url,
    Time,
    GlobeCoordinate,
    Quantity,
    MonolingualText,
    CommonsMedia,
    GeoShape,
    TabularData,
    Math,
    MusicalNotation,
    ExternalId,
    Lexeme,
    Form,
    Sense,
    EntitySchema,
}

impl DataType {
    /// Constructs a new `DataType` object from a (valid) string.
    pub fn new<S: Into<String>>(s: S) -> Result<Self, WikibaseError> {
        let s = s.into();
        Ok(match s.as_str() {
            "wikibase-item" => DataType::WikibaseItem,
            "wikibase-property" => DataType::WikibaseProperty,
            "external-id" => DataType::ExternalId,
            "url" => DataType::Url,
            "commonsMedia" => DataType::CommonsMedia,
            "monolingualtext" => DataType::MonolingualText,
            "quantity" => DataType::Quantity,
            "string" => DataType::String,
            "time" => DataType::Time,
            "globe-coordinate" => DataType::GlobeCoordinate,
            "wikibase-lexeme" => DataType::Lexeme,
            "wikibase-form" => DataType::Form,
            "wikibase-sense" => DataType::Sense,
            "geo-shape" => DataType::GeoShape,
            "tabular-data" => DataType::TabularData,
            "math" => DataType::Math,
            "musical-notation" => DataType::MusicalNotation,
            "entity-schema" => DataType::EntitySchema,
            _ => return Err(WikibaseError::decode("datatype", &Value::String(s.clone()))),
        })
    }

    /// Returns the string representation of the data type.
    pub const fn as_str(&self) -> &str {
        match self {
            DataType::WikibaseItem => "wikibase-item",
            DataType::WikibaseProperty => "wikibase-property",
            DataType::ExternalId => "external-id",
            DataType::Url => "url",
            DataType::CommonsMedia => "commonsMedia",
            DataType::MonolingualText => "monolingualtext",
            DataType::Quantity => "quantity",
            DataType::String => "string",
            DataType::Time => "time",
            DataType::GlobeCoordinate => "globe-coordinate",
            DataType::Lexeme => "wikibase-lexeme",
            DataType::Form => "wikibase-form",
            DataType::Sense => "wikibase-sense",
            DataType::GeoShape => "geo-shape",
            DataType::TabularData => "tabular-data",
            DataType::Math => "math",
            DataType::MusicalNotation => "musical-notation",
            DataType::EntitySchema => "entity-schema",
        }
    }
}
