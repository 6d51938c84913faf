use crate::WikibaseError;
use serde_json::Value;

/// Represents the Gregorian calendar model.
pub const GREGORIAN_CALENDAR: &str = "http://www.wikidata.org/entity/Q1985727";

/// Represents the Julian calendar model.
pub const JULIAN_CALENDAR: &str = "http://www.wikidata.org/entity/Q11184";

/// Represents the precision of a time value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimePrecision {
    BillionYears = 0,
    HundredMillionYears = 1,
    TenMillionYears = 2,
    MillionYears = 3,
    HundredMillennia = 4,
    TenMillennia = 5,
    Millennia = 6,
    Century = 7,
    Decade = 8,
    Year = 9,
    Month = 10,
    Day = 11,
    Hour = 12,
    Minute = 13,
    Second = 14,
}

impl TryFrom<u64> for TimePrecision {
    type Error = &'static str;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => TimePrecision::BillionYears,
            1 => TimePrecision::HundredMillionYears,
            2 => TimePrecision::TenMillionYears,
            3 => TimePrecision::MillionYears,
            4 => TimePrecision::HundredMillennia,
            5 => TimePrecision::TenMillennia,
            6 => TimePrecision::Millennia,
            7 => TimePrecision::Century,
            8 => TimePrecision::Decade,
            9 => TimePrecision::Year,
            10 => TimePrecision::Month,
            11 => TimePrecision::Day,
            12 => TimePrecision::Hour,
            13 => TimePrecision::Minute,
            14 => TimePrecision::Second,
            _ => return Err("Invalid TimePrecision value"),
        })
    }
}

impl From<TimePrecision> for u64 {
    fn from(precision: TimePrecision) -> Self {
        precision as u64
    }
}

/// The `datavalue` of a snak, keyed by its wire `type`.
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    String(String),
    EntityId {
        entity_type: String,
        id: String,
    },
    Time {
        time: String,
        timezone: i64,
        before: u64,
        after: u64,
        precision: TimePrecision,
        calendarmodel: String,
    },
    Quantity {
        amount: String,
        upper_bound: Option<String>,
        lower_bound: Option<String>,
        unit: String,
    },
    GlobeCoordinate {
        latitude: f64,
        longitude: f64,
        altitude: Option<f64>,
        precision: Option<f64>,
        globe: String,
    },
    MonolingualText {
        language: String,
        text: String,
    },
    /// A value type this crate does not model; the payload is kept as-is.
    Unknown {
        value_type: String,
        value: Value,
    },
}

impl DataValue {
    /// Creates a new `DataValue` object from a `datavalue` JSON object.
    pub fn from_json(j: &Value) -> Result<Self, WikibaseError> {
        let value_type = j["type"]
            .as_str()
            .ok_or_else(|| WikibaseError::decode("datavalue.type", j))?;
        let v = &j["value"];
        match value_type {
            "string" => v
                .as_str()
                .map(|s| DataValue::String(s.to_string()))
                .ok_or_else(|| WikibaseError::decode("datavalue.value", j)),
            "wikibase-entityid" => Self::entity_id_from_json(v),
            "time" => Self::time_from_json(v),
            "quantity" => Self::quantity_from_json(v),
            "globecoordinate" => Self::globe_coordinate_from_json(v),
            "monolingualtext" => Self::monolingual_text_from_json(v),
            other => Ok(DataValue::Unknown {
                value_type: other.to_string(),
                value: v.to_owned(),
            }),
        }
    }

    /// Returns the wire `type` of this value.
    pub fn value_type(&self) -> &str {
        match self {
            DataValue::String(_) => "string",
            DataValue::EntityId { .. } => "wikibase-entityid",
            DataValue::Time { .. } => "time",
            DataValue::Quantity { .. } => "quantity",
            DataValue::GlobeCoordinate { .. } => "globecoordinate",
            DataValue::MonolingualText { .. } => "monolingualtext",
            DataValue::Unknown { value_type, .. } => value_type,
        }
    }

    /// Returns the referenced entity id, for entity values.
    pub fn as_entity_id(&self) -> Option<&str> {
        match self {
            DataValue::EntityId { id, .. } => Some(id),
            _ => None,
        }
    }

    /// Returns the text, for string values.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            DataValue::String(s) => Some(s),
            _ => None,
        }
    }

    fn str_field(v: &Value, key: &str) -> Result<String, WikibaseError> {
        v[key]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| WikibaseError::decode(format!("datavalue.value.{key}"), v))
    }

    fn entity_id_from_json(v: &Value) -> Result<Self, WikibaseError> {
        let entity_type = Self::str_field(v, "entity-type")?;
        let id = match v["id"].as_str() {
            Some(id) => id.to_string(),
            // Older serializations only carry the numeric id
            None => {
                let numeric_id = v["numeric-id"]
                    .as_u64()
                    .ok_or_else(|| WikibaseError::decode("datavalue.value.id", v))?;
                match entity_type.as_str() {
                    "item" => format!("Q{numeric_id}"),
                    "property" => format!("P{numeric_id}"),
                    _ => return Err(WikibaseError::decode("datavalue.value.id", v)),
                }
            }
        };
        Ok(DataValue::EntityId { entity_type, id })
    }

    fn time_from_json(v: &Value) -> Result<Self, WikibaseError> {
        let precision = v["precision"]
            .as_u64()
            .and_then(|p| TimePrecision::try_from(p).ok())
            .ok_or_else(|| WikibaseError::decode("datavalue.value.precision", v))?;
        Ok(DataValue::Time {
            time: Self::str_field(v, "time")?,
            timezone: v["timezone"].as_i64().unwrap_or_default(),
            before: v["before"].as_u64().unwrap_or_default(),
            after: v["after"].as_u64().unwrap_or_default(),
            precision,
            calendarmodel: Self::str_field(v, "calendarmodel")?,
        })
    }

    fn quantity_from_json(v: &Value) -> Result<Self, WikibaseError> {
        Ok(DataValue::Quantity {
            amount: Self::str_field(v, "amount")?,
            upper_bound: v["upperBound"].as_str().map(|s| s.to_string()),
            lower_bound: v["lowerBound"].as_str().map(|s| s.to_string()),
            unit: Self::str_field(v, "unit")?,
        })
    }

    fn globe_coordinate_from_json(v: &Value) -> Result<Self, WikibaseError> {
        let latitude = v["latitude"]
            .as_f64()
            .ok_or_else(|| WikibaseError::decode("datavalue.value.latitude", v))?;
        let longitude = v["longitude"]
            .as_f64()
            .ok_or_else(|| WikibaseError::decode("datavalue.value.longitude", v))?;
        Ok(DataValue::GlobeCoordinate {
            latitude,
            longitude,
            altitude: v["altitude"].as_f64(),
            precision: v["precision"].as_f64(),
            globe: Self::str_field(v, "globe")?,
        })
    }

    fn monolingual_text_from_json(v: &Value) -> Result<Self, WikibaseError> {
        Ok(DataValue::MonolingualText {
            language: Self::str_field(v, "language")?,
            text: Self::str_field(v, "text")?,
        })
    }
}
