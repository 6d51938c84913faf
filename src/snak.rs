use crate::{DataType, DataValue, WikibaseError};
use derive_where::derive_where;
use serde_json::Value;

/// The value part of a snak.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SnakValue {
    Value(DataValue),
    SomeValue,
    #[default]
    NoValue,
}

impl SnakValue {
    /// Returns the data value, if there is one.
    pub const fn data_value(&self) -> Option<&DataValue> {
        match self {
            SnakValue::Value(dv) => Some(dv),
            _ => None,
        }
    }
}

/// Implement the From trait for `DataValue` to `SnakValue`, for convenience assignments.
impl From<DataValue> for SnakValue {
    fn from(dv: DataValue) -> Self {
        SnakValue::Value(dv)
    }
}

/// A property/value pair: the main part of a statement, a qualifier, or a part of a reference.
/// The property is referenced by id only.
#[derive_where(PartialEq)]
#[derive(Debug, Clone, Default)]
pub struct Snak {
    property: String,
    datatype: Option<DataType>,
    value: SnakValue,
    #[derive_where(skip)]
    hash: Option<String>,
}

impl Snak {
    pub fn new<S: Into<String>>(property: S, datatype: Option<DataType>, value: SnakValue) -> Self {
        Self {
            property: property.into(),
            datatype,
            value,
            hash: None,
        }
    }

    /// Creates a new `Snak` object from a JSON object.
    /// # Errors
    /// Returns an error if the JSON object does not contain the required fields.
    pub fn from_json(j: &Value) -> Result<Self, WikibaseError> {
        let property = j["property"]
            .as_str()
            .ok_or_else(|| WikibaseError::decode("property", j))?
            .to_string();
        // Unknown datatypes are tolerated on snaks; the value still decodes by its own type
        let datatype = j["datatype"].as_str().and_then(|s| DataType::new(s).ok());
        let snaktype = j["snaktype"]
            .as_str()
            .ok_or_else(|| WikibaseError::decode("snaktype", j))?;
        let value = match snaktype {
            "value" => SnakValue::Value(DataValue::from_json(&j["datavalue"])?),
            "somevalue" => SnakValue::SomeValue,
            "novalue" => SnakValue::NoValue,
            _ => return Err(WikibaseError::decode("snaktype", j)),
        };
        Ok(Self {
            property,
            datatype,
            value,
            hash: j["hash"].as_str().map(|s| s.to_string()),
        })
    }

    /// Decodes a `{"P1": [snak, ...], ...}` map, ordered by `order` where given.
    pub(crate) fn list_from_json(j: &Value, order: &Value) -> Result<Vec<Self>, WikibaseError> {
        let map = match j {
            Value::Object(map) => map,
            Value::Null => return Ok(vec![]),
            Value::Array(a) if a.is_empty() => return Ok(vec![]),
            _ => return Err(WikibaseError::decode("snaks", j)),
        };
        let mut keys: Vec<&str> = order
            .as_array()
            .map(|a| a.iter().filter_map(|k| k.as_str()).collect())
            .unwrap_or_default();
        for key in map.keys() {
            if !keys.contains(&key.as_str()) {
                keys.push(key.as_str());
            }
        }
        let mut ret = vec![];
        for key in keys {
            let Some(snaks) = map.get(key) else { continue };
            let snaks = snaks
                .as_array()
                .ok_or_else(|| WikibaseError::decode(key, j))?;
            for snak in snaks {
                ret.push(Self::from_json(snak)?);
            }
        }
        Ok(ret)
    }

    /// Returns the property ID.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Returns the `DataType` of the property, if known.
    pub const fn datatype(&self) -> Option<DataType> {
        self.datatype
    }

    pub const fn value(&self) -> &SnakValue {
        &self.value
    }

    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_snak_from_json_value() {
        let j = json!({
            "snaktype": "value",
            "property": "P31",
            "hash": "ad7d38a03cdd40cdc373de0dc4e7b7fcbccb31d9",
            "datavalue": {"value": {"entity-type": "item", "numeric-id": 5, "id": "Q5"}, "type": "wikibase-entityid"},
            "datatype": "wikibase-item"
        });
        let snak = Snak::from_json(&j).unwrap();
        assert_eq!(snak.property(), "P31");
        assert_eq!(snak.datatype(), Some(DataType::WikibaseItem));
        assert_eq!(
            snak.value().data_value().and_then(|dv| dv.as_entity_id()),
            Some("Q5")
        );
        assert_eq!(snak.hash(), Some("ad7d38a03cdd40cdc373de0dc4e7b7fcbccb31d9"));
    }

    #[test]
    fn test_snak_somevalue_novalue() {
        let j = json!({"snaktype": "somevalue", "property": "P40", "datatype": "wikibase-item"});
        assert_eq!(Snak::from_json(&j).unwrap().value(), &SnakValue::SomeValue);
        let j = json!({"snaktype": "novalue", "property": "P40", "datatype": "wikibase-item"});
        assert_eq!(Snak::from_json(&j).unwrap().value(), &SnakValue::NoValue);
    }

    #[test]
    fn test_snak_bad_snaktype() {
        let j = json!({"snaktype": "maybe", "property": "P40"});
        assert!(Snak::from_json(&j).is_err());
    }

    #[test]
    fn test_snak_eq_ignores_hash() {
        let a = json!({"snaktype": "value", "property": "P1", "hash": "aaa", "datavalue": {"value": "x", "type": "string"}, "datatype": "string"});
        let b = json!({"snaktype": "value", "property": "P1", "hash": "bbb", "datavalue": {"value": "x", "type": "string"}, "datatype": "string"});
        assert_eq!(Snak::from_json(&a).unwrap(), Snak::from_json(&b).unwrap());
    }

    #[test]
    fn test_list_from_json_order() {
        let j = json!({
            "P2": [{"snaktype": "value", "property": "P2", "datavalue": {"value": "b", "type": "string"}}],
            "P1": [
                {"snaktype": "value", "property": "P1", "datavalue": {"value": "a1", "type": "string"}},
                {"snaktype": "value", "property": "P1", "datavalue": {"value": "a2", "type": "string"}}
            ]
        });
        let order = json!(["P1", "P2"]);
        let snaks = Snak::list_from_json(&j, &order).unwrap();
        let props: Vec<&str> = snaks.iter().map(|s| s.property()).collect();
        assert_eq!(props, vec!["P1", "P1", "P2"]);
    }

    #[test]
    fn test_list_from_json_empty_forms() {
        assert!(Snak::list_from_json(&Value::Null, &Value::Null).unwrap().is_empty());
        assert!(Snak::list_from_json(&json!([]), &Value::Null).unwrap().is_empty());
        assert!(Snak::list_from_json(&json!("nope"), &Value::Null).is_err());
    }
}
