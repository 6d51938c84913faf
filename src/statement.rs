use crate::{DataType, Reference, Snak, SnakValue, StatementRank, WikibaseError};
use serde_json::Value;

/// A statement (claim) about an entity: a main snak with qualifiers, references, and a rank.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Statement {
    statement_id: Option<String>,
    mainsnak: Snak,
    rank: StatementRank,
    qualifiers: Vec<Snak>,
    references: Vec<Reference>,
}

impl Statement {
    /// Decodes a single claim object.
    pub fn from_json(j: &Value) -> Result<Self, WikibaseError> {
        let mainsnak = Snak::from_json(&j["mainsnak"])?;
        let rank = StatementRank::from_claim(j)?;
        Ok(Statement {
            statement_id: j["id"].as_str().map(|s| s.to_string()),
            mainsnak,
            rank,
            qualifiers: Snak::list_from_json(&j["qualifiers"], &j["qualifiers-order"])?,
            references: Self::references_from_json(&j["references"])?,
        })
    }

    /// Decodes the `claims` object of an entity, `{"P31": [claim, ...], ...}`, in wire order.
    pub(crate) fn list_from_json(j: &Value) -> Result<Vec<Self>, WikibaseError> {
        let groups: Vec<&Value> = match j {
            Value::Object(map) => map.values().collect(),
            // PHP serializes an empty map as an empty list
            Value::Array(a) if a.is_empty() => vec![],
            _ => return Err(WikibaseError::decode("claims", j)),
        };
        let mut ret = vec![];
        for group in groups {
            let claims = group
                .as_array()
                .ok_or_else(|| WikibaseError::decode("claims", group))?;
            for claim in claims {
                ret.push(Self::from_json(claim)?);
            }
        }
        Ok(ret)
    }

    fn references_from_json(j: &Value) -> Result<Vec<Reference>, WikibaseError> {
        if j.is_null() {
            return Ok(vec![]);
        }
        j.as_array()
            .ok_or_else(|| WikibaseError::decode("references", j))?
            .iter()
            .map(Reference::from_json)
            .collect()
    }

    /// Returns the statement ID
    pub fn id(&self) -> Option<&str> {
        self.statement_id.as_deref()
    }

    /// Returns the ID of the property this statement asserts
    pub fn property(&self) -> &str {
        self.mainsnak.property()
    }

    /// Returns the datatype of the property, if the server reported it
    pub const fn datatype(&self) -> Option<DataType> {
        self.mainsnak.datatype()
    }

    /// Returns the statement value
    pub const fn value(&self) -> &SnakValue {
        self.mainsnak.value()
    }

    pub const fn mainsnak(&self) -> &Snak {
        &self.mainsnak
    }

    /// Returns the statement rank
    pub const fn rank(&self) -> StatementRank {
        self.rank
    }

    /// Returns the qualifiers of the statement
    pub fn qualifiers(&self) -> &[Snak] {
        &self.qualifiers
    }

    /// Returns the references of the statement
    pub fn references(&self) -> &[Reference] {
        &self.references
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DataValue;
    use serde_json::json;

    fn claim_json() -> Value {
        json!({
            "mainsnak": {
                "snaktype": "value",
                "property": "P69",
                "hash": "9d5dc4b1bc5ba6d4b3a3ec4b2f35c9a6e0e3d2a5",
                "datavalue": {"value": {"entity-type": "item", "numeric-id": 691283, "id": "Q691283"}, "type": "wikibase-entityid"},
                "datatype": "wikibase-item"
            },
            "type": "statement",
            "qualifiers": {
                "P582": [{"snaktype": "value", "property": "P582", "datavalue": {"value": {"time": "+1974-00-00T00:00:00Z", "timezone": 0, "before": 0, "after": 0, "precision": 9, "calendarmodel": "http://www.wikidata.org/entity/Q1985727"}, "type": "time"}, "datatype": "time"}],
                "P512": [{"snaktype": "value", "property": "P512", "datavalue": {"value": {"entity-type": "item", "numeric-id": 1765120, "id": "Q1765120"}, "type": "wikibase-entityid"}, "datatype": "wikibase-item"}]
            },
            "qualifiers-order": ["P582", "P512"],
            "id": "Q42$0E9C4724-C954-4698-84A7-5CE0D296A6F2",
            "rank": "preferred",
            "references": [{
                "hash": "8ea7f5e3e2e4c6cb4b6a3c5bd0ad8ca1d0c0a5b1",
                "snaks": {"P248": [{"snaktype": "value", "property": "P248", "datavalue": {"value": {"entity-type": "item", "numeric-id": 5375741, "id": "Q5375741"}, "type": "wikibase-entityid"}, "datatype": "wikibase-item"}]},
                "snaks-order": ["P248"]
            }]
        })
    }

    #[test]
    fn test_statement_from_json() {
        let s = Statement::from_json(&claim_json()).unwrap();
        assert_eq!(s.id(), Some("Q42$0E9C4724-C954-4698-84A7-5CE0D296A6F2"));
        assert_eq!(s.property(), "P69");
        assert_eq!(s.datatype(), Some(DataType::WikibaseItem));
        assert_eq!(
            s.value(),
            &SnakValue::Value(DataValue::EntityId {
                entity_type: "item".to_string(),
                id: "Q691283".to_string()
            })
        );
        assert_eq!(s.rank(), StatementRank::Preferred);
        assert_eq!(s.qualifiers().len(), 2);
        assert_eq!(s.qualifiers()[0].property(), "P582");
        assert_eq!(s.qualifiers()[1].property(), "P512");
        assert_eq!(s.references().len(), 1);
        assert_eq!(s.references()[0].snaks()[0].property(), "P248");
    }

    #[test]
    fn test_rank_defaults_to_normal() {
        let mut j = claim_json();
        j.as_object_mut().unwrap().remove("rank");
        let s = Statement::from_json(&j).unwrap();
        assert_eq!(s.rank(), StatementRank::Normal);
    }

    #[test]
    fn test_no_qualifiers_no_references() {
        let j = json!({"mainsnak": {"snaktype": "novalue", "property": "P40", "datatype": "wikibase-item"}, "type": "statement", "rank": "normal"});
        let s = Statement::from_json(&j).unwrap();
        assert_eq!(s.value(), &SnakValue::NoValue);
        assert!(s.qualifiers().is_empty());
        assert!(s.references().is_empty());
        assert_eq!(s.id(), None);
    }

    #[test]
    fn test_missing_mainsnak() {
        let j = json!({"type": "statement", "rank": "normal"});
        assert!(Statement::from_json(&j).is_err());
    }

    #[test]
    fn test_references_not_array() {
        let mut j = claim_json();
        j["references"] = json!(123);
        assert!(Statement::from_json(&j).is_err());
    }

    #[test]
    fn test_list_from_json() {
        let j = json!({"P69": [claim_json(), claim_json()], "P40": []});
        assert_eq!(Statement::list_from_json(&j).unwrap().len(), 2);
        assert!(Statement::list_from_json(&json!([])).unwrap().is_empty());
        assert!(Statement::list_from_json(&json!("x")).is_err());
    }
}
