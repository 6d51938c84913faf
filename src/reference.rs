use crate::{Snak, WikibaseError};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Reference {
    hash: String,
    snaks: Vec<Snak>,
}

impl Reference {
    /// Creates a new Reference object from a JSON structure
    pub fn from_json(j: &Value) -> Result<Self, WikibaseError> {
        let hash = j["hash"]
            .as_str()
            .ok_or_else(|| WikibaseError::decode("hash", j))?
            .to_string();
        let snaks = Snak::list_from_json(&j["snaks"], &j["snaks-order"])?;
        Ok(Reference { hash, snaks })
    }

    /// Returns the snaks of the reference
    pub fn snaks(&self) -> &[Snak] {
        &self.snaks
    }

    /// Returns the hash of the reference
    pub fn hash(&self) -> &str {
        &self.hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json() {
        let j = json!({
            "hash": "fa278ebfc458360e5aed63d5058cca83c46134f1",
            "snaks": {
                "P854": [{"snaktype": "value", "property": "P854", "datavalue": {"value": "https://example.org/", "type": "string"}, "datatype": "url"}],
                "P143": [{"snaktype": "value", "property": "P143", "datavalue": {"value": {"entity-type": "item", "numeric-id": 328, "id": "Q328"}, "type": "wikibase-entityid"}, "datatype": "wikibase-item"}]
            },
            "snaks-order": ["P143", "P854"]
        });
        let reference = Reference::from_json(&j).unwrap();
        assert_eq!(reference.hash(), "fa278ebfc458360e5aed63d5058cca83c46134f1");
        assert_eq!(reference.snaks().len(), 2);
        assert_eq!(reference.snaks()[0].property(), "P143");
        assert_eq!(reference.snaks()[1].property(), "P854");
    }

    #[test]
    fn test_from_json_err() {
        let j = json!({"hash": "hash", "snaks": 12345});
        assert!(Reference::from_json(&j).is_err());
        let j = json!({"snaks": {}});
        assert!(Reference::from_json(&j).is_err());
    }
}
