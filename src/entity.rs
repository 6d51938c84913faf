use crate::{
    Aliases, DataType, EntityId, EntityType, LanguageStrings, Sitelinks, Statement, StatementRank,
    WikibaseError,
};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// The data shared by items and properties, as returned by `wbgetentities`.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    entity_type: EntityType,
    id: String,
    revision_id: u64,
    modified: DateTime<Utc>,
    labels: LanguageStrings,
    descriptions: LanguageStrings,
    aliases: Aliases,
    sitelinks: Sitelinks,
    statements: Vec<Statement>,
    datatype: Option<DataType>,
}

impl Entity {
    /// Decodes an entity JSON object.
    /// `id`, `lastrevid`, `modified`, and `claims` are required; everything else may be absent.
    pub fn from_json(j: &Value) -> Result<Self, WikibaseError> {
        let id = j["id"]
            .as_str()
            .ok_or_else(|| WikibaseError::decode("id", j))?
            .to_string();
        let revision_id = j["lastrevid"]
            .as_u64()
            .ok_or_else(|| WikibaseError::decode("lastrevid", j))?;
        let modified = j["modified"]
            .as_str()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .ok_or_else(|| WikibaseError::decode("modified", j))?
            .to_utc();
        if j.get("claims").is_none() {
            return Err(WikibaseError::decode("claims", j));
        }
        let statements = Statement::list_from_json(&j["claims"])?;
        let entity_type = Self::entity_type_from_json(j, &id)?;
        let datatype = match j["datatype"].as_str() {
            Some(s) => Some(DataType::new(s)?),
            None => None,
        };
        Ok(Self {
            entity_type,
            id,
            revision_id,
            modified,
            labels: LanguageStrings::from_json("labels", &j["labels"])?,
            descriptions: LanguageStrings::from_json("descriptions", &j["descriptions"])?,
            aliases: Aliases::from_json(&j["aliases"])?,
            sitelinks: Sitelinks::from_json(&j["sitelinks"])?,
            statements,
            datatype,
        })
    }

    fn entity_type_from_json(j: &Value, id: &str) -> Result<EntityType, WikibaseError> {
        match j["type"].as_str() {
            Some(t) => EntityType::from_type_name(t).ok_or_else(|| WikibaseError::decode("type", j)),
            None => EntityId::new(id)
                .map(|id| id.entity_type())
                .map_err(|_| WikibaseError::decode("type", j)),
        }
    }

    pub const fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the ID as a typed `EntityId`.
    pub fn entity_id(&self) -> EntityId {
        match self.entity_type {
            EntityType::Item => EntityId::item(&self.id),
            EntityType::Property => EntityId::property(&self.id),
        }
    }

    /// Returns the ID of the latest revision.
    pub const fn revision_id(&self) -> u64 {
        self.revision_id
    }

    /// Returns the timestamp of the latest revision.
    pub const fn modified(&self) -> &DateTime<Utc> {
        &self.modified
    }

    pub const fn labels(&self) -> &LanguageStrings {
        &self.labels
    }

    pub const fn descriptions(&self) -> &LanguageStrings {
        &self.descriptions
    }

    pub const fn aliases(&self) -> &Aliases {
        &self.aliases
    }

    pub const fn sitelinks(&self) -> &Sitelinks {
        &self.sitelinks
    }

    /// Returns all statements, in the order the server returned them.
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Returns the statements for a property.
    pub fn statements_for<S: AsRef<str>>(&self, property: S) -> Vec<&Statement> {
        self.statements
            .iter()
            .filter(|s| s.property() == property.as_ref())
            .collect()
    }

    /// Returns the statements for a property that carry its highest rank, leaving out deprecated ones.
    pub fn best_statements_for<S: AsRef<str>>(&self, property: S) -> Vec<&Statement> {
        let statements = self.statements_for(property);
        let Some(best) = statements.iter().map(|s| s.rank()).max() else {
            return statements;
        };
        if best == StatementRank::Deprecated {
            return vec![];
        }
        statements.into_iter().filter(|s| s.rank() == best).collect()
    }

    /// The property datatype; only set for properties.
    pub const fn datatype(&self) -> Option<DataType> {
        self.datatype
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DataValue, SnakValue};
    use chrono::TimeZone;
    use serde_json::json;

    fn test_entity_json() -> Value {
        let v = std::fs::read_to_string("test_data/Q42.json").unwrap();
        serde_json::from_str(&v).unwrap()
    }

    #[test]
    fn test_from_json() {
        let entity = Entity::from_json(&test_entity_json()).unwrap();
        assert_eq!(entity.entity_type(), EntityType::Item);
        assert_eq!(entity.id(), "Q42");
        assert_eq!(entity.entity_id(), EntityId::item("Q42"));
        assert_eq!(entity.revision_id(), 2231307917);
        assert_eq!(
            *entity.modified(),
            Utc.with_ymd_and_hms(2024, 9, 5, 19, 50, 2).unwrap()
        );
        assert_eq!(entity.labels().get_lang("en"), Some("Douglas Adams"));
        assert_eq!(
            entity.descriptions().get_lang("en"),
            Some("English author and humourist (1952–2001)")
        );
        assert!(entity
            .aliases()
            .get_lang("en")
            .contains(&"Douglas Noël Adams".to_string()));
        assert_eq!(
            entity.sitelinks().get_wiki("enwiki").map(|s| s.title()),
            Some("Douglas Adams")
        );
        assert_eq!(entity.datatype(), None);
    }

    #[test]
    fn test_best_statements_for() {
        let mut j = test_entity_json();
        let claims = j["claims"]["P569"].as_array_mut().unwrap();
        let mut normal = claims[0].clone();
        normal["rank"] = json!("normal");
        normal["id"] = json!("Q42$normal");
        let mut deprecated = claims[0].clone();
        deprecated["rank"] = json!("deprecated");
        deprecated["id"] = json!("Q42$deprecated");
        claims.push(normal);
        claims.push(deprecated.clone());
        deprecated["mainsnak"]["property"] = json!("P40");
        j["claims"]["P40"] = json!([deprecated]);
        let entity = Entity::from_json(&j).unwrap();

        assert_eq!(entity.statements_for("P569").len(), 3);
        let best = entity.best_statements_for("P569");
        assert_eq!(best.len(), 1);
        assert_eq!(best[0].rank(), StatementRank::Preferred);
        assert_eq!(entity.best_statements_for("P31").len(), 1);
        assert!(entity.best_statements_for("P40").is_empty());
        assert!(entity.best_statements_for("P999").is_empty());
    }

    #[test]
    fn test_statements_in_wire_order() {
        let entity = Entity::from_json(&test_entity_json()).unwrap();
        let props: Vec<&str> = entity.statements().iter().map(|s| s.property()).collect();
        assert_eq!(props, vec!["P31", "P21", "P569", "P1477", "P2021", "P40"]);
        let p31 = entity.statements_for("P31");
        assert_eq!(p31.len(), 1);
        assert_eq!(
            p31[0].value().data_value().and_then(|dv| dv.as_entity_id()),
            Some("Q5")
        );
        assert_eq!(entity.statements_for("P40")[0].value(), &SnakValue::NoValue);
        assert_eq!(
            entity.statements_for("P2021")[0].qualifiers()[0].value(),
            &SnakValue::SomeValue
        );
        assert!(matches!(
            entity.statements_for("P1477")[0].value(),
            SnakValue::Value(DataValue::MonolingualText { .. })
        ));
    }

    #[test]
    fn test_missing_required_fields() {
        for field in ["id", "lastrevid", "modified", "claims"] {
            let mut j = test_entity_json();
            j.as_object_mut().unwrap().remove(field);
            match Entity::from_json(&j) {
                Err(WikibaseError::Decode { field: f, .. }) => assert_eq!(f, field),
                other => panic!("expected decode error for {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_unparseable_modified() {
        let mut j = test_entity_json();
        j["modified"] = json!("yesterday-ish");
        let err = Entity::from_json(&j).unwrap_err();
        assert_eq!(err.to_string(), "Missing or invalid field modified");
    }

    #[test]
    fn test_minimal_entity() {
        let j = json!({
            "type": "property",
            "datatype": "wikibase-item",
            "id": "P31",
            "lastrevid": 7,
            "modified": "2020-01-01T00:00:00Z",
            "claims": []
        });
        let entity = Entity::from_json(&j).unwrap();
        assert_eq!(entity.entity_type(), EntityType::Property);
        assert_eq!(entity.datatype(), Some(DataType::WikibaseItem));
        assert!(entity.labels().is_empty());
        assert!(entity.aliases().is_empty());
        assert!(entity.sitelinks().is_empty());
        assert!(entity.statements().is_empty());
    }

    #[test]
    fn test_type_inferred_from_id() {
        let j = json!({"id": "Q1", "lastrevid": 1, "modified": "2020-01-01T00:00:00Z", "claims": {}});
        assert_eq!(Entity::from_json(&j).unwrap().entity_type(), EntityType::Item);
        let j = json!({"id": "L1", "lastrevid": 1, "modified": "2020-01-01T00:00:00Z", "claims": {}});
        assert!(Entity::from_json(&j).is_err());
    }
}
