use crate::WikibaseError;
use serde_json::Value;
use std::collections::HashMap;

/// Aliases of an entity, grouped by language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aliases {
    aliases: HashMap<String, Vec<String>>,
}

impl Aliases {
    /// Decodes `{"en": [{"language": "en", "value": "..."}, ...], ...}`.
    /// Duplicate aliases within a language are dropped, keeping the first occurrence.
    pub fn from_json(j: &Value) -> Result<Self, WikibaseError> {
        let map = match j {
            Value::Null => return Ok(Self::default()),
            Value::Array(a) if a.is_empty() => return Ok(Self::default()),
            Value::Object(map) => map,
            _ => return Err(WikibaseError::decode("aliases", j)),
        };
        let mut aliases = HashMap::new();
        for (language, values) in map {
            let values = values
                .as_array()
                .ok_or_else(|| WikibaseError::decode(format!("aliases.{language}"), values))?;
            let mut list: Vec<String> = Vec::with_capacity(values.len());
            for v in values {
                let alias = v["value"]
                    .as_str()
                    .ok_or_else(|| WikibaseError::decode(format!("aliases.{language}"), v))?;
                if !list.iter().any(|a| a == alias) {
                    list.push(alias.to_string());
                }
            }
            aliases.insert(language.to_owned(), list);
        }
        Ok(Self { aliases })
    }

    /// Returns the aliases for a language; empty if there are none
    pub fn get_lang<S: AsRef<str>>(&self, language: S) -> &[String] {
        self.aliases
            .get(language.as_ref())
            .map(|v| v.as_slice())
            .unwrap_or_default()
    }

    pub fn has_language<S: AsRef<str>>(&self, language: S) -> bool {
        self.aliases.contains_key(language.as_ref())
    }

    /// Returns the number of languages with aliases
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.aliases.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}
