use crate::WikibaseError;
use serde_json::Value;
use std::collections::HashMap;

/// Language code to text, as used for labels and descriptions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageStrings {
    ls: HashMap<String, String>,
}

impl LanguageStrings {
    /// Decodes `{"en": {"language": "en", "value": "..."}, ...}`. A missing field decodes as empty.
    pub fn from_json(field: &str, j: &Value) -> Result<Self, WikibaseError> {
        let map = match j {
            Value::Null => return Ok(Self::default()),
            Value::Array(a) if a.is_empty() => return Ok(Self::default()),
            Value::Object(map) => map,
            _ => return Err(WikibaseError::decode(field, j)),
        };
        let ls = map
            .iter()
            .map(|(language, v)| {
                let value = v["value"]
                    .as_str()
                    .ok_or_else(|| WikibaseError::decode(format!("{field}.{language}"), v))?;
                Ok((language.to_owned(), value.to_string()))
            })
            .collect::<Result<HashMap<String, String>, WikibaseError>>()?;
        Ok(Self { ls })
    }

    /// Returns the value for a language
    pub fn get_lang<S: AsRef<str>>(&self, language: S) -> Option<&str> {
        self.ls.get(language.as_ref()).map(|s| s.as_str())
    }

    pub fn has_language<S: AsRef<str>>(&self, language: S) -> bool {
        self.ls.contains_key(language.as_ref())
    }

    /// Returns the number of languages
    pub fn len(&self) -> usize {
        self.ls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ls.is_empty()
    }

    /// Iterates over (language, value) pairs, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.ls.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
