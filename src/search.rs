use crate::{EntityType, Language, Session, WikibaseError};
use nutype::nutype;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[nutype(
    validate(greater_or_equal = 1, less_or_equal = 50),
    derive(Debug, Display, Clone, Copy, PartialEq)
)]
pub struct SearchLimit(u8);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultMatch {
    #[serde(rename = "type")]
    match_type: String,
    language: String,
    text: String,
}

impl SearchResultMatch {
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// What matched: `label`, `alias`, `description`, or `entityId`.
    pub fn match_type(&self) -> &str {
        &self.match_type
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    id: String,
    label: Option<String>,
    description: Option<String>,
    #[serde(rename = "match")]
    search_match: SearchResultMatch,
}

impl SearchResult {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub const fn search_match(&self) -> &SearchResultMatch {
        &self.search_match
    }
}

/// A `wbsearchentities` query for labels and aliases.
#[derive(Debug)]
pub struct Search {
    entity_type: EntityType,
    q: String,
    language: Language,
    limit: Option<SearchLimit>,
    offset: Option<usize>,
}

impl Search {
    pub fn items<S: Into<String>>(q: S, language: Language) -> Self {
        Self {
            entity_type: EntityType::Item,
            q: q.into(),
            language,
            limit: None,
            offset: None,
        }
    }

    pub fn properties<S: Into<String>>(q: S, language: Language) -> Self {
        Self {
            entity_type: EntityType::Property,
            q: q.into(),
            language,
            limit: None,
            offset: None,
        }
    }

    pub const fn with_limit(mut self, limit: SearchLimit) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Skips the first `offset` results, as given by `search-continue` of an earlier search.
    pub const fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("search", self.q.to_string()),
            ("language", self.language.to_string()),
            ("type", self.entity_type.type_name().to_string()),
        ];
        if let Some(limit) = &self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(offset) = &self.offset {
            params.push(("continue", offset.to_string()));
        }
        params
    }

    fn response_to_results(j: &Value) -> Result<Vec<SearchResult>, WikibaseError> {
        j["search"]
            .as_array()
            .ok_or_else(|| WikibaseError::protocol("no search results in response", j))?
            .iter()
            .map(|result| {
                serde_json::from_value(result.clone())
                    .map_err(|_| WikibaseError::decode("search", result))
            })
            .collect()
    }
}

impl Session {
    /// Runs a `wbsearchentities` search.
    /// # Errors
    /// Returns an error if the call fails or a result cannot be decoded.
    pub async fn search_entities(&self, search: &Search) -> Result<Vec<SearchResult>, WikibaseError> {
        let j = self.get("wbsearchentities", search.params()).await?;
        Search::response_to_results(&j)
    }

    /// Searches items in the session's language.
    /// # Errors
    /// See `search_entities`.
    pub async fn find_items<S: Into<String>>(
        &self,
        text: S,
        limit: SearchLimit,
    ) -> Result<Vec<SearchResult>, WikibaseError> {
        let search = Search::items(text, self.language().clone()).with_limit(limit);
        self.search_entities(&search).await
    }
}
