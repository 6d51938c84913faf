use crate::{
    Config, EntityType, Item, Language, MissingEntity, Property, Session, WikibaseError,
};
use serde_json::Value;
use tracing::debug;

/// A batch of entities to fetch, as numeric ids, entity ids, or page titles.
///
/// A batch is never mixed. Plain strings are classified by their first element when the
/// batch is sent: if it is an id of the expected type (e.g. "Q42" for items), the whole
/// batch is taken as ids, otherwise as titles on the site of the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemQuery {
    /// Numeric ids, e.g. `42` for "Q42" or "P42".
    Numeric(Vec<u64>),
    /// Ids or titles, classified by the first element.
    Strings(Vec<String>),
    Ids(Vec<String>),
    Titles(Vec<String>),
}

impl ItemQuery {
    pub fn ids<I: IntoIterator<Item = S>, S: Into<String>>(ids: I) -> Self {
        Self::Ids(ids.into_iter().map(|s| s.into()).collect())
    }

    pub fn titles<I: IntoIterator<Item = S>, S: Into<String>>(titles: I) -> Self {
        Self::Titles(titles.into_iter().map(|s| s.into()).collect())
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(v) => v.len(),
            Self::Strings(v) | Self::Ids(v) | Self::Titles(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the `ids` or `titles` values, and whether they are titles.
    fn resolve(
        self,
        config: &Config,
        expected: EntityType,
    ) -> Result<(Vec<String>, bool), WikibaseError> {
        if self.is_empty() {
            return Err(WikibaseError::Config("empty entity query".to_string()));
        }
        let is_expected_id = |s: &str| match expected {
            EntityType::Item => config.is_item_id(s),
            EntityType::Property => config.is_property_id(s),
        };
        Ok(match self {
            Self::Numeric(v) => {
                let ids = v
                    .into_iter()
                    .map(|n| match expected {
                        EntityType::Item => config.item_id(n),
                        EntityType::Property => config.property_id(n),
                    })
                    .collect();
                (ids, false)
            }
            Self::Strings(v) => {
                let by_title = !v.first().is_some_and(|s| is_expected_id(s.as_str()));
                (v, by_title)
            }
            Self::Ids(v) => (v, false),
            Self::Titles(v) => (v, true),
        })
    }
}

impl From<u64> for ItemQuery {
    fn from(n: u64) -> Self {
        Self::Numeric(vec![n])
    }
}

impl From<&[u64]> for ItemQuery {
    fn from(v: &[u64]) -> Self {
        Self::Numeric(v.to_vec())
    }
}

impl From<Vec<u64>> for ItemQuery {
    fn from(v: Vec<u64>) -> Self {
        Self::Numeric(v)
    }
}

impl<const N: usize> From<[u64; N]> for ItemQuery {
    fn from(v: [u64; N]) -> Self {
        Self::Numeric(v.to_vec())
    }
}

impl From<&str> for ItemQuery {
    fn from(s: &str) -> Self {
        Self::Strings(vec![s.to_string()])
    }
}

impl From<String> for ItemQuery {
    fn from(s: String) -> Self {
        Self::Strings(vec![s])
    }
}

impl From<&[&str]> for ItemQuery {
    fn from(v: &[&str]) -> Self {
        Self::Strings(v.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ItemQuery {
    fn from(v: [&str; N]) -> Self {
        Self::Strings(v.iter().map(|s| s.to_string()).collect())
    }
}

impl From<Vec<&str>> for ItemQuery {
    fn from(v: Vec<&str>) -> Self {
        Self::Strings(v.into_iter().map(|s| s.to_string()).collect())
    }
}

impl From<Vec<String>> for ItemQuery {
    fn from(v: Vec<String>) -> Self {
        Self::Strings(v)
    }
}

/// Per-request settings for `wbgetentities`. Unset values fall back to the session's.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOptions {
    site: Option<String>,
    language: Option<Language>,
    follow_redirects: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            site: None,
            language: None,
            follow_redirects: true,
        }
    }
}

impl FetchOptions {
    /// Sets the site that titles are looked up on, e.g. "dewiki".
    pub fn with_site<S: Into<String>>(mut self, site: S) -> Self {
        self.site = Some(site.into());
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Sets whether redirected entities resolve to their target. Default is true.
    pub const fn with_follow_redirects(mut self, follow_redirects: bool) -> Self {
        self.follow_redirects = follow_redirects;
        self
    }

    pub fn site(&self) -> Option<&str> {
        self.site.as_deref()
    }

    pub const fn language(&self) -> Option<&Language> {
        self.language.as_ref()
    }

    pub const fn follow_redirects(&self) -> bool {
        self.follow_redirects
    }
}

impl Session {
    /// Fetches entities with `wbgetentities`, and returns their JSON in response order.
    ///
    /// All or nothing: if any entity of the batch is missing, or is not of the `expected`
    /// type, the whole call fails.
    /// # Errors
    /// - `Config` for an empty batch
    /// - `MissingEntity` for a missing or mistyped entity, or a `no-such-entity` API error
    /// - `Protocol` if the response has no `success` marker
    /// - any other error of the API call
    pub async fn get_entities(
        &self,
        ids_or_titles: &[String],
        expected: EntityType,
        options: &FetchOptions,
        by_title: bool,
    ) -> Result<Vec<Value>, WikibaseError> {
        if ids_or_titles.is_empty() {
            return Err(WikibaseError::Config("empty entity query".to_string()));
        }
        let site = options.site().unwrap_or(self.site()).to_string();
        let language = options.language().unwrap_or(self.language()).to_string();
        let redirects = if options.follow_redirects() { "yes" } else { "no" };
        let key = if by_title { "titles" } else { "ids" };
        debug!(count = ids_or_titles.len(), key, "fetching entities");
        let params = [
            ("sites", site),
            ("languages", language),
            ("redirects", redirects.to_string()),
            (key, ids_or_titles.join("|")),
        ];
        let j = self
            .get("wbgetentities", params)
            .await
            .map_err(|e| match e {
                WikibaseError::Api { code, info, .. } if code == "no-such-entity" => {
                    WikibaseError::MissingEntity(MissingEntity::from_info(&info))
                }
                e => e,
            })?;
        if j.get("success").is_none() {
            return Err(WikibaseError::protocol(
                "expected 'success' in wbgetentities response",
                &j,
            ));
        }
        let entities = match &j["entities"] {
            Value::Object(map) => map.values().cloned().collect::<Vec<Value>>(),
            _ => return Err(WikibaseError::protocol("no entities in response", &j)),
        };
        if let Some(bad) = entities.iter().find(|e| {
            e.get("missing").is_some() || e["type"].as_str() != Some(expected.type_name())
        }) {
            return Err(WikibaseError::MissingEntity(Self::missing_entity(bad)));
        }
        Ok(entities)
    }

    /// Identifies an unusable entity record by title, or else by id.
    fn missing_entity(e: &Value) -> MissingEntity {
        match (e["title"].as_str(), e["id"].as_str()) {
            (Some(title), _) => MissingEntity::with_title(title),
            (None, Some(id)) => MissingEntity::with_id(id),
            (None, None) => MissingEntity::default(),
        }
    }

    /// Fetches items, with the session's site and language.
    /// # Errors
    /// See `get_items_with`.
    pub async fn get_items<Q: Into<ItemQuery>>(&self, query: Q) -> Result<Vec<Item>, WikibaseError> {
        self.get_items_with(query, &FetchOptions::default()).await
    }

    /// Fetches items, e.g. `[42_u64]`, `["Q42", "Q1"]`, or `["Douglas Adams"]` (titles).
    /// # Errors
    /// Returns a `MissingItem` error if any item is missing, or another error if the call fails.
    pub async fn get_items_with<Q: Into<ItemQuery>>(
        &self,
        query: Q,
        options: &FetchOptions,
    ) -> Result<Vec<Item>, WikibaseError> {
        let (values, by_title) = query.into().resolve(self.config(), EntityType::Item)?;
        let entities = self
            .get_entities(&values, EntityType::Item, options, by_title)
            .await
            .map_err(|e| match e {
                WikibaseError::MissingEntity(m) => WikibaseError::MissingItem(m),
                e => e,
            })?;
        entities.iter().map(Item::from_json).collect()
    }

    /// Fetches a single item, e.g. `42_u64`, `"Q42"`, or `"Douglas Adams"` (title).
    /// # Errors
    /// Returns a `MissingItem` error if the item is missing, or another error if the call fails.
    pub async fn get_item<Q: Into<ItemQuery>>(&self, query: Q) -> Result<Item, WikibaseError> {
        self.get_items(query)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| WikibaseError::MissingItem(MissingEntity::default()))
    }

    /// Fetches properties, with the session's site and language.
    /// # Errors
    /// See `get_properties_with`.
    pub async fn get_properties<Q: Into<ItemQuery>>(
        &self,
        query: Q,
    ) -> Result<Vec<Property>, WikibaseError> {
        self.get_properties_with(query, &FetchOptions::default())
            .await
    }

    /// Fetches properties, e.g. `[31_u64]` or `["P31", "P279"]`.
    /// # Errors
    /// Returns a `MissingProperty` error if any property is missing, or another error if the call fails.
    pub async fn get_properties_with<Q: Into<ItemQuery>>(
        &self,
        query: Q,
        options: &FetchOptions,
    ) -> Result<Vec<Property>, WikibaseError> {
        let (values, by_title) = query
            .into()
            .resolve(self.config(), EntityType::Property)?;
        let entities = self
            .get_entities(&values, EntityType::Property, options, by_title)
            .await
            .map_err(|e| match e {
                WikibaseError::MissingEntity(m) => WikibaseError::MissingProperty(m),
                e => e,
            })?;
        entities.iter().map(Property::from_json).collect()
    }

    /// Fetches a single property.
    /// # Errors
    /// Returns a `MissingProperty` error if the property is missing, or another error if the call fails.
    pub async fn get_property<Q: Into<ItemQuery>>(
        &self,
        query: Q,
    ) -> Result<Property, WikibaseError> {
        self.get_properties(query)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| WikibaseError::MissingProperty(MissingEntity::default()))
    }
}
