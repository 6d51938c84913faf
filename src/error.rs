use regex::Regex;
use serde_json::Value;
use std::fmt::{self, Display, Formatter};
use std::sync::LazyLock;
use thiserror::Error;

static RE_INVALID_ID: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\(Invalid id: (.*)\)").ok());
static RE_INVALID_TITLE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\(Invalid title: (.*)\)").ok());

/// The low-level reason a request did not produce a JSON document.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Identifies an entity that could not be found, or had an unexpected type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingEntity {
    id: Option<String>,
    title: Option<String>,
}

impl MissingEntity {
    pub const fn new(id: Option<String>, title: Option<String>) -> Self {
        Self { id, title }
    }

    pub fn with_id<S: Into<String>>(id: S) -> Self {
        Self::new(Some(id.into()), None)
    }

    pub fn with_title<S: Into<String>>(title: S) -> Self {
        Self::new(None, Some(title.into()))
    }

    /// Constructs a `MissingEntity` from the `info` text of a `no-such-entity` error.
    /// The server embeds the offending value as `(Invalid id: Q0)` or `(Invalid title: Foo)`.
    pub fn from_info(info: &str) -> Self {
        let capture = |re: &Option<Regex>| {
            re.as_ref()
                .and_then(|re| re.captures(info))
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string())
        };
        Self {
            id: capture(&RE_INVALID_ID),
            title: capture(&RE_INVALID_TITLE),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn describe(&self, f: &mut Formatter, what: &str) -> fmt::Result {
        match (&self.id, &self.title) {
            (Some(id), _) => write!(f, "Couldn't find {what} with id: {id}"),
            (None, Some(title)) => write!(f, "Couldn't find {what} with title: {title}"),
            (None, None) => write!(f, "Couldn't find {what} (unknown)"),
        }
    }
}

impl Display for MissingEntity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        self.describe(f, "Entity")
    }
}

/// Wrapper so item/property errors render with their own noun.
struct Described<'a>(&'a MissingEntity, &'static str);

impl Display for Described<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        self.0.describe(f, self.1)
    }
}

#[derive(Debug, Error)]
pub enum WikibaseError {
    /// Invalid local configuration or usage; raised before any request is sent.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response does not have the shape the API contract promises.
    #[error("Unexpected response ({message}): {payload}")]
    Protocol { message: String, payload: Value },

    #[error("Wikibase server returned error for action '{action}': {code}")]
    Api {
        code: String,
        info: String,
        action: String,
    },

    #[error("User '{user}' had error: {result}")]
    Account { user: String, result: String },

    #[error("{0}")]
    MissingEntity(MissingEntity),

    #[error("{}", Described(.0, "Item"))]
    MissingItem(MissingEntity),

    #[error("{}", Described(.0, "Property"))]
    MissingProperty(MissingEntity),

    #[error("Missing or invalid field {field}")]
    Decode { field: String, j: Value },

    #[error("{api_url} is not a functioning Wikibase API: {reason}")]
    Endpoint { api_url: String, reason: String },
}

impl From<reqwest::Error> for WikibaseError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(TransportError::Http(e))
    }
}

impl From<serde_json::Error> for WikibaseError {
    fn from(e: serde_json::Error) -> Self {
        Self::Transport(TransportError::Json(e))
    }
}

impl From<reqwest::header::InvalidHeaderValue> for WikibaseError {
    fn from(e: reqwest::header::InvalidHeaderValue) -> Self {
        Self::Config(format!("invalid header value: {e}"))
    }
}

impl WikibaseError {
    pub fn decode<S: Into<String>>(field: S, j: &Value) -> Self {
        Self::Decode {
            field: field.into(),
            j: j.to_owned(),
        }
    }

    pub fn protocol<S: Into<String>>(message: S, payload: &Value) -> Self {
        Self::Protocol {
            message: message.into(),
            payload: payload.to_owned(),
        }
    }

    /// Returns the API error code, if this is an API error.
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Returns the missing entity details for any of the "missing" variants.
    pub const fn missing(&self) -> Option<&MissingEntity> {
        match self {
            Self::MissingEntity(m) | Self::MissingItem(m) | Self::MissingProperty(m) => Some(m),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_entity_from_info_id() {
        let m = MissingEntity::from_info("Could not find an entity with the ID \"Q0\". (Invalid id: Q0)");
        assert_eq!(m.id(), Some("Q0"));
        assert_eq!(m.title(), None);
    }

    #[test]
    fn test_missing_entity_from_info_title() {
        let m = MissingEntity::from_info("No entity found matching site link (Invalid title: Foo Bar)");
        assert_eq!(m.id(), None);
        assert_eq!(m.title(), Some("Foo Bar"));
    }

    #[test]
    fn test_missing_entity_from_info_title_with_parentheses() {
        let m = MissingEntity::from_info(
            "No entity found matching site link enwiki:Mercury (planet) (Invalid title: Mercury (planet))",
        );
        assert_eq!(m.id(), None);
        assert_eq!(m.title(), Some("Mercury (planet)"));
    }

    #[test]
    fn test_missing_entity_from_info_nothing() {
        let m = MissingEntity::from_info("Something else went wrong");
        assert_eq!(m, MissingEntity::default());
    }

    #[test]
    fn test_missing_display() {
        assert_eq!(
            WikibaseError::MissingEntity(MissingEntity::with_id("Q0")).to_string(),
            "Couldn't find Entity with id: Q0"
        );
        assert_eq!(
            WikibaseError::MissingItem(MissingEntity::with_title("Coffee")).to_string(),
            "Couldn't find Item with title: Coffee"
        );
        assert_eq!(
            WikibaseError::MissingProperty(MissingEntity::default()).to_string(),
            "Couldn't find Property (unknown)"
        );
    }

    #[test]
    fn test_api_error_display() {
        let e = WikibaseError::Api {
            code: "no-such-entity".into(),
            info: "whatever".into(),
            action: "wbgetentities".into(),
        };
        assert_eq!(
            e.to_string(),
            "Wikibase server returned error for action 'wbgetentities': no-such-entity"
        );
        assert_eq!(e.api_code(), Some("no-such-entity"));
    }

    #[test]
    fn test_account_error_display() {
        let e = WikibaseError::Account {
            user: "bob".into(),
            result: "Failed".into(),
        };
        assert_eq!(e.to_string(), "User 'bob' had error: Failed");
    }

    #[test]
    fn test_from_serde_json_error() {
        let error = serde_json::from_str::<Value>("{").unwrap_err();
        let e: WikibaseError = error.into();
        assert!(matches!(e, WikibaseError::Transport(TransportError::Json(_))));
    }

    #[test]
    fn test_decode_error() {
        let e = WikibaseError::decode("lastrevid", &json!({}));
        assert_eq!(e.to_string(), "Missing or invalid field lastrevid");
    }

    #[test]
    fn test_missing_accessor() {
        let e = WikibaseError::MissingItem(MissingEntity::with_id("Q1"));
        assert_eq!(e.missing().and_then(|m| m.id()), Some("Q1"));
        assert!(WikibaseError::Config("x".into()).missing().is_none());
    }
}
