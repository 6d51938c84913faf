use crate::WikibaseError;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sitelink {
    site: String,
    title: String,
    badges: Vec<String>,
    url: Option<String>,
}

impl Sitelink {
    /// Create a new sitelink with the given site and title
    pub fn new<S1: Into<String>, S2: Into<String>>(site: S1, title: S2) -> Sitelink {
        Self::new_complete(site.into(), title.into(), Vec::new(), None)
    }

    /// Create a new sitelink with the given site, title, badges, and URL
    pub const fn new_complete(
        site: String,
        title: String,
        badges: Vec<String>,
        url: Option<String>,
    ) -> Sitelink {
        Sitelink {
            site,
            title,
            badges,
            url,
        }
    }

    /// Create a new sitelink from a JSON object. The URL is only present if requested from the API.
    pub fn from_json<S: Into<String>>(site: S, j: &Value) -> Result<Self, WikibaseError> {
        let title = j["title"]
            .as_str()
            .ok_or_else(|| WikibaseError::decode("title", j))?
            .to_string();
        let badges = match &j["badges"] {
            Value::Null => vec![],
            Value::Array(a) => a
                .iter()
                .filter_map(|b| b.as_str())
                .map(|s| s.to_string())
                .collect(),
            _ => return Err(WikibaseError::decode("badges", j)),
        };
        let url = j["url"].as_str().map(|s| s.to_string());
        Ok(Sitelink::new_complete(site.into(), title, badges, url))
    }

    /// Returns the site ID of the sitelink, e.g. "enwiki"
    pub fn site(&self) -> &str {
        &self.site
    }

    /// Returns the page title of the sitelink
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the badges of the sitelink
    pub fn badges(&self) -> &[String] {
        &self.badges
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sitelink() {
        let sitelink = Sitelink::new_complete(
            "enwiki".to_string(),
            "Foo".to_string(),
            vec!["Q17437796".to_string()],
            Some("https://en.wikipedia.org/wiki/Foo".to_string()),
        );
        assert_eq!(sitelink.site(), "enwiki");
        assert_eq!(sitelink.title(), "Foo");
        assert_eq!(sitelink.badges(), &["Q17437796".to_string()]);
        assert_eq!(sitelink.url(), Some("https://en.wikipedia.org/wiki/Foo"));
    }

    #[test]
    fn test_from_json() {
        let j = json!({"site": "enwiki", "title": "Douglas Adams", "badges": ["Q17437798"]});
        let sitelink = Sitelink::from_json("enwiki", &j).unwrap();
        assert_eq!(sitelink.title(), "Douglas Adams");
        assert_eq!(sitelink.badges().len(), 1);
        assert_eq!(sitelink.url(), None);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(Sitelink::from_json("enwiki", &json!({"badges": []})).is_err());
        assert!(Sitelink::from_json("enwiki", &json!({"title": "X", "badges": 1})).is_err());
    }
}
