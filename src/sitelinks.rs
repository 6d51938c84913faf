use crate::{Sitelink, WikibaseError};
use serde_json::Value;

/// The sitelinks of an entity, in the order the server returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sitelinks {
    sitelinks: Vec<Sitelink>,
}

impl Sitelinks {
    pub fn from_json(j: &Value) -> Result<Self, WikibaseError> {
        let sitelinks = match j {
            Value::Null => vec![],
            Value::Array(a) if a.is_empty() => vec![],
            Value::Object(map) => map
                .iter()
                .map(|(site, sl)| Sitelink::from_json(site, sl))
                .collect::<Result<Vec<Sitelink>, WikibaseError>>()?,
            _ => return Err(WikibaseError::decode("sitelinks", j)),
        };
        Ok(Self { sitelinks })
    }

    /// Returns the sitelinks
    pub fn sitelinks(&self) -> &[Sitelink] {
        &self.sitelinks
    }

    /// Returns the sitelink for a given site
    pub fn get_wiki<S: AsRef<str>>(&self, site: S) -> Option<&Sitelink> {
        self.sitelinks.iter().find(|s| s.site() == site.as_ref())
    }

    /// Returns the number of sitelinks
    pub fn len(&self) -> usize {
        self.sitelinks.len()
    }

    /// Returns true if there are no sitelinks
    pub fn is_empty(&self) -> bool {
        self.sitelinks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sitelink> {
        self.sitelinks.iter()
    }
}
