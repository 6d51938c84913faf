use serde_json::Value;
use std::fmt;

/// A non-fatal notice from the `warnings` object of an API response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiWarning {
    module: String,
    text: String,
}

impl ApiWarning {
    pub fn new<S1: Into<String>, S2: Into<String>>(module: S1, text: S2) -> Self {
        Self {
            module: module.into(),
            text: text.into(),
        }
    }

    /// Collects one warning per module key of a `warnings` object.
    /// Format version 1 puts the text under `*`, version 2 under `warnings`.
    pub fn from_json(warnings: &Value) -> Vec<Self> {
        let Some(map) = warnings.as_object() else {
            return vec![];
        };
        map.iter()
            .map(|(module, entry)| {
                let text = entry["*"]
                    .as_str()
                    .or_else(|| entry["warnings"].as_str())
                    .map_or_else(|| entry.to_string(), |s| s.to_string());
                Self::new(module, text)
            })
            .collect()
    }

    /// The API module that issued the warning, e.g. `main` or `wbgetentities`.
    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for ApiWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.module, self.text)
    }
}
