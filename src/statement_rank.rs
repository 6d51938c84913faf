use crate::WikibaseError;
use serde_json::Value;
use std::fmt;

/// Rank of a statement. Ordered by precedence, so `Preferred` is the greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum StatementRank {
    Deprecated,
    #[default]
    Normal,
    Preferred,
}

impl StatementRank {
    /// Reads the `rank` of a claim. A claim without one is `Normal`.
    /// # Errors
    /// Returns a `Decode` error if `rank` is not one of the three wire values.
    pub fn from_claim(claim: &Value) -> Result<Self, WikibaseError> {
        match &claim["rank"] {
            Value::Null => Ok(Self::default()),
            Value::String(s) => Self::from_wire(s).ok_or_else(|| WikibaseError::decode("rank", claim)),
            _ => Err(WikibaseError::decode("rank", claim)),
        }
    }

    fn from_wire(s: &str) -> Option<Self> {
        match s {
            "deprecated" => Some(Self::Deprecated),
            "normal" => Some(Self::Normal),
            "preferred" => Some(Self::Preferred),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Deprecated => "deprecated",
            Self::Normal => "normal",
            Self::Preferred => "preferred",
        }
    }
}

impl fmt::Display for StatementRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
