use nutype::nutype;

/// A language code, as used for `uselang`, `languages`, and label lookups.
#[nutype(
    sanitize(trim, lowercase),
    validate(regex = "^[a-z]{2}[a-z0-9-]*$"),
    derive(Debug, Display, Clone, PartialEq, AsRef)
)]
pub struct Language(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language() {
        assert_eq!(Language::try_new("en").unwrap().to_string(), "en");
        assert_eq!(Language::try_new(" DE ").unwrap().to_string(), "de");
        assert_eq!(Language::try_new("zh-hans").unwrap().as_ref(), "zh-hans");
        assert!(Language::try_new("e").is_err());
        assert!(Language::try_new("1en").is_err());
        assert!(Language::try_new("").is_err());
    }
}
