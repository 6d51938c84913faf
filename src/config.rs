/// Entity id letters of a Wikibase installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    item_letter: char,
    property_letter: char,
}

impl Config {
    /// Constructs a new `Config` object from item and property letters.
    pub const fn new(item_letter: char, property_letter: char) -> Config {
        Config {
            item_letter,
            property_letter,
        }
    }

    /// Returns the letter used for items.
    pub const fn item_letter(&self) -> char {
        self.item_letter
    }

    /// Returns the letter used for properties.
    pub const fn property_letter(&self) -> char {
        self.property_letter
    }

    /// Returns true if `s` is a well-formed item id, e.g. "Q42".
    pub fn is_item_id(&self, s: &str) -> bool {
        Self::is_id_with_letter(s, self.item_letter)
    }

    /// Returns true if `s` is a well-formed property id, e.g. "P31".
    pub fn is_property_id(&self, s: &str) -> bool {
        Self::is_id_with_letter(s, self.property_letter)
    }

    /// Formats a numeric item id, e.g. 42 => "Q42".
    pub fn item_id(&self, numeric_id: u64) -> String {
        format!("{}{numeric_id}", self.item_letter)
    }

    /// Formats a numeric property id, e.g. 31 => "P31".
    pub fn property_id(&self, numeric_id: u64) -> String {
        format!("{}{numeric_id}", self.property_letter)
    }

    fn is_id_with_letter(s: &str, letter: char) -> bool {
        match s.strip_prefix(letter) {
            Some(digits) => !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()),
            None => false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        WIKIDATA_CONFIG
    }
}

pub const WIKIDATA_CONFIG: Config = Config {
    item_letter: 'Q',
    property_letter: 'P',
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config() {
        let config = Config::new('Q', 'P');
        assert_eq!(config.item_letter(), 'Q');
        assert_eq!(config.property_letter(), 'P');
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_is_item_id() {
        let config = WIKIDATA_CONFIG;
        assert!(config.is_item_id("Q2"));
        assert!(config.is_item_id("Q123456"));
        assert!(!config.is_item_id("Q"));
        assert!(!config.is_item_id("Qx2"));
        assert!(!config.is_item_id("Coffee"));
        assert!(!config.is_item_id("P31"));
        assert!(!config.is_item_id("q2"));
    }

    #[test]
    fn test_is_property_id() {
        let config = WIKIDATA_CONFIG;
        assert!(config.is_property_id("P31"));
        assert!(!config.is_property_id("Q31"));
        assert!(!config.is_property_id("Mass"));
    }

    #[test]
    fn test_numeric_ids() {
        let config = Config::new('A', 'B');
        assert_eq!(config.item_id(7), "A7");
        assert_eq!(config.property_id(7), "B7");
    }
}
