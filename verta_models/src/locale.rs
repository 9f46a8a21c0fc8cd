use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Languages the site is published in. Resolution never fails: only the
/// exact string `"el"` selects Greek, everything else falls back to English.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Locale {
    #[default]
    En,
    El,
}

impl Locale {
    pub fn resolve(input: &str) -> Self {
        match input {
            "el" => Self::El,
            _ => Self::En,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::El => "el",
        }
    }
}

impl From<String> for Locale {
    fn from(value: String) -> Self {
        Self::resolve(&value)
    }
}

impl From<Locale> for String {
    fn from(value: Locale) -> Self {
        value.as_str().into()
    }
}

impl FromStr for Locale {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::resolve(s))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_known_locales() {
        assert_eq!(Locale::resolve("en"), Locale::En);
        assert_eq!(Locale::resolve("el"), Locale::El);
    }

    #[test]
    fn resolve_falls_back_to_english() {
        for input in ["fr", "de", "EL", "el-GR", ""] {
            assert_eq!(Locale::resolve(input), Locale::En);
        }
    }

    #[test]
    fn deserialize_from_string() {
        assert_eq!(serde_json::from_str::<Locale>("\"el\"").unwrap(), Locale::El);
        assert_eq!(serde_json::from_str::<Locale>("\"fr\"").unwrap(), Locale::En);
    }

    #[test]
    fn serialize_to_string() {
        assert_eq!(serde_json::to_string(&Locale::El).unwrap(), "\"el\"");
        assert_eq!(serde_json::to_string(&Locale::En).unwrap(), "\"en\"");
    }
}
