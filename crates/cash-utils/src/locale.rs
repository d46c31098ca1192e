//! Locale of user-facing texts
//!
//! The bot was built for a Russian-speaking audience, so Russian is the
//! default. English texts exist for development and for non-Russian chats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported locales
///
/// # Examples
///
/// ```
/// use cash_utils::Locale;
///
/// assert_eq!(Locale::from_code("en"), Some(Locale::English));
/// assert_eq!(Locale::default().code(), "ru");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Russian
    #[default]
    Russian,
    /// English
    English,
}

impl Locale {
    /// Every supported locale, default first
    pub const ALL: [Locale; 2] = [Locale::Russian, Locale::English];

    /// Get ISO 639-1 language code
    pub fn code(self) -> &'static str {
        match self {
            Locale::Russian => "ru",
            Locale::English => "en",
        }
    }

    /// Get language name for display
    pub fn name(self) -> &'static str {
        match self {
            Locale::Russian => "Russian",
            Locale::English => "English",
        }
    }

    /// Parse from ISO 639-1 code or common name
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ru" | "rus" | "russian" | "русский" | "ru-ru" => Some(Locale::Russian),
            "en" | "eng" | "english" | "en-us" | "en-gb" => Some(Locale::English),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s).ok_or_else(|| format!("unsupported locale: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_code() {
        assert_eq!(Locale::Russian.code(), "ru");
        assert_eq!(Locale::English.code(), "en");
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Locale::from_code("RU"), Some(Locale::Russian));
        assert_eq!(Locale::from_code("русский"), Some(Locale::Russian));
        assert_eq!(Locale::from_code(" english "), Some(Locale::English));
        assert_eq!(Locale::from_code("zh"), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::English));
        assert!("klingon".parse::<Locale>().is_err());
    }

    #[test]
    fn test_default() {
        assert_eq!(Locale::default(), Locale::Russian);
        assert_eq!(Locale::ALL[0], Locale::default());
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Locale::English).unwrap();
        assert_eq!(json, "\"english\"");
        let parsed: Locale = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Locale::English);
    }
}
