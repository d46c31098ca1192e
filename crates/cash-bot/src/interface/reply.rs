//! Bot replies
//!
//! A reply is text plus an optional reply keyboard. Platforms decide how the
//! keyboard is drawn; the console prints the labels, Telegram shows buttons.

use crate::interface::texts::BotTexts;
use cash_utils::Locale;
use serde::{Deserialize, Serialize};

/// Reply keyboard: rows of button labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyboard {
    pub rows: Vec<Vec<String>>,
    /// Ask the client to shrink the keyboard to fit its buttons
    pub resize: bool,
}

impl Keyboard {
    /// One button per row, resized
    pub fn column<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: labels.into_iter().map(|label| vec![label.into()]).collect(),
            resize: true,
        }
    }

    /// Add stock / remove stock / show stocks / show prices
    pub fn main_menu(locale: Locale) -> Self {
        Self::column(BotTexts::for_locale(locale).menu_buttons())
    }

    /// All labels, row by row
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().flatten().map(String::as_str)
    }
}

/// Bot reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotReply {
    /// Reply content
    pub text: String,
    /// Keyboard to show with the reply
    pub keyboard: Option<Keyboard>,
}

impl BotReply {
    /// Create a plain text reply
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
        }
    }

    /// Create a reply carrying the main menu
    pub fn with_menu(text: impl Into<String>, locale: Locale) -> Self {
        Self::text(text).with_keyboard(Keyboard::main_menu(locale))
    }

    /// Attach a keyboard
    pub fn with_keyboard(mut self, keyboard: Keyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_reply() {
        let reply = BotReply::text("Hello");
        assert_eq!(reply.text, "Hello");
        assert!(reply.keyboard.is_none());
    }

    #[test]
    fn test_main_menu_layout() {
        let keyboard = Keyboard::main_menu(Locale::Russian);
        assert!(keyboard.resize);
        assert_eq!(keyboard.rows.len(), 4);
        assert!(keyboard.rows.iter().all(|row| row.len() == 1));
        assert_eq!(
            keyboard.labels().collect::<Vec<_>>(),
            vec!["Добавить акцию", "Удалить акцию", "Показать акции", "Узнать цены"]
        );
    }

    #[test]
    fn test_reply_with_menu() {
        let reply = BotReply::with_menu("Pick one", Locale::English);
        let keyboard = reply.keyboard.unwrap();
        assert_eq!(keyboard.labels().next(), Some("Add stock"));
    }
}
