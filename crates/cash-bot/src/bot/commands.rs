//! Command parsing for the watch-list bot
//!
//! Menu buttons and slash commands map onto the same [`Command`]; anything
//! else is passed through as free text.

use crate::interface::BotTexts;
use cash_utils::Locale;

/// Parsed inbound message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the welcome text and the menu
    Start,
    /// Ask for a ticker to add
    Add,
    /// Ask for a ticker to remove
    Remove,
    /// Show the watch-list
    List,
    /// Show prices of the watch-list
    Prices,
    /// Show command help
    Help,
    /// Anything else, trimmed
    Text(String),
}

impl Command {
    /// Parse a message
    ///
    /// Never fails: unknown input becomes [`Command::Text`]. Matching is
    /// case-insensitive and accepts the button labels of every locale.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let lowered = input.to_lowercase();

        if let Some(rest) = lowered.strip_prefix('/') {
            // "/start@cash_bot arg" -> "start"
            let name = rest
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .split('@')
                .next()
                .unwrap_or_default();
            if let Some(command) = Self::from_slash(name) {
                return command;
            }
        } else if let Some(command) = Self::from_label(&lowered) {
            return command;
        }

        Command::Text(input.to_string())
    }

    fn from_slash(name: &str) -> Option<Self> {
        match name {
            "start" => Some(Command::Start),
            "addtext" | "add" => Some(Command::Add),
            "remove" | "del" => Some(Command::Remove),
            "showtexts" | "list" => Some(Command::List),
            "showprices" | "prices" => Some(Command::Prices),
            "help" => Some(Command::Help),
            _ => None,
        }
    }

    fn from_label(lowered: &str) -> Option<Self> {
        Locale::ALL.into_iter().find_map(|locale| {
            let texts = BotTexts::for_locale(locale);
            let matches = |label: &str| label.to_lowercase() == lowered;
            if matches(texts.add_button()) {
                Some(Command::Add)
            } else if matches(texts.remove_button()) {
                Some(Command::Remove)
            } else if matches(texts.list_button()) {
                Some(Command::List)
            } else if matches(texts.prices_button()) {
                Some(Command::Prices)
            } else {
                None
            }
        })
    }

    /// Get help text for all commands
    pub fn help_text(locale: Locale) -> &'static str {
        BotTexts::for_locale(locale).help()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slash_commands() {
        assert_eq!(Command::parse("/start"), Command::Start);
        assert_eq!(Command::parse("/addtext"), Command::Add);
        assert_eq!(Command::parse("/remove"), Command::Remove);
        assert_eq!(Command::parse("/showtexts"), Command::List);
        assert_eq!(Command::parse("/showprices"), Command::Prices);
        assert_eq!(Command::parse("/help"), Command::Help);
    }

    #[test]
    fn test_parse_strips_bot_mention() {
        assert_eq!(Command::parse("/showprices@cash_bot"), Command::Prices);
        assert_eq!(Command::parse("  /START  "), Command::Start);
    }

    #[test]
    fn test_parse_button_labels() {
        assert_eq!(Command::parse("Добавить акцию"), Command::Add);
        assert_eq!(Command::parse("удалить акцию"), Command::Remove);
        assert_eq!(Command::parse("ПОКАЗАТЬ АКЦИИ"), Command::List);
        assert_eq!(Command::parse("Узнать цены"), Command::Prices);
        assert_eq!(Command::parse("add stock"), Command::Add);
        assert_eq!(Command::parse("Show prices"), Command::Prices);
    }

    #[test]
    fn test_parse_free_text() {
        assert_eq!(Command::parse("  sber "), Command::Text("sber".to_string()));
        assert_eq!(Command::parse(""), Command::Text(String::new()));
        assert_eq!(
            Command::parse("/unknown"),
            Command::Text("/unknown".to_string())
        );
        assert_eq!(Command::parse("hello"), Command::Text("hello".to_string()));
    }

    #[test]
    fn test_help_text() {
        assert!(Command::help_text(Locale::English).contains("/showprices"));
        assert!(Command::help_text(Locale::Russian).contains("/addtext"));
    }
}
