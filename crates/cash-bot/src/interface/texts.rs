//! Localized bot texts

use cash_market::Ticker;
use cash_utils::Locale;

/// Texts of the conversation layer for one locale
#[derive(Debug, Clone, Copy)]
pub struct BotTexts {
    locale: Locale,
}

impl BotTexts {
    pub fn for_locale(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn welcome(&self) -> &'static str {
        match self.locale {
            Locale::Russian => {
                "Добро пожаловать! Бот добавляет акции московской биржи в избранное для отслеживания цен"
            }
            Locale::English => {
                "Welcome! This bot keeps a list of Moscow Exchange stocks and shows their prices"
            }
        }
    }

    pub fn add_prompt(&self) -> &'static str {
        match self.locale {
            Locale::Russian => "Введите тикер акции для добавления например mtss или MTSS",
            Locale::English => "Enter a ticker to add, for example mtss or MTSS",
        }
    }

    pub fn remove_prompt(&self) -> &'static str {
        match self.locale {
            Locale::Russian => "Введите тикер акции для удаления:",
            Locale::English => "Enter a ticker to remove:",
        }
    }

    pub fn added(&self, ticker: &Ticker) -> String {
        match self.locale {
            Locale::Russian => format!("Акция {ticker} добавлена."),
            Locale::English => format!("Stock {ticker} added."),
        }
    }

    pub fn already_listed(&self, ticker: &Ticker) -> String {
        match self.locale {
            Locale::Russian => format!("Акция {ticker} уже есть в списке."),
            Locale::English => format!("Stock {ticker} is already in the list."),
        }
    }

    pub fn removed(&self, ticker: &Ticker) -> String {
        match self.locale {
            Locale::Russian => format!("Акция {ticker} удалена."),
            Locale::English => format!("Stock {ticker} removed."),
        }
    }

    pub fn not_listed(&self, ticker: &Ticker) -> String {
        match self.locale {
            Locale::Russian => format!("Акции {ticker} нет в списке."),
            Locale::English => format!("Stock {ticker} is not in the list."),
        }
    }

    pub fn blank_ticker(&self) -> &'static str {
        match self.locale {
            Locale::Russian => "Тикер не может быть пустым. Введите тикер акции:",
            Locale::English => "The ticker cannot be empty. Enter a ticker:",
        }
    }

    pub fn unrecognized(&self) -> &'static str {
        match self.locale {
            Locale::Russian => "Используйте кнопки для добавления или удаления акций.",
            Locale::English => "Use the buttons to add or remove stocks.",
        }
    }

    /// Header of the watch-list listing
    pub fn list_header(&self) -> &'static str {
        match self.locale {
            Locale::Russian => "Добавленные акции:",
            Locale::English => "Watched stocks:",
        }
    }

    pub fn empty_list(&self) -> &'static str {
        match self.locale {
            Locale::Russian => "Нет добавленных акций.",
            Locale::English => "No stocks added yet.",
        }
    }

    /// Header line, then one ticker per line
    pub fn listing<'a>(&self, tickers: impl IntoIterator<Item = &'a Ticker>) -> String {
        let mut lines = vec![self.list_header().to_string()];
        lines.extend(tickers.into_iter().map(ToString::to_string));
        if lines.len() == 1 {
            return self.empty_list().to_string();
        }
        lines.join("\n")
    }

    pub fn add_button(&self) -> &'static str {
        match self.locale {
            Locale::Russian => "Добавить акцию",
            Locale::English => "Add stock",
        }
    }

    pub fn remove_button(&self) -> &'static str {
        match self.locale {
            Locale::Russian => "Удалить акцию",
            Locale::English => "Remove stock",
        }
    }

    pub fn list_button(&self) -> &'static str {
        match self.locale {
            Locale::Russian => "Показать акции",
            Locale::English => "Show stocks",
        }
    }

    pub fn prices_button(&self) -> &'static str {
        match self.locale {
            Locale::Russian => "Узнать цены",
            Locale::English => "Show prices",
        }
    }

    /// Menu labels in keyboard order
    pub fn menu_buttons(&self) -> [&'static str; 4] {
        [
            self.add_button(),
            self.remove_button(),
            self.list_button(),
            self.prices_button(),
        ]
    }

    pub fn help(&self) -> &'static str {
        match self.locale {
            Locale::Russian => {
                "Команды:\n\
                 /start - главное меню\n\
                 /addtext - добавить акцию\n\
                 /remove - удалить акцию\n\
                 /showtexts - показать список акций\n\
                 /showprices - узнать цены\n\
                 /help - эта справка"
            }
            Locale::English => {
                "Commands:\n\
                 /start - main menu\n\
                 /addtext - add a stock\n\
                 /remove - remove a stock\n\
                 /showtexts - show the watch-list\n\
                 /showprices - show prices\n\
                 /help - this help"
            }
        }
    }
}
