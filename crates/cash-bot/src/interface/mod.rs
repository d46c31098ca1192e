//! Platform-agnostic reply model and texts

pub mod reply;
pub mod texts;

pub use reply::{BotReply, Keyboard};
pub use texts::BotTexts;
