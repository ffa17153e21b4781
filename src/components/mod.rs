//! UI components for the greeting card.

mod closed_card;
mod confetti;
mod greeting_card;
mod open_card;
mod ornaments;
mod response_dialog;

pub use closed_card::ClosedCard;
pub use confetti::Confetti;
pub use greeting_card::GreetingCard;
pub use open_card::OpenCard;
pub use ornaments::OrnamentField;
pub use response_dialog::ResponseDialog;
