//! Text shown on the card and in the response dialog.

use crate::session::Choice;

pub const DEFAULT_RECIPIENT: &str = "Catherine";
pub const DEFAULT_SENDER: &str = "Keegan";

/// Fixed message addressed to one recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardContent {
    pub recipient: String,
    pub sender: String,
    pub cover_title: String,
    pub cover_hint: String,
    pub headline: String,
    pub body: String,
    pub closing: String,
}

impl CardContent {
    pub fn new(recipient: impl Into<String>, sender: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            sender: sender.into(),
            cover_title: "Valentine's Day".to_string(),
            cover_hint: "Click to open".to_string(),
            headline: "Will You Be My Valentine?".to_string(),
            body: "I wanted to create something special for you this Valentine's Day. \
                   You bring so much joy and happiness into my life, and I can't imagine \
                   celebrating this day with anyone else."
                .to_string(),
            closing: "With all my love,".to_string(),
        }
    }

    pub fn salutation(&self) -> String {
        format!("Dear {},", self.recipient)
    }
}

impl Default for CardContent {
    fn default() -> Self {
        Self::new(DEFAULT_RECIPIENT, DEFAULT_SENDER)
    }
}

/// Message shown after a response control is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogContent {
    pub glyph: &'static str,
    pub title: String,
    pub message: String,
    pub dismiss_label: &'static str,
}

impl DialogContent {
    pub fn for_choice(choice: Choice, content: &CardContent) -> Self {
        match choice {
            Choice::Yes => Self {
                glyph: "💘",
                title: "Yay!".to_string(),
                message: format!(
                    "You just made {} the happiest person alive. See you on the 14th!",
                    content.sender
                ),
                dismiss_label: "Close",
            },
            Choice::No => Self {
                glyph: "🥺",
                title: "Are you sure?".to_string(),
                message: format!(
                    "{} will be heartbroken... maybe think it over one more time?",
                    content.sender
                ),
                dismiss_label: "Let me reconsider",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salutation_names_recipient() {
        let content = CardContent::new("Ada", "Grace");
        assert_eq!(content.salutation(), "Dear Ada,");
        assert_eq!(content.sender, "Grace");
    }

    #[test]
    fn dialog_text_keyed_by_choice() {
        let content = CardContent::default();
        let yes = DialogContent::for_choice(Choice::Yes, &content);
        let no = DialogContent::for_choice(Choice::No, &content);
        assert_ne!(yes.title, no.title);
        assert!(yes.message.contains(DEFAULT_SENDER));
    }
}
