//! Transcript export.
//!
//! One `ROLE: content` block per message, blocks separated by a blank
//! line, role uppercased. Purely derived from the message list.

use crate::types::Message;

/// Render the conversation as a downloadable plain-text transcript
pub fn export_transcript(messages: &[Message]) -> String {
    messages
        .iter()
        .map(|m| format!("{}: {}", m.role.to_string().to_uppercase(), m.content))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_produces_one_block_per_message() {
        let messages = vec![
            Message::user("What should I study first?"),
            Message::assistant("Start with the chapter summary."),
            Message::user("Thanks"),
        ];
        let out = export_transcript(&messages);
        let blocks: Vec<&str> = out.split("\n\n").collect();
        assert_eq!(blocks.len(), messages.len());
        assert_eq!(blocks[0], "USER: What should I study first?");
        assert_eq!(blocks[1], "ASSISTANT: Start with the chapter summary.");
    }

    #[test]
    fn export_of_empty_history_is_empty() {
        assert_eq!(export_transcript(&[]), "");
    }
}
