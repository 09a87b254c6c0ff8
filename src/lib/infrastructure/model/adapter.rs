//! Message adapters - convert between different API formats

use crate::types::{ChatMessage, MessageRole};
use serde_json::{Value, json};

/// Adapter for converting messages to different API formats
pub struct MessageAdapter;

impl MessageAdapter {
    /// Convert messages to OpenAI-style format
    /// Returns: [{"role": "...", "content": "..."}]
    pub fn to_openai_format(messages: &[ChatMessage]) -> Vec<Value> {
        messages
            .iter()
            .map(|msg| {
                json!({
                    "role": msg.role.as_str(),
                    "content": msg.content.clone()
                })
            })
            .collect()
    }

    /// Convert messages to Gemini format
    /// Returns: (system_instruction_text, contents)
    pub fn to_gemini_format(messages: &[ChatMessage]) -> (Option<String>, Vec<Value>) {
        let mut system_parts = Vec::new();
        let mut contents = Vec::new();

        for message in messages {
            let role = match message.role {
                MessageRole::System => {
                    system_parts.push(message.content.clone());
                    continue;
                }
                MessageRole::User => "user",
                MessageRole::Assistant => "model",
            };
            contents.push(json!({
                "role": role,
                "parts": [{"text": message.content.clone()}]
            }));
        }

        let system_instruction = if system_parts.is_empty() {
            None
        } else {
            Some(system_parts.join("\n\n"))
        };

        (system_instruction, contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gemini_format_splits_system_and_renames_assistant() {
        let messages = vec![
            ChatMessage::system("be brief"),
            ChatMessage::user("hi"),
            ChatMessage::new(MessageRole::Assistant, "hello"),
            ChatMessage::system("no emojis"),
        ];

        let (system, contents) = MessageAdapter::to_gemini_format(&messages);
        assert_eq!(system.as_deref(), Some("be brief\n\nno emojis"));
        assert_eq!(contents.len(), 2);
        assert_eq!(contents[1]["role"], "model");
        assert_eq!(contents[1]["parts"][0]["text"], "hello");
    }

    #[test]
    fn openai_format_keeps_roles() {
        let messages = vec![ChatMessage::system("s"), ChatMessage::user("u")];
        let formatted = MessageAdapter::to_openai_format(&messages);
        assert_eq!(formatted[0]["role"], "system");
        assert_eq!(formatted[1]["content"], "u");
    }
}
