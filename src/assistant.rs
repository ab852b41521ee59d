use std::error::Error;
use std::sync::Arc;

use log::info;

use crate::llm::{ChatMessage, CompletionClient, Role};

/// Persona prepended to every conversation sent to the completion provider.
const SYSTEM_PROMPT: &str = "You are Alfredo, a helpful smart mirror assistant, \
    you're very positive, the user is called Daniel and built you, you never use \
    emojis. Continue the conversation naturally.";

const TURN_SEPARATOR: &str = " - ";
const USER_PREFIX: &str = "User: ";
const ASSISTANT_PREFIX: &str = "Assistant: ";

/// Conversation handler backing the /chat endpoint. Holds the injected
/// completion client; one instance is shared across requests.
pub struct Assistant {
    completion: Arc<dyn CompletionClient>,
}

impl Assistant {
    pub fn new(completion: Arc<dyn CompletionClient>) -> Self {
        Self { completion }
    }

    /// Generates a reply to `prompt` given the frontend's serialized history,
    /// then classifies the reply's emotional tone with a second provider
    /// call. Provider failures propagate; no reply is ever fabricated.
    pub async fn respond(
        &self,
        prompt: &str,
        context: &str,
    ) -> Result<(String, String), Box<dyn Error + Send + Sync>> {
        let mut messages = vec![ChatMessage::new(Role::System, SYSTEM_PROMPT)];
        messages.extend(decode_context(context));
        messages.push(ChatMessage::new(Role::User, prompt));

        info!("requesting completion with {} messages", messages.len());
        let reply = self.completion.complete(&messages).await?;
        let emotion = self.classify_emotion(&reply).await?;

        Ok((reply, emotion))
    }

    /// Asks the provider to label the text's emotional tone in one word. The
    /// suggested vocabulary is happy/sad/angry/excited/neutral, but whatever
    /// word comes back is passed through after normalization.
    async fn classify_emotion(
        &self,
        text: &str,
    ) -> Result<String, Box<dyn Error + Send + Sync>> {
        let instruction = format!(
            "Classify the emotion of this text in one word (happy, sad, angry, excited, neutral):\n\n{}",
            text
        );
        let messages = [ChatMessage::new(Role::System, instruction)];
        let label = self.completion.complete(&messages).await?;
        Ok(normalize_label(&label))
    }
}

fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Decodes the frontend's serialized history: turns joined with `" - "`, each
/// prefixed `"User: "` or `"Assistant: "`. Fragments with neither prefix are
/// dropped without error.
///
/// The encoding is ambiguous: turn text containing the separator mis-splits,
/// and turn text starting with a prefix is re-interpreted. It is kept as-is
/// for compatibility with the deployed frontend.
pub fn decode_context(context: &str) -> Vec<ChatMessage> {
    if context.is_empty() {
        return Vec::new();
    }

    context
        .split(TURN_SEPARATOR)
        .filter_map(|entry| {
            if let Some(text) = entry.strip_prefix(USER_PREFIX) {
                Some(ChatMessage::new(Role::User, text))
            } else if let Some(text) = entry.strip_prefix(ASSISTANT_PREFIX) {
                Some(ChatMessage::new(Role::Assistant, text))
            } else {
                None
            }
        })
        .collect()
}
