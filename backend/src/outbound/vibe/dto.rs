//! Wire DTOs for the chat-completion endpoint.
//!
//! Request and response shapes follow the OpenAI-compatible completions
//! contract: an array of role/content messages in, a `choices` array out.
//! Only the fields this adapter touches are modelled.

use serde::{Deserialize, Serialize};

/// Outgoing completion request.
#[derive(Debug, Serialize)]
pub(crate) struct CompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<Message<'a>>,
    pub temperature: f32,
}

/// One chat message.
#[derive(Debug, Serialize)]
pub(crate) struct Message<'a> {
    pub role: &'a str,
    pub content: String,
}

/// Incoming completion response.
#[derive(Debug, Deserialize)]
pub(crate) struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl CompletionResponse {
    /// The generated text, when the response carries at least one choice.
    pub fn into_first_content(self) -> Option<String> {
        self.choices.into_iter().next().map(|choice| choice.message.content)
    }
}
