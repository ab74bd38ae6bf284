use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Error, Result};

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Message {
        Message {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Message {
        Message {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Boundary to the LLM chat endpoint: structured prompt in, generated text
/// out. `Send + Sync` so requests can fan out across worker threads.
pub trait ChatClient: Send + Sync {
    fn complete(&self, messages: &[Message]) -> Result<String>;
}

/// Blocking client for OpenAI-style `chat/completions` endpoints.
pub struct OpenAiClient {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>) -> OpenAiClient {
        OpenAiClient {
            client: reqwest::blocking::Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> OpenAiClient {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> OpenAiClient {
        self.base_url = base_url.into();
        self
    }
}

impl ChatClient for OpenAiClient {
    fn complete(&self, messages: &[Message]) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        trace!("POST {url} ({} messages)", messages.len());

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&CompletionRequest {
                model: &self.model,
                messages,
            })
            .send()
            .map_err(|e| Error::UpstreamRequest(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::UpstreamRequest(format!(
                "chat API returned {status}"
            )));
        }

        let body: CompletionResponse = response
            .json()
            .map_err(|e| Error::UpstreamRequest(e.to_string()))?;

        body.choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| Error::UpstreamRequest("chat API returned no choices".into()))
    }
}
