//! Language-model judges used by the scorers

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::JudgeSettings;
use crate::error::JudgeError;

/// What a scorer asks of the judge
#[derive(Debug, Clone, Serialize)]
pub struct JudgeRequest {
    pub instructions: String,
    pub prompt: String,
    /// JSON schema the answer must follow
    pub output_schema: Value,
}

#[async_trait]
pub trait Judge: Send + Sync {
    /// Returns the judge's structured answer, unvalidated
    async fn evaluate(&self, request: &JudgeRequest) -> Result<Value, JudgeError>;
}

/// Judge backed by an OpenAI-compatible chat completions endpoint
pub struct OpenAiJudge {
    client: Client,
    api_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

impl OpenAiJudge {
    pub fn new(settings: &JudgeSettings, user_agent: &str) -> Result<Self, JudgeError> {
        let api_key = settings
            .api_key
            .clone()
            .ok_or_else(|| JudgeError::Config("JUDGE_API_KEY is not set".to_string()))?;

        let client = Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            client,
            api_url: settings.api_url.trim_end_matches('/').to_string(),
            api_key,
            model: settings.model.clone(),
        })
    }

    fn body(&self, request: &JudgeRequest) -> Value {
        let system = format!(
            "{}\n\nRespond only with a JSON object matching this schema:\n{}",
            request.instructions, request.output_schema
        );

        json!({
            "model": self.model,
            "temperature": 0,
            "response_format": {"type": "json_object"},
            "messages": [
                {"role": "system", "content": system},
                {"role": "user", "content": request.prompt},
            ],
        })
    }
}

#[async_trait]
impl Judge for OpenAiJudge {
    async fn evaluate(&self, request: &JudgeRequest) -> Result<Value, JudgeError> {
        let url = format!("{}/chat/completions", self.api_url);
        tracing::debug!("Judge request to {} with model {}", url, self.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&self.body(request))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(JudgeError::Transport(format!(
                "Request failed with status: {}",
                response.status()
            )));
        }

        let chat = response
            .json::<ChatResponse>()
            .await
            .map_err(|e| JudgeError::MalformedJudgeOutput(e.to_string()))?;

        let content = chat
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| JudgeError::MalformedJudgeOutput("empty completion".to_string()))?;

        serde_json::from_str(&content).map_err(|e| JudgeError::MalformedJudgeOutput(e.to_string()))
    }
}
