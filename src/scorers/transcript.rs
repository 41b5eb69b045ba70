//! Recorded agent interactions and the preprocessing step shared by scorers

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallRecord {
    pub tool_name: String,
    #[serde(default)]
    pub args: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptMessage {
    pub role: Role,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tool_calls: Vec<ToolCallRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub messages: Vec<TranscriptMessage>,
}

/// The parts of a transcript a judge is shown
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranscriptView {
    pub user_text: String,
    pub assistant_text: String,
    pub tool_calls: Vec<ToolCallRecord>,
    /// Content of `tool` messages, in transcript order
    pub tool_results: Vec<String>,
}

impl TranscriptView {
    /// One line per tool call, or a placeholder when none were made
    pub fn describe_tool_calls(&self) -> String {
        if self.tool_calls.is_empty() {
            return "(no tool calls)".to_string();
        }

        self.tool_calls
            .iter()
            .map(|call| format!("- {}({})", call.tool_name, call.args))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Results embedded in call records, then `tool` message output
    pub fn describe_tool_results(&self) -> String {
        let embedded = self.tool_calls.iter().filter_map(|call| {
            call.result
                .as_ref()
                .map(|result| format!("- {}: {result}", call.tool_name))
        });
        let messages = self.tool_results.iter().map(|result| format!("- {result}"));

        let lines: Vec<String> = embedded.chain(messages).collect();
        if lines.is_empty() {
            return "(no tool results)".to_string();
        }
        lines.join("\n")
    }
}

impl From<&Transcript> for TranscriptView {
    fn from(transcript: &Transcript) -> Self {
        let join = |role: Role| {
            transcript
                .messages
                .iter()
                .filter(|m| m.role == role && !m.content.trim().is_empty())
                .map(|m| m.content.trim())
                .collect::<Vec<_>>()
                .join("\n")
        };

        Self {
            user_text: join(Role::User),
            assistant_text: join(Role::Assistant),
            tool_calls: transcript
                .messages
                .iter()
                .flat_map(|m| m.tool_calls.iter().cloned())
                .collect(),
            tool_results: transcript
                .messages
                .iter()
                .filter(|m| m.role == Role::Tool && !m.content.trim().is_empty())
                .map(|m| m.content.trim().to_string())
                .collect(),
        }
    }
}
