//! Static definition of the conversational weather agent.
//!
//! Reasoning, tool orchestration and memory persistence belong to the hosting
//! agent runtime; this only describes what the runtime should bind together.

use serde::Serialize;

use crate::config::Settings;
use crate::tools::TOOL_NAMES;

pub const AGENT_NAME: &str = "Weather Agent";

pub const AGENT_INSTRUCTIONS: &str = "\
You are a helpful weather assistant that provides accurate weather information \
and practical advice.

Your primary function is to help users get weather details for specific locations. \
When responding:
- Always ask for a location if none is provided
- If the location name isn't in English, translate it to English before calling a tool
- If given a location with multiple parts (e.g. \"New York, NY\"), use the most relevant part (e.g. \"New York\")
- Include relevant details like humidity, wind conditions, and precipitation
- Keep responses concise but informative

Use get-current-weather for current conditions and get-weather-forecast for upcoming days.
Use get-activity-recommendations when the user asks what to do, get-clothing-recommendations \
when they ask what to wear, and get-weather-alerts when they ask about warnings or safety.";

/// Number of recent messages the runtime keeps in conversation memory
pub const DEFAULT_LAST_MESSAGES: usize = 10;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemorySettings {
    pub storage_url: String,
    pub last_messages: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentDefinition {
    pub name: String,
    pub instructions: String,
    pub model: String,
    pub tools: Vec<String>,
    pub memory: MemorySettings,
}

impl AgentDefinition {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            name: AGENT_NAME.to_string(),
            instructions: AGENT_INSTRUCTIONS.to_string(),
            model: settings.agent_model.clone(),
            tools: TOOL_NAMES.iter().map(|t| t.to_string()).collect(),
            memory: MemorySettings {
                storage_url: settings.agent_storage_url.clone(),
                last_messages: DEFAULT_LAST_MESSAGES,
            },
        }
    }
}
