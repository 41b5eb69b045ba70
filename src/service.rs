use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};

use crate::agent::AgentDefinition;
use crate::models::{
    GetActivitiesRequest, GetAlertsRequest, GetClothingRequest, GetCurrentWeatherRequest,
    GetForecastRequest,
};
use crate::tools::{
    ActivitiesTool, AlertsTool, ClothingTool, CurrentWeatherTool, ForecastTool, WeatherTool,
};
use crate::weather::WeatherService;

/// MCP server exposing the weather tools to an agent runtime
#[derive(Clone)]
pub struct Weather {
    service: WeatherService,
    agent: AgentDefinition,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    pub fn new(service: WeatherService, agent: AgentDefinition) -> Self {
        Self {
            service,
            agent,
            tool_router: Self::tool_router(),
        }
    }

    /// Validates and runs a tool, returning its output as JSON text
    async fn call<T: WeatherTool>(
        &self,
        tool: T,
        input: T::Input,
    ) -> Result<CallToolResult, McpError> {
        let output = tool.invoke(&self.service, input).await.map_err(|e| {
            tracing::warn!("{} failed: {}", T::NAME, e);
            McpError::from(e)
        })?;

        let body = serde_json::to_string_pretty(&output).map_err(|e| {
            McpError::internal_error(format!("Failed to encode {} output: {}", T::NAME, e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(body)]))
    }
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "weather-assistant".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: Some(self.agent.name.clone()),
                website_url: None,
            },
            instructions: Some(self.agent.instructions.clone()),
        }
    }
}

#[tool_router]
impl Weather {
    #[tool(
        name = "get-current-weather",
        description = "Get current weather for a location. Provide a city name (e.g., 'Paris' or 'New York')."
    )]
    async fn get_current_weather(
        &self,
        Parameters(request): Parameters<GetCurrentWeatherRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("{} for location: {}", CurrentWeatherTool::NAME, request.location);
        self.call(CurrentWeatherTool, request).await
    }

    #[tool(
        name = "get-weather-forecast",
        description = "Get a daily weather forecast for a location. Provide a city name and optionally the number of days (1-7, default 3)."
    )]
    async fn get_weather_forecast(
        &self,
        Parameters(request): Parameters<GetForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "{} for location: {} ({} days)",
            ForecastTool::NAME,
            request.location,
            request.days
        );
        self.call(ForecastTool, request).await
    }

    #[tool(
        name = "get-activity-recommendations",
        description = "Suggest activities that suit the current weather at a location. Optionally pass a list of interests."
    )]
    async fn get_activity_recommendations(
        &self,
        Parameters(request): Parameters<GetActivitiesRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("{} for location: {}", ActivitiesTool::NAME, request.location);
        self.call(ActivitiesTool, request).await
    }

    #[tool(
        name = "get-weather-alerts",
        description = "Get weather alerts for a location, derived from heavy rain and high wind in the current reading."
    )]
    async fn get_weather_alerts(
        &self,
        Parameters(request): Parameters<GetAlertsRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("{} for location: {}", AlertsTool::NAME, request.location);
        self.call(AlertsTool, request).await
    }

    #[tool(
        name = "get-clothing-recommendations",
        description = "Recommend clothing for the current weather at a location. Optionally describe the planned activity (e.g., 'hiking')."
    )]
    async fn get_clothing_recommendations(
        &self,
        Parameters(request): Parameters<GetClothingRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("{} for location: {}", ClothingTool::NAME, request.location);
        self.call(ClothingTool, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use crate::config::Settings;
    use crate::provider::test_support::StaticProvider;
    use crate::tools::TOOL_NAMES;

    fn server() -> Weather {
        let service = WeatherService::new(Arc::new(StaticProvider::paris_clear()));
        Weather::new(service, AgentDefinition::from_settings(&Settings::default()))
    }

    #[test]
    fn test_router_registers_every_tool() {
        let server = server();
        let mut names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        names.sort();
        let mut expected: Vec<String> = TOOL_NAMES.iter().map(|n| n.to_string()).collect();
        expected.sort();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_every_tool_is_described() {
        for tool in server().tool_router.list_all() {
            let description = tool.description.as_deref().unwrap_or_default();
            assert!(!description.is_empty(), "{} has no description", tool.name);
        }
    }

    #[test]
    fn test_server_info_carries_agent_instructions() {
        let info = server().get_info();
        assert!(info.instructions.unwrap().contains("weather"));
    }

    #[tokio::test]
    async fn test_call_returns_json_text() {
        let server = server();
        let result = server
            .call(
                CurrentWeatherTool,
                GetCurrentWeatherRequest {
                    location: "Paris".into(),
                },
            )
            .await
            .unwrap();
        let wire = serde_json::to_value(&result).unwrap();
        let text = wire["content"][0]["text"].as_str().unwrap();
        let value: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(value["conditions"], "Clear sky");
    }

    #[tokio::test]
    async fn test_invalid_days_is_invalid_params() {
        let err = server()
            .call(
                ForecastTool,
                GetForecastRequest {
                    location: "Paris".into(),
                    days: 9,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
    }
}
