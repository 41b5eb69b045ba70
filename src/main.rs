use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use weather_assistant::agent::AgentDefinition;
use weather_assistant::config::Settings;
use weather_assistant::constants::DEFAULT_FORECAST_DAYS;
use weather_assistant::formatters::{format_current, format_forecast, format_scores};
use weather_assistant::models::{GetCurrentWeatherRequest, GetForecastRequest};
use weather_assistant::provider::OpenMeteoClient;
use weather_assistant::scorers::{evaluate_transcript, OpenAiJudge, Transcript};
use weather_assistant::tools::{CurrentWeatherTool, ForecastTool, WeatherTool};
use weather_assistant::{Weather, WeatherService};

#[derive(Parser)]
#[command(name = "weather-assistant", version, about = "Weather tools for conversational agents")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the weather tools over MCP on stdio (default)
    Serve,
    /// Print current conditions for a place
    Current { location: String },
    /// Print a daily forecast for a place
    Forecast {
        location: String,
        #[arg(short, long, default_value_t = DEFAULT_FORECAST_DAYS)]
        days: u8,
    },
    /// Score a recorded agent transcript (JSON) with the configured judge
    Evaluate {
        transcript: PathBuf,
        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_assistant=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let settings = Settings::from_env();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(&settings).await,
        Command::Current { location } => {
            let service = weather_service(&settings)?;
            let record = CurrentWeatherTool
                .invoke(&service, GetCurrentWeatherRequest { location })
                .await?;
            print!("{}", format_current(&record));
            Ok(())
        }
        Command::Forecast { location, days } => {
            let service = weather_service(&settings)?;
            let forecast = ForecastTool
                .invoke(&service, GetForecastRequest { location, days })
                .await?;
            print!("{}", format_forecast(&forecast));
            Ok(())
        }
        Command::Evaluate { transcript, json } => evaluate(&settings, &transcript, json).await,
    }
}

fn weather_service(settings: &Settings) -> Result<WeatherService> {
    let provider = OpenMeteoClient::new(settings)?;
    Ok(WeatherService::new(Arc::new(provider)))
}

async fn serve(settings: &Settings) -> Result<()> {
    tracing::info!("Starting MCP weather server");

    let agent = AgentDefinition::from_settings(settings);
    let weather = Weather::new(weather_service(settings)?, agent);
    let server = weather.serve(rmcp::transport::stdio()).await?;
    server.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn evaluate(settings: &Settings, path: &Path, as_json: bool) -> Result<()> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read transcript {}", path.display()))?;
    let transcript: Transcript = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse transcript {}", path.display()))?;

    let judge = OpenAiJudge::new(&settings.judge, &settings.user_agent)?;
    let results = evaluate_transcript(&transcript, &judge).await;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print!("{}", format_scores(&results));
    }
    Ok(())
}
