//! Weather information tools for a conversational agent.
//!
//! Geocodes a place name, fetches current conditions or a daily forecast from
//! Open-Meteo, derives activity, clothing and alert recommendations, and
//! exposes all of it as MCP tools. The [`scorers`] module grades recorded
//! agent transcripts offline.

pub mod activities;
pub mod agent;
pub mod alerts;
pub mod clothing;
pub mod conditions;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatters;
pub mod models;
pub mod provider;
pub mod scorers;
pub mod service;
pub mod tools;
pub mod weather;

pub use error::{JudgeError, WeatherError};
pub use service::Weather;
pub use weather::WeatherService;
