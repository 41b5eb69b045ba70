use async_trait::async_trait;

use super::{Scorer, TranscriptView};
use crate::tools::TOOL_NAMES;

/// Did the agent pick the right weather tool for the request?
pub struct ToolAppropriatenessScorer;

const VERDICTS: &[(&str, f64)] = &[
    ("appropriate", 1.0),
    ("partially_appropriate", 0.5),
    ("inappropriate", 0.0),
];

const INSTRUCTIONS: &str = "\
You evaluate whether a weather assistant chose appropriate tools for the user's request.
- \"appropriate\": the tools called match what the user asked for, and no needed tool was skipped.
- \"partially_appropriate\": some relevant tool was called but another was missing, \
or an unnecessary one was used.
- \"inappropriate\": the wrong tools were called, or a tool was needed and none was called.
A request that needs no weather data (e.g. a greeting) is appropriate when no tool is called.";

#[async_trait]
impl Scorer for ToolAppropriatenessScorer {
    fn name(&self) -> &'static str {
        "tool-appropriateness"
    }

    fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    fn verdicts(&self) -> &'static [(&'static str, f64)] {
        VERDICTS
    }

    fn prompt(&self, view: &TranscriptView) -> String {
        format!(
            "Available tools: {}\n\nUser request:\n{}\n\nTools called:\n{}",
            TOOL_NAMES.join(", "),
            view.user_text,
            view.describe_tool_calls()
        )
    }
}
