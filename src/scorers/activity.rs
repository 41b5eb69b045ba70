use async_trait::async_trait;

use super::{Scorer, TranscriptView};

/// Do suggested activities fit both the weather and what the user wanted?
pub struct ActivityRelevanceScorer;

const VERDICTS: &[(&str, f64)] = &[
    ("highly_relevant", 1.0),
    ("relevant", 0.75),
    ("somewhat_relevant", 0.4),
    ("irrelevant", 0.0),
];

const INSTRUCTIONS: &str = "\
You evaluate activity suggestions made by a weather assistant.
Judge whether the suggested activities suit the reported weather (temperature, precipitation, \
wind) and any interests or plans the user mentioned.
- \"highly_relevant\": suggestions fit the weather and the user's stated interests.
- \"relevant\": suggestions fit the weather but only loosely match the user's interests.
- \"somewhat_relevant\": some suggestions are unsuitable for the weather or ignore the request.
- \"irrelevant\": suggestions do not fit the weather, or no activities were suggested when asked.";

#[async_trait]
impl Scorer for ActivityRelevanceScorer {
    fn name(&self) -> &'static str {
        "activity-relevance"
    }

    fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    fn verdicts(&self) -> &'static [(&'static str, f64)] {
        VERDICTS
    }

    fn prompt(&self, view: &TranscriptView) -> String {
        format!(
            "User request:\n{}\n\nTools called:\n{}\n\nWeather and tool results:\n{}\n\n\
             Suggested activities (assistant reply):\n{}",
            view.user_text,
            view.describe_tool_calls(),
            view.describe_tool_results(),
            view.assistant_text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorers::Transcript;
    use serde_json::json;

    #[test]
    fn test_prompt_shows_tool_message_weather() {
        let transcript: Transcript = serde_json::from_value(json!({
            "messages": [
                {"role": "user", "content": "Anything fun to do in Paris today?"},
                {"role": "assistant", "content": "", "toolCalls": [
                    {"toolName": "get-activity-recommendations", "args": {"location": "Paris"}}
                ]},
                {"role": "tool", "content": r#"{"currentConditions": "Clear sky"}"#},
                {"role": "assistant", "content": "Clear and 22°C: perfect for a hike."}
            ]
        }))
        .unwrap();

        let prompt = ActivityRelevanceScorer.prompt(&TranscriptView::from(&transcript));
        let results = prompt.split("Weather and tool results:\n").nth(1).unwrap();
        assert!(results.starts_with(r#"- {"currentConditions": "Clear sky"}"#));
        assert!(prompt.contains("- get-activity-recommendations({\"location\":\"Paris\"})"));
    }

    #[test]
    fn test_verdict_table_is_ordered_high_to_low() {
        let values: Vec<f64> = ActivityRelevanceScorer.verdicts().iter().map(|(_, v)| *v).collect();
        assert!(values.windows(2).all(|w| w[0] > w[1]));
    }
}
