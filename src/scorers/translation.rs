use async_trait::async_trait;

use super::{Scorer, TranscriptView};

/// Was a non-English place name translated before it reached a tool?
pub struct TranslationScorer;

const VERDICTS: &[(&str, f64)] = &[
    ("consistent", 1.0),
    ("not_applicable", 1.0),
    ("inconsistent", 0.0),
];

const INSTRUCTIONS: &str = "\
You are an expert evaluator of translation quality for geographic locations.
Determine whether the user's text names a location in a language other than English, and if \
so whether the assistant passed the correct English name of that location to its tools and \
used it in the reply.
- \"not_applicable\": no non-English location name appears in the user's text.
- \"consistent\": the non-English location was correctly translated to English.
- \"inconsistent\": the location was left untranslated or translated to the wrong place.";

#[async_trait]
impl Scorer for TranslationScorer {
    fn name(&self) -> &'static str {
        "location-translation-consistency"
    }

    fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    fn verdicts(&self) -> &'static [(&'static str, f64)] {
        VERDICTS
    }

    fn prompt(&self, view: &TranscriptView) -> String {
        let locations: Vec<String> = view
            .tool_calls
            .iter()
            .filter_map(|call| call.args.get("location").and_then(|l| l.as_str()))
            .map(|l| format!("- {l}"))
            .collect();

        let locations = if locations.is_empty() {
            "(none)".to_string()
        } else {
            locations.join("\n")
        };

        format!(
            "User text:\n{}\n\nLocations passed to tools:\n{}\n\nAssistant reply:\n{}",
            view.user_text, locations, view.assistant_text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorers::ToolCallRecord;
    use serde_json::json;

    #[test]
    fn test_prompt_extracts_tool_locations() {
        let view = TranscriptView {
            user_text: "Quel temps fait-il à Londres ?".into(),
            assistant_text: "It's 14°C in London.".into(),
            tool_calls: vec![
                ToolCallRecord {
                    tool_name: "get-current-weather".into(),
                    args: json!({"location": "London"}),
                    result: None,
                },
                ToolCallRecord {
                    tool_name: "unrelated".into(),
                    args: json!({}),
                    result: None,
                },
            ],
            tool_results: Vec::new(),
        };
        let prompt = TranslationScorer.prompt(&view);
        assert!(prompt.contains("Locations passed to tools:\n- London\n"));
    }

    #[test]
    fn test_prompt_without_tool_calls() {
        let prompt = TranslationScorer.prompt(&TranscriptView::default());
        assert!(prompt.contains("(none)"));
    }
}
