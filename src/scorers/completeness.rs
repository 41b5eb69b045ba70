use async_trait::async_trait;

use super::{Scorer, TranscriptView};

/// Did the reply cover everything the user asked about?
pub struct CompletenessScorer;

const VERDICTS: &[(&str, f64)] = &[
    ("complete", 1.0),
    ("mostly_complete", 0.75),
    ("partial", 0.4),
    ("incomplete", 0.0),
];

const INSTRUCTIONS: &str = "\
You evaluate whether a weather assistant's reply fully answers the user's request.
List the distinct things the user asked for (locations, days, conditions, advice) and check \
each against the reply and the tool results.
- \"complete\": every requested item is answered.
- \"mostly_complete\": only minor details are missing.
- \"partial\": some requested items are answered, others are not.
- \"incomplete\": the reply does not answer the request.";

#[async_trait]
impl Scorer for CompletenessScorer {
    fn name(&self) -> &'static str {
        "response-completeness"
    }

    fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    fn verdicts(&self) -> &'static [(&'static str, f64)] {
        VERDICTS
    }

    fn prompt(&self, view: &TranscriptView) -> String {
        format!(
            "User request:\n{}\n\nTools called:\n{}\n\nTool results:\n{}\n\n\
             Assistant reply:\n{}",
            view.user_text,
            view.describe_tool_calls(),
            view.describe_tool_results(),
            view.assistant_text
        )
    }
}
