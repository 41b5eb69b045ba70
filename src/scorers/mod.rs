//! Offline scorers that grade a recorded agent interaction.
//!
//! Every scorer runs the same three steps: preprocess the transcript into a
//! [`TranscriptView`], ask a [`Judge`] for a categorical verdict, then map that
//! verdict to a number in `[0, 1]` through a fixed table, scaled by the judge's
//! confidence. A judge that fails or answers off-schema yields
//! [`NEUTRAL_SCORE`] instead of aborting the run.

mod activity;
mod completeness;
pub mod judge;
mod tool_call;
pub mod transcript;
mod translation;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub use activity::ActivityRelevanceScorer;
pub use completeness::CompletenessScorer;
pub use judge::{Judge, JudgeRequest, OpenAiJudge};
pub use tool_call::ToolAppropriatenessScorer;
pub use transcript::{Role, ToolCallRecord, Transcript, TranscriptMessage, TranscriptView};
pub use translation::TranslationScorer;

use crate::error::JudgeError;

/// Score used when the judge's answer cannot be interpreted
pub const NEUTRAL_SCORE: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub scorer: String,
    pub score: f64,
    pub reasoning: String,
}

/// Shape every judge answer must have
#[derive(Debug, Clone, Deserialize)]
struct Verdict {
    verdict: String,
    #[serde(default)]
    confidence: Option<f64>,
    reasoning: String,
}

#[async_trait]
pub trait Scorer: Send + Sync {
    fn name(&self) -> &'static str;

    /// Fixed instruction prompt given to the judge
    fn instructions(&self) -> &'static str;

    /// Verdict label to base score
    fn verdicts(&self) -> &'static [(&'static str, f64)];

    fn prompt(&self, view: &TranscriptView) -> String;

    async fn score(&self, transcript: &Transcript, judge: &dyn Judge) -> ScoreResult {
        let view = TranscriptView::from(transcript);
        let request = JudgeRequest {
            instructions: self.instructions().to_string(),
            prompt: self.prompt(&view),
            output_schema: verdict_schema(self.verdicts()),
        };

        let answer = judge.evaluate(&request).await;
        score_answer(self.name(), self.verdicts(), answer)
    }
}

fn verdict_schema(table: &[(&str, f64)]) -> Value {
    let labels: Vec<&str> = table.iter().map(|(label, _)| *label).collect();
    json!({
        "type": "object",
        "properties": {
            "verdict": {"type": "string", "enum": labels},
            "confidence": {"type": "number", "minimum": 0, "maximum": 1},
            "reasoning": {"type": "string"}
        },
        "required": ["verdict", "reasoning"],
        "additionalProperties": false
    })
}

/// Maps a judge answer to a score; never fails
pub fn score_answer(
    scorer: &str,
    table: &[(&str, f64)],
    answer: Result<Value, JudgeError>,
) -> ScoreResult {
    let verdict = answer.and_then(|value| {
        serde_json::from_value::<Verdict>(value)
            .map_err(|e| JudgeError::MalformedJudgeOutput(e.to_string()))
    });

    let verdict = match verdict {
        Ok(verdict) => verdict,
        Err(err) => {
            tracing::warn!("{} falling back to neutral score: {}", scorer, err);
            return ScoreResult {
                scorer: scorer.to_string(),
                score: NEUTRAL_SCORE,
                reasoning: err.to_string(),
            };
        }
    };

    let label = verdict.verdict.trim().to_lowercase();
    let base = match table.iter().find(|(known, _)| *known == label) {
        Some((_, value)) => *value,
        None => {
            tracing::warn!("{} got unknown verdict {:?}", scorer, verdict.verdict);
            NEUTRAL_SCORE
        }
    };

    let confidence = verdict
        .confidence
        .filter(|c| c.is_finite())
        .map_or(1.0, |c| c.clamp(0.0, 1.0));

    ScoreResult {
        scorer: scorer.to_string(),
        score: (base * confidence).clamp(0.0, 1.0),
        reasoning: verdict.reasoning,
    }
}

pub fn all_scorers() -> Vec<Box<dyn Scorer>> {
    vec![
        Box::new(ToolAppropriatenessScorer),
        Box::new(CompletenessScorer),
        Box::new(TranslationScorer),
        Box::new(ActivityRelevanceScorer),
    ]
}

/// Runs every scorer over one transcript, in a fixed order
pub async fn evaluate_transcript(transcript: &Transcript, judge: &dyn Judge) -> Vec<ScoreResult> {
    let mut results = Vec::new();
    for scorer in all_scorers() {
        let result = scorer.score(transcript, judge).await;
        tracing::info!("{}: {:.2}", result.scorer, result.score);
        results.push(result);
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &[(&str, f64)] = &[("good", 1.0), ("meh", 0.4), ("bad", 0.0)];

    fn answer(verdict: &str, confidence: Option<f64>) -> Result<Value, JudgeError> {
        let mut value = json!({"verdict": verdict, "reasoning": "because"});
        if let Some(c) = confidence {
            value["confidence"] = json!(c);
        }
        Ok(value)
    }

    #[test]
    fn test_full_confidence_uses_table_value() {
        for (label, expected) in TABLE {
            let result = score_answer("t", TABLE, answer(label, Some(1.0)));
            assert_eq!(result.score, *expected);
            assert_eq!(result.reasoning, "because");
        }
    }

    #[test]
    fn test_half_confidence_halves() {
        assert_eq!(score_answer("t", TABLE, answer("good", Some(0.5))).score, 0.5);
        assert_eq!(score_answer("t", TABLE, answer("meh", Some(0.5))).score, 0.2);
    }

    #[test]
    fn test_missing_confidence_counts_as_full() {
        assert_eq!(score_answer("t", TABLE, answer("meh", None)).score, 0.4);
    }

    #[test]
    fn test_unknown_verdict_uses_neutral_base() {
        assert_eq!(score_answer("t", TABLE, answer("excellent", Some(1.0))).score, 0.5);
        assert_eq!(score_answer("t", TABLE, answer("excellent", Some(0.5))).score, 0.25);
    }

    #[test]
    fn test_confidence_is_clamped() {
        assert_eq!(score_answer("t", TABLE, answer("good", Some(3.0))).score, 1.0);
        assert_eq!(score_answer("t", TABLE, answer("good", Some(-1.0))).score, 0.0);
    }

    #[test]
    fn test_malformed_output_is_neutral() {
        let result = score_answer("t", TABLE, Ok(json!({"score": 0.9})));
        assert_eq!(result.score, NEUTRAL_SCORE);
        assert!(result.reasoning.starts_with("Malformed judge output"));

        let result = score_answer("t", TABLE, Err(JudgeError::Transport("down".into())));
        assert_eq!(result.score, NEUTRAL_SCORE);
    }

    #[test]
    fn test_schema_lists_verdicts() {
        let schema = verdict_schema(TABLE);
        assert_eq!(schema["properties"]["verdict"]["enum"], json!(["good", "meh", "bad"]));
    }

    #[test]
    fn test_scorer_names_are_distinct() {
        let mut names: Vec<_> = all_scorers().iter().map(|s| s.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 4);
    }
}
