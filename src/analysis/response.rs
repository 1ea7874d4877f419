//! Defensive decoding of analysis service responses

use crate::analysis::result::{AnalysisResult, FeedbackItem, FeedbackKind, Score, MAX_SCORE, MIN_SCORE};
use crate::error::{Result, ResumeScanError};
use log::warn;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Decode an analyze response body.
///
/// The score may arrive as a number or a numeric string. Anything else that
/// does not match the contract is a parse error.
pub fn parse_analysis_response(body: &[u8]) -> Result<AnalysisResult> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ResumeScanError::Parse(format!("response is not valid JSON: {}", e)))?;

    let object = value
        .as_object()
        .ok_or_else(|| ResumeScanError::Parse("response is not a JSON object".to_string()))?;

    let score = object
        .get("score")
        .ok_or_else(|| ResumeScanError::Parse("missing field 'score'".to_string()))
        .and_then(coerce_score)?;

    let feedback = object
        .get("feedback")
        .ok_or_else(|| ResumeScanError::Parse("missing field 'feedback'".to_string()))?
        .as_array()
        .ok_or_else(|| ResumeScanError::Parse("'feedback' is not an array".to_string()))?
        .iter()
        .enumerate()
        .map(|(index, item)| coerce_feedback_item(index, item))
        .collect::<Result<Vec<_>>>()?;

    Ok(AnalysisResult::new(score, feedback))
}

pub fn parse_health_response(body: &[u8]) -> Result<HealthStatus> {
    serde_json::from_slice(body)
        .map_err(|e| ResumeScanError::Parse(format!("malformed health response: {}", e)))
}

fn coerce_score(value: &Value) -> Result<Score> {
    let raw = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|score| score.is_finite())
    .ok_or_else(|| ResumeScanError::Parse(format!("'score' is not a number: {}", value)))?;

    if !(MIN_SCORE..=MAX_SCORE).contains(&raw) {
        warn!("Score {} is outside 0-100, clamping", raw);
    }
    Ok(Score::new(raw))
}

fn coerce_feedback_item(index: usize, value: &Value) -> Result<FeedbackItem> {
    let object = value
        .as_object()
        .ok_or_else(|| ResumeScanError::Parse(format!("feedback[{}] is not an object", index)))?;

    let kind = object
        .get("type")
        .and_then(Value::as_str)
        .and_then(FeedbackKind::parse)
        .ok_or_else(|| {
            ResumeScanError::Parse(format!(
                "feedback[{}].type must be \"success\" or \"warning\"",
                index
            ))
        })?;

    let message = object
        .get("message")
        .and_then(Value::as_str)
        .ok_or_else(|| ResumeScanError::Parse(format!("feedback[{}].message is not a string", index)))?;

    Ok(FeedbackItem {
        kind,
        message: message.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_contract_shape() {
        let body = br#"{
            "score": 82,
            "feedback": [
                {"type": "success", "message": "Good keyword match"},
                {"type": "warning", "message": "Consider adding a contact section"}
            ]
        }"#;

        let result = parse_analysis_response(body).unwrap();
        assert_eq!(
            result,
            AnalysisResult::new(
                Score::new(82.0),
                vec![
                    FeedbackItem::success("Good keyword match"),
                    FeedbackItem::warning("Consider adding a contact section"),
                ]
            )
        );
    }

    #[test]
    fn test_score_from_numeric_string() {
        let result = parse_analysis_response(br#"{"score": " 64.5 ", "feedback": []}"#).unwrap();
        assert_eq!(result.score().value(), 64.5);
    }

    #[test]
    fn test_out_of_range_score_is_clamped() {
        let result = parse_analysis_response(br#"{"score": 112.3, "feedback": []}"#).unwrap();
        assert_eq!(result.score().value(), 100.0);
    }

    #[test]
    fn test_negative_zero_score_reports_as_zero() {
        let result = parse_analysis_response(br#"{"score": -0.0, "feedback": []}"#).unwrap();
        assert_eq!(
            crate::output::report::export_report(&result),
            "Resume Analysis Report\n\nScore: 0/100"
        );
    }

    #[test]
    fn test_malformed_bodies_are_parse_errors() {
        let cases: [&[u8]; 8] = [
            b"<html>502 Bad Gateway</html>",
            b"[1, 2]",
            br#"{"feedback": []}"#,
            br#"{"score": "high", "feedback": []}"#,
            br#"{"score": 50}"#,
            br#"{"score": 50, "feedback": {"type": "success"}}"#,
            br#"{"score": 50, "feedback": [{"type": "info", "message": "x"}]}"#,
            br#"{"score": 50, "feedback": [{"type": "success", "message": 7}]}"#,
        ];

        for body in cases {
            let err = parse_analysis_response(body).unwrap_err();
            assert!(
                matches!(err, ResumeScanError::Parse(_)),
                "expected parse error for {}",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn test_health_response() {
        let status = parse_health_response(br#"{"status": "healthy"}"#).unwrap();
        assert!(status.is_healthy());
        assert!(parse_health_response(b"ok").is_err());
    }
}
