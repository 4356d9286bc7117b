//! Formatting helpers for presenting analysis results.

use crate::core::result::AnalysisKind;

/// Placeholder shown wherever a response field was absent.
pub const NOT_AVAILABLE: &str = "n/a";

pub fn text_or_na(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Single scores are bounded confidence values shown to four decimal places;
/// batch scores are processed-row counts shown as plain integers.
pub fn format_score(kind: AnalysisKind, score: Option<f64>) -> String {
    match (kind, score) {
        (_, None) => NOT_AVAILABLE.to_string(),
        (AnalysisKind::Single, Some(value)) => format!("{value:.4}"),
        (AnalysisKind::Batch, Some(value)) => format!("{}", value.round() as i64),
    }
}

pub fn format_seconds(value: Option<f64>) -> String {
    match value {
        Some(secs) => format!("{secs} s"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// CSS modifier derived from the sentiment label, e.g. `Positive` → `positive`.
pub fn sentiment_class(sentiment: Option<&str>) -> String {
    sentiment
        .map(|label| label.trim().to_lowercase())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_scores_use_four_decimals() {
        assert_eq!(format_score(AnalysisKind::Single, Some(0.82)), "0.8200");
    }

    #[test]
    fn batch_scores_are_plain_counts() {
        assert_eq!(format_score(AnalysisKind::Batch, Some(50.0)), "50");
    }

    #[test]
    fn absent_fields_render_placeholder() {
        assert_eq!(format_score(AnalysisKind::Single, None), NOT_AVAILABLE);
        assert_eq!(format_seconds(None), NOT_AVAILABLE);
        assert_eq!(text_or_na(None), NOT_AVAILABLE);
        assert_eq!(text_or_na(Some("  ")), NOT_AVAILABLE);
    }

    #[test]
    fn sentiment_class_lowercases() {
        assert_eq!(sentiment_class(Some("Positive")), "positive");
        assert_eq!(sentiment_class(None), "");
    }
}
