//! Analysis result schema and wire normalization.
//!
//! The backend payloads are duck-typed: every field can be absent depending on
//! the pipeline and input shape. Everything is normalized once, right at the
//! network boundary, so the rendering layer only ever sees explicit `Option`s
//! and never an undefined value.

use std::collections::BTreeMap;

use serde::Deserialize;

/// How the input was shaped. Determines the score unit: a bounded
/// confidence/compound value for `Single`, a processed-row count for `Batch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisKind {
    Single,
    Batch,
}

impl AnalysisKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisKind::Single => "single",
            AnalysisKind::Batch => "batch",
        }
    }

    /// Older backend revisions report `"csv"` for file runs and bespoke labels
    /// for keyword runs; anything that isn't batch-shaped counts as single.
    fn from_wire(raw: Option<&str>) -> Self {
        match raw {
            Some("batch") | Some("csv") => AnalysisKind::Batch,
            _ => AnalysisKind::Single,
        }
    }
}

/// One pipeline's result, immutable once received.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub model: Option<String>,
    pub kind: AnalysisKind,
    pub sentiment: Option<String>,
    pub score: Option<f64>,
    pub execution_time: Option<f64>,
    /// Ordered table of cells; row 0 is the header. Present only for batch runs.
    pub preview_rows: Option<Vec<Vec<String>>>,
    /// Semantic label → value pairs driving the chart, in stable sorted order.
    pub chart_series: Option<Vec<(String, f64)>>,
    pub top_words: Option<Vec<String>>,
    /// Human notice when the backend capped the number of processed rows.
    pub limit_info: Option<String>,
}

/// Raw response body. Field names match the backend's snake_case JSON.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireResult {
    pub model: Option<String>,
    pub analysis_type: Option<String>,
    pub sentiment: Option<String>,
    pub score: Option<f64>,
    pub execution_time: Option<f64>,
    pub preview_data: Option<Vec<Vec<String>>>,
    pub chart_data: Option<BTreeMap<String, f64>>,
    pub top_words: Option<Vec<String>>,
    pub limit_info: Option<String>,
}

impl WireResult {
    pub fn normalize(self) -> AnalysisResult {
        let kind = AnalysisKind::from_wire(self.analysis_type.as_deref());

        // Empty collections become absent so views branch on presence alone.
        let preview_rows = self.preview_data.filter(|rows| !rows.is_empty());
        let chart_series = self
            .chart_data
            .filter(|series| !series.is_empty())
            .map(|series| series.into_iter().collect::<Vec<_>>());
        let top_words = self.top_words.filter(|words| !words.is_empty());

        AnalysisResult {
            model: self.model.filter(|m| !m.trim().is_empty()),
            kind,
            sentiment: self.sentiment.filter(|s| !s.trim().is_empty()),
            score: self.score,
            execution_time: self.execution_time,
            preview_rows,
            chart_series,
            top_words,
            limit_info: self.limit_info,
        }
    }
}

/// Structured error body carried by non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireError {
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn batch_kind_accepts_legacy_csv_label() {
        assert_eq!(AnalysisKind::from_wire(Some("csv")), AnalysisKind::Batch);
        assert_eq!(AnalysisKind::from_wire(Some("batch")), AnalysisKind::Batch);
    }

    #[test]
    fn unknown_kinds_normalize_to_single() {
        assert_eq!(AnalysisKind::from_wire(Some("text")), AnalysisKind::Single);
        assert_eq!(
            AnalysisKind::from_wire(Some("top_words")),
            AnalysisKind::Single
        );
        assert_eq!(AnalysisKind::from_wire(None), AnalysisKind::Single);
    }

    #[test]
    fn normalize_drops_empty_collections() {
        let wire: WireResult = serde_json::from_value(json!({
            "model": "VADER",
            "analysis_type": "single",
            "score": 0.82,
            "preview_data": [],
            "chart_data": {},
            "top_words": [],
        }))
        .unwrap();

        let result = wire.normalize();
        assert!(result.preview_rows.is_none());
        assert!(result.chart_series.is_none());
        assert!(result.top_words.is_none());
        assert_eq!(result.score, Some(0.82));
    }

    #[test]
    fn normalize_keeps_full_batch_payload() {
        let wire: WireResult = serde_json::from_value(json!({
            "model": "VADER",
            "analysis_type": "batch",
            "sentiment": "Summary",
            "score": 50.0,
            "execution_time": 1.2345,
            "preview_data": [["review"], ["great product"]],
            "chart_data": {"Positive": 30.0, "Negative": 12.0, "Neutral": 8.0},
            "limit_info": "Analysis limited to the first 50 rows.",
        }))
        .unwrap();

        let result = wire.normalize();
        assert_eq!(result.kind, AnalysisKind::Batch);
        assert_eq!(result.model.as_deref(), Some("VADER"));
        assert_eq!(result.preview_rows.as_ref().map(Vec::len), Some(2));
        assert_eq!(result.chart_series.as_ref().map(Vec::len), Some(3));
        assert!(result.limit_info.is_some());
    }

    #[test]
    fn blank_strings_become_absent() {
        let wire = WireResult {
            model: Some("   ".into()),
            sentiment: Some(String::new()),
            ..WireResult::default()
        };
        let result = wire.normalize();
        assert!(result.model.is_none());
        assert!(result.sentiment.is_none());
    }
}
