//! Pipeline registry. Each backend analysis capability gets one static
//! configuration; the submission page, comparison view, and exporter are all
//! parametrized over these instead of hard-coding per-pipeline logic.

pub mod client;
pub mod controller;

mod view;
pub use view::AnalyzerView;

use crate::core::result::AnalysisKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub id: &'static str,
    pub label: &'static str,
    pub endpoint: &'static str,
    /// Whether results take part in cross-pipeline comparison and export.
    pub comparable: bool,
    /// Score label for single-input runs; batch runs always count rows.
    pub single_score_label: &'static str,
}

pub const VADER: PipelineConfig = PipelineConfig {
    id: "vader",
    label: "VADER",
    endpoint: "/analyze-vader/",
    comparable: true,
    single_score_label: "Compound Score",
};

pub const TRANSFORMER: PipelineConfig = PipelineConfig {
    id: "transformer",
    label: "Hugging Face",
    endpoint: "/analyze-huggingface/",
    comparable: true,
    single_score_label: "Confidence",
};

pub const KEYWORDS: PipelineConfig = PipelineConfig {
    id: "keywords",
    label: "Top Words",
    endpoint: "/analyze-topwords/",
    comparable: false,
    single_score_label: "Score",
};

/// Comparison and export order is fixed: lexicon first, then the transformer.
pub const COMPARABLE: [&PipelineConfig; 2] = [&VADER, &TRANSFORMER];

pub fn by_id(id: &str) -> Option<&'static PipelineConfig> {
    [&VADER, &TRANSFORMER, &KEYWORDS]
        .into_iter()
        .find(|config| config.id == id)
}

/// Score units follow the analysis kind, never the pipeline identity: batch
/// scores are processed-row counts whatever pipeline produced them.
pub fn score_label(config: &PipelineConfig, kind: AnalysisKind) -> &'static str {
    match kind {
        AnalysisKind::Batch => "Total Reviews",
        AnalysisKind::Single => config.single_score_label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_lookup_round_trips() {
        assert_eq!(by_id("vader"), Some(&VADER));
        assert_eq!(by_id("transformer"), Some(&TRANSFORMER));
        assert_eq!(by_id("keywords"), Some(&KEYWORDS));
        assert_eq!(by_id("nope"), None);
    }

    #[test]
    fn batch_label_is_a_count_for_every_pipeline() {
        for config in COMPARABLE {
            assert_eq!(score_label(config, AnalysisKind::Batch), "Total Reviews");
        }
    }

    #[test]
    fn single_labels_come_from_the_pipeline() {
        assert_eq!(score_label(&VADER, AnalysisKind::Single), "Compound Score");
        assert_eq!(
            score_label(&TRANSFORMER, AnalysisKind::Single),
            "Confidence"
        );
    }
}
