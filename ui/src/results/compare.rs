//! Cross-pipeline comparison derived from the shared result store.

use dioxus::prelude::*;

use crate::core::format;
use crate::core::store::ResultStore;
use crate::pipelines::{self, COMPARABLE};

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub metric: &'static str,
    pub left: String,
    pub right: String,
    pub left_class: Option<String>,
    pub right_class: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTable {
    pub left_label: &'static str,
    pub right_label: &'static str,
    pub rows: Vec<ComparisonRow>,
}

/// Derives the side-by-side diff, or `None` while either comparable slot is
/// still empty. Each side's score cell carries its own unit label: the two
/// sides may legitimately differ (e.g. a count next to a confidence).
pub fn comparison_table(store: &ResultStore) -> Option<ComparisonTable> {
    let [left_config, right_config] = COMPARABLE;
    let left = store.get(left_config.id)?;
    let right = store.get(right_config.id)?;

    let score_cell = |config: &pipelines::PipelineConfig, result: &crate::core::result::AnalysisResult| {
        format!(
            "{} · {}",
            format::format_score(result.kind, result.score),
            pipelines::score_label(config, result.kind)
        )
    };
    let class_of = |result: &crate::core::result::AnalysisResult| {
        let class = format::sentiment_class(result.sentiment.as_deref());
        (!class.is_empty()).then_some(class)
    };

    let rows = vec![
        ComparisonRow {
            metric: "Analysis Type",
            left: left.kind.as_str().to_string(),
            right: right.kind.as_str().to_string(),
            left_class: None,
            right_class: None,
        },
        ComparisonRow {
            metric: "Sentiment",
            left: format::text_or_na(left.sentiment.as_deref()),
            right: format::text_or_na(right.sentiment.as_deref()),
            left_class: class_of(left),
            right_class: class_of(right),
        },
        ComparisonRow {
            metric: "Score",
            left: score_cell(left_config, left),
            right: score_cell(right_config, right),
            left_class: None,
            right_class: None,
        },
        ComparisonRow {
            metric: "Execution Time",
            left: format::format_seconds(left.execution_time),
            right: format::format_seconds(right.execution_time),
            left_class: None,
            right_class: None,
        },
    ];

    Some(ComparisonTable {
        left_label: left_config.label,
        right_label: right_config.label,
        rows,
    })
}

#[component]
pub fn ComparisonPanel() -> Element {
    let store = use_context::<Signal<ResultStore>>();
    let body = match comparison_table(&store.read()) {
        Some(table) => rsx! {
            p {
                "Comparing the last analysis run on both models. Analyze the same input on both pages for a direct comparison."
            }
            table { class: "comparison-table",
                thead {
                    tr {
                        th { "Metric" }
                        th { "{table.left_label}" }
                        th { "{table.right_label}" }
                    }
                }
                tbody {
                    for row in table.rows.iter() {
                        tr {
                            td { "{row.metric}" }
                            td { class: row.left_class.clone().unwrap_or_default(), "{row.left}" }
                            td { class: row.right_class.clone().unwrap_or_default(), "{row.right}" }
                        }
                    }
                }
            }
        },
        None => rsx! {
            div { class: "results-card__placeholder",
                h3 { "No Data to Compare" }
                p {
                    "Run an analysis on both the VADER and Hugging Face pages. The results will appear here automatically."
                }
            }
        },
    };

    rsx! {
        section { class: "results-card results-compare",
            div { class: "results-card__header",
                h2 { "Model Comparison" }
            }
            {body}
        }
    }
}
