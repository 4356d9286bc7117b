//! Pure mapping from one analysis result to view fragments. No view
//! technology in here; the page components only translate these fragments
//! into markup.

use crate::core::error::RenderError;
use crate::core::format;
use crate::core::result::AnalysisResult;
use crate::pipelines::{self, PipelineConfig};
use crate::results::charts::{build_chart_spec, ChartSpec};

#[derive(Debug, Clone, PartialEq)]
pub struct ViewFragments {
    pub stats: StatsBlock,
    /// Absent unless the result carried a non-empty preview table.
    pub preview: Option<PreviewTable>,
    /// Absent when there is no chart series; a failed build is carried as the
    /// error so only the chart region degrades.
    pub chart: Option<Result<ChartSpec, RenderError>>,
    pub keywords: Option<KeywordFragment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatsBlock {
    pub rows: Vec<StatRow>,
    pub limit_notice: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatRow {
    pub label: &'static str,
    pub value: String,
    pub css_class: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum KeywordFragment {
    List(Vec<String>),
    /// The first entry was a sentinel signalling extraction failure rather
    /// than a real keyword.
    Warning(String),
}

pub fn render(config: &PipelineConfig, result: &AnalysisResult) -> ViewFragments {
    let sentiment_class = {
        let class = format::sentiment_class(result.sentiment.as_deref());
        (!class.is_empty()).then_some(class)
    };

    let rows = vec![
        StatRow {
            label: "Model",
            value: format::text_or_na(result.model.as_deref()),
            css_class: None,
        },
        StatRow {
            label: "Execution Time",
            value: format::format_seconds(result.execution_time),
            css_class: None,
        },
        StatRow {
            label: "Sentiment",
            value: format::text_or_na(result.sentiment.as_deref()),
            css_class: sentiment_class.clone(),
        },
        StatRow {
            // Unit follows the analysis kind, never the pipeline name.
            label: pipelines::score_label(config, result.kind),
            value: format::format_score(result.kind, result.score),
            css_class: sentiment_class,
        },
    ];

    let preview = result
        .preview_rows
        .as_ref()
        .filter(|rows| !rows.is_empty())
        .map(|rows| PreviewTable {
            header: rows[0].clone(),
            rows: rows[1..].to_vec(),
        });

    let chart = result
        .chart_series
        .as_ref()
        .map(|series| build_chart_spec(result.kind, series));

    let keywords = result.top_words.as_ref().map(|words| {
        match words.first() {
            Some(first) if keyword_sentinel(first) => KeywordFragment::Warning(first.clone()),
            _ => KeywordFragment::List(words.clone()),
        }
    });

    ViewFragments {
        stats: StatsBlock {
            rows,
            limit_notice: result.limit_info.clone(),
        },
        preview,
        chart,
        keywords,
    }
}

// The extraction backend reports failures inline as the sole list entry.
fn keyword_sentinel(entry: &str) -> bool {
    let lowered = entry.to_lowercase();
    lowered.contains("error") || lowered.contains("no significant keywords")
}
