pub mod charts;
pub mod compare;
pub mod export;
pub mod render;

pub use charts::{
    build_chart_spec, color_for_label, ChartInstance, ChartKind, ChartSlice, ChartSpec,
    ChartSurface,
};
pub use compare::{comparison_table, ComparisonPanel, ComparisonRow, ComparisonTable};
pub use export::{build_comparison_csv, ExportPanel, CSV_HEADER, EXPORT_FILENAME};
pub use render::{render, KeywordFragment, PreviewTable, StatRow, StatsBlock, ViewFragments};
