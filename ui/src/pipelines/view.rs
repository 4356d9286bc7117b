//! Shared analyzer page: input capture, submission wiring, and result
//! rendering for one pipeline. All state transitions go through the
//! controller; this component only translates phases and fragments into
//! markup.

use dioxus::prelude::*;

use crate::core::result::AnalysisResult;
use crate::core::store::ResultStore;
use crate::pipelines::client;
use crate::pipelines::controller::{
    Completion, FilePayload, PipelineController, PipelinePhase, SubmissionInput,
};
use crate::pipelines::PipelineConfig;
use crate::results::charts::{build_chart_spec, ChartSurface};
use crate::results::render::{render, KeywordFragment};

#[component]
pub fn AnalyzerView(config: PipelineConfig) -> Element {
    let mut input = use_signal(SubmissionInput::default);
    let mut controller = use_signal(PipelineController::new);
    let mut surface = use_signal(ChartSurface::new);
    let mut chart_error = use_signal(|| None::<String>);
    let mut validation = use_signal(|| None::<String>);
    let mut store = use_context::<Signal<ResultStore>>();

    let text_value = input.read().text().to_string();
    let file_name = input.read().file_name().map(str::to_string);
    let picker_generation = input.read().picker_generation();
    let text_present = !text_value.trim().is_empty();
    let has_file = file_name.is_some();
    let phase = controller.read().phase().clone();
    let busy = phase == PipelinePhase::Loading;

    let submit_config = config.clone();
    let on_submit = move |_| {
        validation.set(None);
        let issued = {
            let captured = input.read();
            controller.write().begin_submit(&captured)
        };
        let (seq, payload) = match issued {
            Ok(issued) => issued,
            Err(err) => {
                validation.set(Some(err.to_string()));
                return;
            }
        };

        let config = submit_config.clone();
        spawn(async move {
            let outcome = client::submit(&config, payload).await;
            match controller.write().complete(seq, outcome) {
                Completion::Stale => {}
                Completion::Failed => {
                    surface.write().release();
                    chart_error.set(None);
                    input.write().reset();
                }
                Completion::Succeeded(result) => {
                    if config.comparable {
                        store.write().set(config.id, result.clone());
                    }
                    mount_chart(&result, &mut surface, &mut chart_error);
                    input.write().reset();
                }
            }
        });
    };

    let on_file_change = move |evt: FormEvent| {
        if let Some(engine) = evt.files() {
            spawn(async move {
                let names = engine.files();
                let Some(name) = names.first().cloned() else {
                    input.write().clear_file();
                    return;
                };
                if let Some(bytes) = engine.read_file(&name).await {
                    input.write().attach_file(FilePayload { name, bytes });
                }
            });
        } else {
            input.write().clear_file();
        }
    };

    let chart_svg = surface.read().live().map(|instance| instance.svg().to_string());
    let file_label = file_name
        .clone()
        .unwrap_or_else(|| "Upload a File (.txt or .csv)".to_string());

    let output = match &phase {
        PipelinePhase::Idle => rsx! {
            p { class: "analyzer__placeholder", "Run an analysis to see results here." }
        },
        PipelinePhase::Loading => rsx! {
            div { class: "analyzer__loader", "Analyzing…" }
        },
        PipelinePhase::Error(message) => rsx! {
            p { class: "analyzer__error", "Error: {message}" }
        },
        PipelinePhase::Success(result) => {
            render_success(&config, result, chart_svg, chart_error.read().clone())
        }
    };

    rsx! {
        article { class: "analyzer",
            div { class: "analyzer__form",
                textarea {
                    class: "analyzer__text",
                    placeholder: "Paste text to analyze…",
                    value: "{text_value}",
                    disabled: has_file,
                    oninput: move |evt| input.write().set_text(evt.value()),
                }

                label { class: "analyzer__file",
                    input {
                        key: "{picker_generation}",
                        r#type: "file",
                        accept: ".txt,.csv",
                        disabled: text_present,
                        onchange: on_file_change,
                    }
                    span { "{file_label}" }
                }

                if has_file {
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| input.write().clear_file(),
                        "Remove file"
                    }
                }

                button {
                    r#type: "button",
                    class: "button button--primary",
                    disabled: busy,
                    onclick: on_submit,
                    "Analyze"
                }

                if let Some(message) = validation.read().as_ref() {
                    p { class: "analyzer__validation", "{message}" }
                }
            }

            div { class: "analyzer__output", {output} }
        }
    }
}

fn mount_chart(
    result: &AnalysisResult,
    surface: &mut Signal<ChartSurface>,
    chart_error: &mut Signal<Option<String>>,
) {
    match result.chart_series.as_deref() {
        Some(series) => match build_chart_spec(result.kind, series) {
            Ok(spec) => {
                chart_error.set(None);
                surface.write().mount(spec);
            }
            Err(err) => {
                surface.write().release();
                chart_error.set(Some(err.to_string()));
            }
        },
        None => {
            surface.write().release();
            chart_error.set(None);
        }
    }
}

fn render_success(
    config: &PipelineConfig,
    result: &AnalysisResult,
    chart_svg: Option<String>,
    chart_error: Option<String>,
) -> Element {
    let fragments = render(config, result);

    let chart_body = fragments.chart.as_ref().map(|_| match (chart_error, chart_svg) {
        (Some(message), _) => rsx! {
            p { class: "chart-card__error", "Chart unavailable: {message}" }
        },
        (None, Some(svg)) => rsx! {
            div { class: "chart-card__surface", dangerous_inner_html: "{svg}" }
        },
        (None, None) => rsx! {
            p { class: "chart-card__error", "Chart unavailable." }
        },
    });

    let keywords_body = fragments.keywords.as_ref().map(|fragment| match fragment {
        KeywordFragment::List(words) => rsx! {
            ul { class: "keywords-card__list",
                for word in words.iter() {
                    li { "{word}" }
                }
            }
        },
        KeywordFragment::Warning(message) => rsx! {
            p { class: "keywords-card__warning", "{message}" }
        },
    });

    rsx! {
        div { class: "analyzer__results",
            section { class: "stats-card",
                h3 { "Analysis Stats" }
                div { class: "stats-grid",
                    for row in fragments.stats.rows.iter() {
                        div { class: "stat-item",
                            div { class: "label", "{row.label}" }
                            div {
                                class: match &row.css_class {
                                    Some(class) => format!("value {class}"),
                                    None => "value".to_string(),
                                },
                                "{row.value}"
                            }
                        }
                    }
                }
                if let Some(notice) = fragments.stats.limit_notice.as_ref() {
                    p { class: "stats-card__notice", "{notice}" }
                }
            }

            if let Some(preview) = fragments.preview.as_ref() {
                section { class: "preview-card",
                    h3 { "Data Preview" }
                    div { class: "preview-table-wrapper",
                        table { class: "preview-table",
                            thead {
                                tr {
                                    for cell in preview.header.iter() {
                                        th { "{cell}" }
                                    }
                                }
                            }
                            tbody {
                                for row in preview.rows.iter() {
                                    tr {
                                        for cell in row.iter() {
                                            td { "{cell}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(body) = chart_body {
                section { class: "chart-card",
                    h3 { "Chart" }
                    {body}
                }
            }

            if let Some(body) = keywords_body {
                section { class: "keywords-card",
                    h3 { "Top Words" }
                    {body}
                }
            }
        }
    }
}
