//! CSV export of the shared result store. One fixed-header file with one row
//! per comparable pipeline, in registry order, delivered as a browser
//! download on the web and written under the project data dir elsewhere.

use dioxus::prelude::*;

use crate::core::error::MissingDataError;
use crate::core::format;
use crate::core::store::ResultStore;
use crate::pipelines::{self, COMPARABLE};

pub const EXPORT_FILENAME: &str = "sentiscope-comparison.csv";
pub const CSV_HEADER: &str = "Model,AnalysisType,Sentiment,ScoreLabel,Score,ExecutionTime";

/// Builds the comparison CSV, or fails without producing a partial file if
/// either comparable slot is still empty.
pub fn build_comparison_csv(store: &ResultStore) -> Result<String, MissingDataError> {
    let mut sides = Vec::with_capacity(COMPARABLE.len());
    for config in COMPARABLE {
        sides.push((config, store.get(config.id).ok_or(MissingDataError)?));
    }

    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');
    for (config, result) in sides {
        // Emitted fields are model names, enum labels, and numbers; none embed
        // a delimiter today, and the upstream format leaves fields unquoted,
        // so rows go out as-is.
        let fields = [
            format::text_or_na(result.model.as_deref()),
            result.kind.as_str().to_string(),
            format::text_or_na(result.sentiment.as_deref()),
            pipelines::score_label(config, result.kind).to_string(),
            format::format_score(result.kind, result.score),
            result
                .execution_time
                .map(|secs| secs.to_string())
                .unwrap_or_else(|| format::NOT_AVAILABLE.to_string()),
        ];
        csv.push_str(&fields.join(","));
        csv.push('\n');
    }

    Ok(csv)
}

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Done(String),
    Error(String),
}

#[component]
pub fn ExportPanel() -> Element {
    let store = use_context::<Signal<ResultStore>>();
    let mut status = use_signal(|| ExportStatus::Idle);

    let feedback = match &*status.read() {
        ExportStatus::Idle => None,
        ExportStatus::Done(message) => Some((
            "results-card__meta results-card__meta--success".to_string(),
            message.clone(),
        )),
        ExportStatus::Error(err) => Some((
            "results-card__meta results-card__meta--error".to_string(),
            err.clone(),
        )),
    };

    let on_export = move |_| {
        let outcome = build_comparison_csv(&store.read())
            .map_err(|err| err.to_string())
            .and_then(|csv| download_csv(EXPORT_FILENAME, csv.into_bytes()));
        match outcome {
            Ok(Some(path)) => status.set(ExportStatus::Done(format!("CSV saved to {path}"))),
            Ok(None) => status.set(ExportStatus::Done("CSV download started".to_string())),
            Err(err) => status.set(ExportStatus::Error(err)),
        }
    };

    rsx! {
        section { class: "results-card results-export",
            div { class: "results-card__header",
                h2 { "Export" }
            }

            p { "Download the current comparison as a CSV for deeper analysis." }

            div { class: "results-export__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: on_export,
                    "Export CSV"
                }
            }

            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }
        }
    }
}

/// Delivers the CSV bytes. Returns the saved path on platforms that write to
/// disk, `None` when the browser takes over the download.
fn download_csv(filename: &str, bytes: Vec<u8>) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type("text/csv");
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Unable to create download".to_string())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;
        use std::io::Write;

        let dirs = directories::ProjectDirs::from("com", "SentiScope", "SentiScope")
            .ok_or("Unable to determine export directory")?;
        let dir = dirs.data_dir().join("exports");
        fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(filename);
        let mut file = fs::File::create(&path).map_err(|err| err.to_string())?;
        file.write_all(&bytes).map_err(|err| err.to_string())?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::result::{AnalysisKind, AnalysisResult};
    use crate::pipelines::{TRANSFORMER, VADER};

    fn result(model: &str, kind: AnalysisKind, score: f64) -> AnalysisResult {
        AnalysisResult {
            model: Some(model.into()),
            kind,
            sentiment: Some(if kind == AnalysisKind::Batch {
                "Summary".into()
            } else {
                "Positive".into()
            }),
            score: Some(score),
            execution_time: Some(0.1234),
            preview_rows: None,
            chart_series: None,
            top_words: None,
            limit_info: None,
        }
    }

    #[test]
    fn export_requires_both_comparable_slots() {
        let mut store = ResultStore::new();
        assert_eq!(build_comparison_csv(&store), Err(MissingDataError));

        store.set(VADER.id, result("VADER", AnalysisKind::Single, 0.82));
        assert_eq!(build_comparison_csv(&store), Err(MissingDataError));
    }

    #[test]
    fn csv_has_header_plus_two_rows_in_fixed_order() {
        let mut store = ResultStore::new();
        // Populated transformer-first to prove the output order is fixed.
        store.set(
            TRANSFORMER.id,
            result("Hugging Face", AnalysisKind::Single, 0.9731),
        );
        store.set(VADER.id, result("VADER", AnalysisKind::Batch, 50.0));

        let csv = build_comparison_csv(&store).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "VADER,batch,Summary,Total Reviews,50,0.1234");
        assert_eq!(
            lines[2],
            "Hugging Face,single,Positive,Confidence,0.9731,0.1234"
        );
    }

    #[test]
    fn batch_rows_never_use_a_confidence_label() {
        let mut store = ResultStore::new();
        store.set(VADER.id, result("VADER", AnalysisKind::Batch, 20.0));
        store.set(
            TRANSFORMER.id,
            result("Hugging Face", AnalysisKind::Batch, 20.0),
        );

        let csv = build_comparison_csv(&store).unwrap();
        assert!(!csv.contains("Confidence"));
        assert_eq!(csv.matches("Total Reviews").count(), 2);
    }
}
