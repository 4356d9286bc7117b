use dioxus::prelude::*;

use crate::pipelines::{self, AnalyzerView};

#[component]
pub fn Keywords() -> Element {
    rsx! {
        section { class: "page page-analyzer",
            h1 { "Top Words" }
            p { class: "page-analyzer__blurb",
                "Extracts the most significant keywords from the input. Runs standalone and never feeds the model comparison."
            }
            AnalyzerView { config: pipelines::KEYWORDS.clone() }
        }
    }
}
