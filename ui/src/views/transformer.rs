use dioxus::prelude::*;

use crate::pipelines::{self, AnalyzerView};

#[component]
pub fn Transformer() -> Element {
    rsx! {
        section { class: "page page-analyzer",
            h1 { "Hugging Face Sentiment Analysis" }
            p { class: "page-analyzer__blurb",
                "Transformer-based classification. Slower than a lexicon, but better at context and negation."
            }
            AnalyzerView { config: pipelines::TRANSFORMER.clone() }
        }
    }
}
