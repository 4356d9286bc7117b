use dioxus::prelude::*;

use crate::pipelines::{self, AnalyzerView};

#[component]
pub fn Vader() -> Element {
    rsx! {
        section { class: "page page-analyzer",
            h1 { "VADER Sentiment Analysis" }
            p { class: "page-analyzer__blurb",
                "Lexicon-based scoring tuned for short, informal text. Fast, and strongest on social-media style input."
            }
            AnalyzerView { config: pipelines::VADER.clone() }
        }
    }
}
