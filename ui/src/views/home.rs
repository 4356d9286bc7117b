use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { "SentiScope" }
            p { "Run the same text through two sentiment models and see where they agree." }

            ul { class: "page-home__features",
                li { "VADER: lexicon-based scoring, instant results." }
                li { "Hugging Face: transformer classification with confidence scores." }
                li { "Top Words: keyword extraction for a quick topical read." }
            }
            p { class: "page-home__cta",
                "Paste a sentence or upload a CSV of reviews on any analyzer page, then open Compare to see both models side by side."
            }
        }
    }
}
