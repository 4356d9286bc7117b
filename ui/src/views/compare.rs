use dioxus::prelude::*;

use crate::results::{ComparisonPanel, ExportPanel};

#[component]
pub fn Compare() -> Element {
    rsx! {
        section { class: "page page-compare",
            h1 { "Compare Models" }
            ComparisonPanel {}
            ExportPanel {}
        }
    }
}
