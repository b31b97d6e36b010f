use dioxus::prelude::*;

#[component]
pub fn Timeline() -> Element {
    rsx! {
        section { class: "timeline",
            p { class: "timeline-placeholder", "タイムラインは準備中です" }
        }
    }
}
