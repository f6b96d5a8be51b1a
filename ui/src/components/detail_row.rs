use dioxus::prelude::*;

/// One `label: value` line of a details card.
#[component]
pub fn DetailRow(label: String, value: String, #[props(default)] badge: bool) -> Element {
    rsx! {
        div {
            class: "detail-row",
            span { class: "detail-label", "{label}" }
            if badge {
                span { class: "detail-value badge", "{value}" }
            } else {
                span { class: "detail-value", "{value}" }
            }
        }
    }
}
