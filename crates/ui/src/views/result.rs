use dioxus::prelude::*;

use crate::views::quiz::FALLBACK_TEXT_ID;
use crate::views::state::CopyState;
use crate::vm::ResultVm;

#[component]
pub fn ResultPanel(result: ResultVm, copy_state: CopyState, on_copy: EventHandler<String>) -> Element {
    let summary = result.summary_text.clone();
    let count_rows = result.counts.iter().map(|count| {
        let class = if count.is_top { "result-count result-count--top" } else { "result-count" };
        rsx! {
            div { key: "{count.code}", class: "{class}",
                dt { "{count.code} ({count.name})" }
                dd { "{count.count}" }
            }
        }
    });

    rsx! {
        section { class: "result", id: "quiz-result",
            h2 { "Your result" }
            dl { class: "result-counts", {count_rows} }

            p { class: "result-top", "Top: {result.top_label}" }
            if let Some(note) = result.tie_note {
                p { class: "result-tie", "{note}" }
            }
            if let Some(pair) = result.pair_label.as_ref() {
                p { class: "result-pair", "Pair: {pair}" }
            }
            if let Some(blurb) = result.blurb.as_ref() {
                p { class: "result-blurb", "{blurb}" }
            }

            div { class: "result-actions",
                button {
                    class: "result-actions__copy",
                    id: "result-copy",
                    r#type: "button",
                    onclick: move |_| on_copy.call(summary.clone()),
                    "Copy result"
                }
                if let Some(message) = copy_state.message() {
                    span { class: "result-actions__status", "{message}" }
                }
            }

            if copy_state == CopyState::Manual {
                textarea {
                    class: "result-fallback",
                    id: FALLBACK_TEXT_ID,
                    readonly: true,
                    rows: "8",
                    value: "{result.summary_text}",
                }
            }
        }
    }
}
