use std::sync::Arc;

use dioxus::prelude::*;
use quiz_core::model::{OptionLetter, QuestionId};
use tracing::debug;

use crate::context::AppContext;
use crate::views::result::ResultPanel;
use crate::views::scripts::{select_fallback_text, write_clipboard_text};
use crate::views::state::{COPIED_FLASH, CopyState};
use crate::vm::{ProgressVm, QuestionVm, map_quiz};

/// DOM id of the read-only summary shown when the clipboard is unavailable.
pub const FALLBACK_TEXT_ID: &str = "result-summary-text";

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_signal(move || ctx.initial_session());
    let nudge = use_signal(|| None::<String>);
    let copy_state = use_signal(CopyState::default);
    // Writes queue on this lock so they land in the order the clicks happened.
    let persist_lock = use_hook(|| Arc::new(tokio::sync::Mutex::new(())));

    // Memory is updated first; the save runs on its own task and never blocks the form.
    let on_select = {
        let mut session = session;
        let mut nudge = nudge;
        let persist_lock = Arc::clone(&persist_lock);
        use_callback(move |(id, letter): (QuestionId, OptionLetter)| {
            let mut guard = session.write();
            let Some(current) = guard.as_mut() else {
                return;
            };
            if let Err(err) = current.choose(id, letter) {
                debug!(error = %err, "ignored selection");
                return;
            }
            let store = current.store().clone();
            let snapshot = current.answers().clone();
            let pending = current.report().nudge();
            drop(guard);

            if nudge.peek().is_some() {
                nudge.set(pending);
            }
            let persist_lock = Arc::clone(&persist_lock);
            spawn(async move {
                let _queued = persist_lock.lock().await;
                store.save(&snapshot).await;
            });
        })
    };

    let on_show_result = {
        let mut nudge = nudge;
        use_callback(move |()| {
            let pending = session
                .peek()
                .as_ref()
                .and_then(|current| current.report().nudge());
            nudge.set(pending);
        })
    };

    let on_reset = {
        let mut session = session;
        let mut nudge = nudge;
        let mut copy_state = copy_state;
        let persist_lock = Arc::clone(&persist_lock);
        use_callback(move |()| {
            let store = {
                let mut guard = session.write();
                let Some(current) = guard.as_mut() else {
                    return;
                };
                current.clear_answers();
                current.store().clone()
            };
            nudge.set(None);
            copy_state.set(CopyState::Idle);
            let persist_lock = Arc::clone(&persist_lock);
            spawn(async move {
                let _queued = persist_lock.lock().await;
                store.clear().await;
            });
        })
    };

    let on_copy = use_callback(move |text: String| {
        let mut copy_state = copy_state;
        spawn(async move {
            if write_clipboard_text(&text).await {
                copy_state.set(CopyState::Copied);
                tokio::time::sleep(COPIED_FLASH).await;
                if copy_state() == CopyState::Copied {
                    copy_state.set(CopyState::Idle);
                }
            } else {
                debug!("clipboard write failed, showing manual copy");
                copy_state.set(CopyState::Manual);
            }
        });
    });

    use_effect(move || {
        if copy_state() == CopyState::Manual {
            spawn(async move {
                select_fallback_text(FALLBACK_TEXT_ID).await;
            });
        }
    });

    let guard = session.read();
    let Some(current) = guard.as_ref() else {
        return rsx! {
            div { class: "page quiz",
                p { class: "quiz-empty", "No questions found." }
            }
        };
    };
    let vm = map_quiz(current);
    drop(guard);

    let question_nodes = vm.questions.iter().map(|question| {
        let id = QuestionId::new(question.id);
        rsx! {
            QuestionFieldset {
                key: "{question.id}",
                question: question.clone(),
                on_select: move |letter: OptionLetter| on_select.call((id, letter)),
            }
        }
    });

    rsx! {
        div { class: "page quiz",
            if let Some(title) = vm.title.as_ref() {
                h1 { class: "quiz-title", "{title}" }
            }
            ProgressBar { state: vm.progress.clone() }

            div { class: "quiz-questions", {question_nodes} }

            div { class: "quiz-actions",
                if vm.result.is_none() {
                    button {
                        class: "quiz-actions__primary",
                        id: "quiz-show-result",
                        r#type: "button",
                        onclick: move |_| on_show_result.call(()),
                        "Show result"
                    }
                }
                button {
                    class: "quiz-actions__secondary",
                    id: "quiz-reset",
                    r#type: "button",
                    onclick: move |_| on_reset.call(()),
                    "Reset answers"
                }
            }

            if let Some(message) = nudge() {
                p { class: "quiz-nudge", "{message}" }
            }

            if let Some(result) = vm.result.clone() {
                ResultPanel {
                    result,
                    copy_state: copy_state(),
                    on_copy: move |text: String| on_copy.call(text),
                }
            }
        }
    }
}

#[component]
fn ProgressBar(state: ProgressVm) -> Element {
    let label = state.label();
    rsx! {
        div { class: "quiz-progress",
            progress { max: "{state.total}", value: "{state.answered}" }
            span { class: "quiz-progress__label", "{label} answered ({state.percent}%)" }
        }
    }
}

#[component]
fn QuestionFieldset(question: QuestionVm, on_select: EventHandler<OptionLetter>) -> Element {
    let class = if question.answered {
        "question question--answered"
    } else {
        "question"
    };
    let option_nodes = question.options.iter().map(|option| {
        let letter = option.letter;
        rsx! {
            label { key: "{option.input_id}", class: "question-option",
                input {
                    r#type: "radio",
                    id: "{option.input_id}",
                    name: "{question.group_name}",
                    value: "{letter}",
                    checked: option.checked,
                    onchange: move |_| on_select.call(letter),
                }
                span { class: "question-option__letter", "{letter}." }
                span { class: "question-option__text", "{option.text}" }
            }
        }
    });

    rsx! {
        fieldset { class: "{class}", id: "question-{question.id}",
            legend { "{question.id}. {question.prompt}" }
            {option_nodes}
        }
    }
}
