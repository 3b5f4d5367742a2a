use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::QuestionBank;
use quiz_core::model::{AnswerSet, OptionLetter, QuestionId};
use services::{AnswerStore, QuizSession};
use storage::repository::InMemoryRepository;

use crate::context::{UiApp, build_app_context};
use crate::views::{CopyState, QuizView, ResultPanel};
use crate::vm::ResultVm;

pub const TEST_BANK: &str = "\
# Work style check
1. Under pressure I
A. take charge
B. rally people
C. keep things calm
D. check the details

2. In meetings I
A. push for a decision
B. share ideas
C. listen first
D. ask for data

pair D-i: Decisive and persuasive.
";

struct TestApp {
    session: Option<QuizSession>,
}

impl UiApp for TestApp {
    fn initial_session(&self) -> Option<QuizSession> {
        self.session.clone()
    }
}

#[derive(Props, Clone)]
struct QuizHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarness(props: QuizHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { QuizView {} }
}

#[derive(Props, Clone, PartialEq)]
struct ResultHarnessProps {
    result: ResultVm,
    copy_state: CopyState,
}

#[component]
fn ResultHarness(props: ResultHarnessProps) -> Element {
    rsx! {
        ResultPanel {
            result: props.result.clone(),
            copy_state: props.copy_state,
            on_copy: move |_: String| {},
        }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        self.dom.process_events();
        self.dom.render_immediate(&mut NoOpMutations);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

/// A session over `TEST_BANK` with the given answers already chosen.
pub fn test_session(answers: &[(u32, OptionLetter)]) -> QuizSession {
    let bank = Arc::new(QuestionBank::from_markup(TEST_BANK).expect("test bank"));
    let store = AnswerStore::new(Arc::new(InMemoryRepository::new()));
    let answers: AnswerSet = answers
        .iter()
        .map(|(id, letter)| (QuestionId::new(*id), *letter))
        .collect();
    QuizSession::new(bank, store, answers)
}

pub fn setup_view_harness(session: Option<QuizSession>) -> ViewHarness {
    let app = Arc::new(TestApp { session });
    let mut harness = ViewHarness {
        dom: VirtualDom::new_with_props(QuizHarness, QuizHarnessProps { app }),
    };
    harness.rebuild();
    harness
}

pub fn setup_result_harness(result: ResultVm, copy_state: CopyState) -> ViewHarness {
    let mut harness = ViewHarness {
        dom: VirtualDom::new_with_props(ResultHarness, ResultHarnessProps { result, copy_state }),
    };
    harness.rebuild();
    harness
}
