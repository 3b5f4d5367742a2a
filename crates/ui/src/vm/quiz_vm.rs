use quiz_core::model::{OptionLetter, QuestionState};
use services::{QuizReport, QuizSession};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub letter: OptionLetter,
    pub text: String,
    pub checked: bool,
    /// DOM id tying the radio to its label, e.g. `q3-B`.
    pub input_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub id: u32,
    pub prompt: String,
    pub group_name: String,
    pub answered: bool,
    pub options: Vec<OptionVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub answered: u32,
    pub total: u32,
    pub percent: u32,
}

impl ProgressVm {
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} / {}", self.answered, self.total)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountVm {
    pub code: &'static str,
    pub name: &'static str,
    pub count: u32,
    pub is_top: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub counts: Vec<CountVm>,
    pub top_label: String,
    pub tie_note: Option<&'static str>,
    pub pair_label: Option<String>,
    pub blurb: Option<String>,
    pub summary_text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub title: Option<String>,
    pub questions: Vec<QuestionVm>,
    pub progress: ProgressVm,
    /// Present only once every question has an answer.
    pub result: Option<ResultVm>,
}

const TIE_NOTE: &str = "More than one style shares the top score, so no pair is shown.";

#[must_use]
pub fn map_quiz(session: &QuizSession) -> QuizVm {
    let bank = session.bank();
    let questions = bank
        .questions()
        .iter()
        .map(|question| {
            let id = question.id().value();
            let selected = match session.state(question.id()) {
                QuestionState::Answered(letter) => Some(letter),
                QuestionState::Unanswered => None,
            };
            QuestionVm {
                id,
                prompt: question.prompt().to_string(),
                group_name: format!("q{id}"),
                answered: selected.is_some(),
                options: question
                    .options()
                    .map(|(letter, text)| OptionVm {
                        letter,
                        text: text.to_string(),
                        checked: selected == Some(letter),
                        input_id: format!("q{id}-{letter}"),
                    })
                    .collect(),
            }
        })
        .collect();

    let progress = session.progress();
    let report = session.report();

    QuizVm {
        title: bank.title().map(str::to_owned),
        questions,
        progress: ProgressVm {
            answered: progress.answered,
            total: progress.total,
            percent: progress.percent(),
        },
        result: report.is_complete().then(|| map_result(&report)),
    }
}

#[must_use]
pub fn map_result(report: &QuizReport) -> ResultVm {
    let evaluation = &report.evaluation;
    let counts = evaluation
        .scores
        .iter()
        .map(|(category, count)| CountVm {
            code: category.code(),
            name: category.name(),
            count,
            is_top: evaluation.top.contains(&category),
        })
        .collect();

    ResultVm {
        counts,
        top_label: report.top_label(),
        tie_note: evaluation.is_tied().then_some(TIE_NOTE),
        pair_label: report.pair_label(),
        blurb: report.blurb.clone(),
        summary_text: report.summary_text(),
    }
}
