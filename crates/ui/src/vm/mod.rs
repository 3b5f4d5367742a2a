mod quiz_vm;

pub use quiz_vm::{
    CountVm, OptionVm, ProgressVm, QuestionVm, QuizVm, ResultVm, map_quiz, map_result,
};
