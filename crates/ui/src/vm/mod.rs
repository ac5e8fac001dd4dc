mod quiz_card_vm;
mod results_vm;

pub use quiz_card_vm::{OptionState, OptionVm, QuizCardVm};
pub use results_vm::ResultsVm;
