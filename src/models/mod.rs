pub mod answer;
pub mod question;
pub mod report;
pub mod selection;

pub use answer::{Answer, AnswerRecord, Confidence, NO_ANSWER_TEXT};
pub use question::QuestionItem;
pub use report::{ReportEntry, ReportModel, LOW_CONFIDENCE_NOTE, NO_ANSWER_NOTE};
pub use selection::SelectionPolicy;
