pub mod answer_flow;
pub mod retry;

pub use answer_flow::{normalize_answer, AnswerResolver};
pub use retry::{RetryPolicy, Sleeper, TokioSleeper};
