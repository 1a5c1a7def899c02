mod question;

pub use question::{Question, QuestionKind};
