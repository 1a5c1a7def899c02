//! # survey-fixtures
//!
//! Mock questionnaire data for an interactive issue-report widget.
//!
//! The crate ships a built-in four-question fixture and a JSON loader for
//! swapping in alternative fixture files. The built-in sequence is constant
//! data, initialized once and safe to read from any thread.
//!
//! ## Usage
//!
//! ```rust
//! use survey_fixtures::questions;
//!
//! for question in questions() {
//!     println!("{}. {}", question.id, question.text);
//! }
//! ```
//!
//! Loading a fixture file instead:
//!
//! ```rust,no_run
//! use survey_fixtures::{LoadError, load_questions_from_json};
//!
//! fn main() -> Result<(), LoadError> {
//!     let questions = load_questions_from_json("questions.json")?;
//!     assert!(!questions.is_empty());
//!     Ok(())
//! }
//! ```

mod data;
mod models;

pub use data::{
    ImagePrompt, InvalidFixture, LoadError, load_questions_from_json, questions,
    questions_with_image_prompt, validate,
};
pub use models::{Question, QuestionKind};
