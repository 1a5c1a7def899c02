//! Built-in issue-report questionnaire fixture.
//!
//! Four questions, ids 1 through 4: a category choice, an image choice,
//! a numeric severity rating, and a free-text outcome field.

use std::sync::LazyLock;

use crate::models::{Question, QuestionKind};

/// Wording of the image question (id 2).
///
/// The fixture ships in two variants that differ only in this prompt;
/// which one a widget build shows is a configuration choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImagePrompt {
    /// "Choose an image similar to the issue:"
    #[default]
    Choose,
    /// "Upload an image of the issue:"
    Upload,
}

impl ImagePrompt {
    fn text(self) -> &'static str {
        match self {
            ImagePrompt::Choose => "Choose an image similar to the issue:",
            ImagePrompt::Upload => "Upload an image of the issue:",
        }
    }
}

static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| build_questions(ImagePrompt::Choose));

/// The built-in question sequence, in ascending id order.
///
/// Deterministic and infallible; every call returns the same slice.
pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

/// Builds the fixture with a specific image-prompt wording.
pub fn questions_with_image_prompt(prompt: ImagePrompt) -> Vec<Question> {
    build_questions(prompt)
}

fn build_questions(prompt: ImagePrompt) -> Vec<Question> {
    vec![
        Question {
            id: 1,
            text: "What category does your issue fall under?".to_string(),
            kind: QuestionKind::TextEnum {
                options: strings(&["Software", "Hardware", "Other"]),
            },
        },
        Question {
            id: 2,
            text: prompt.text().to_string(),
            kind: QuestionKind::ImageEnum {
                options: strings(&["/logo1.png", "/vite.svg"]),
            },
        },
        Question {
            id: 3,
            text: "How severe is the issue?".to_string(),
            kind: QuestionKind::Number,
        },
        Question {
            id: 4,
            text: "Describe the expected outcome:".to_string(),
            kind: QuestionKind::Text,
        },
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
