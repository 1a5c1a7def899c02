mod fixture;
mod loader;

pub use fixture::{ImagePrompt, questions, questions_with_image_prompt};
pub use loader::{InvalidFixture, LoadError, load_questions_from_json, validate};
