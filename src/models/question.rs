use serde::{Deserialize, Serialize};

/// A single questionnaire prompt.
///
/// Serializes to the shape the widget consumes:
/// `{ "id": 1, "text": "...", "type": "text-enum", "options": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique positive identifier, stable ordering key.
    pub id: u32,
    /// Human-readable prompt.
    pub text: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

/// How a question is answered, tagged by the `type` field.
///
/// The choice kinds carry their options inline, so free-form questions
/// cannot have options at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuestionKind {
    /// Pick one of a fixed set of text labels.
    TextEnum { options: Vec<String> },
    /// Pick one of a fixed set of images; each option is a resource path.
    ImageEnum { options: Vec<String> },
    /// Free-form numeric input.
    Number,
    /// Free-form text input.
    Text,
}

impl QuestionKind {
    /// The options for the choice kinds, `None` for free-form input.
    pub fn options(&self) -> Option<&[String]> {
        match self {
            QuestionKind::TextEnum { options } | QuestionKind::ImageEnum { options } => {
                Some(options)
            }
            QuestionKind::Number | QuestionKind::Text => None,
        }
    }

    /// Whether answering means selecting one of `options`.
    pub fn is_choice(&self) -> bool {
        self.options().is_some()
    }

    /// The wire tag for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            QuestionKind::TextEnum { .. } => "text-enum",
            QuestionKind::ImageEnum { .. } => "image-enum",
            QuestionKind::Number => "number",
            QuestionKind::Text => "text",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_serialization() {
        let question = Question {
            id: 1,
            text: "What category does your issue fall under?".to_string(),
            kind: QuestionKind::TextEnum {
                options: vec!["Software".to_string(), "Hardware".to_string()],
            },
        };
        let json = serde_json::to_string(&question).unwrap();
        assert!(json.contains("\"id\":1"));
        assert!(json.contains("\"type\":\"text-enum\""));
        assert!(json.contains("\"options\":[\"Software\",\"Hardware\"]"));
    }

    #[test]
    fn test_free_form_serialization_has_no_options_key() {
        let question = Question {
            id: 3,
            text: "How severe is the issue?".to_string(),
            kind: QuestionKind::Number,
        };
        let json = serde_json::to_string(&question).unwrap();
        assert!(json.contains("\"type\":\"number\""));
        assert!(!json.contains("options"));
    }

    #[test]
    fn test_round_trip() {
        let question = Question {
            id: 2,
            text: "Choose an image similar to the issue:".to_string(),
            kind: QuestionKind::ImageEnum {
                options: vec!["/logo1.png".to_string(), "/vite.svg".to_string()],
            },
        };
        let json = serde_json::to_string(&question).unwrap();
        let parsed: Question = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, question);
    }

    #[test]
    fn test_kind_accessors() {
        let choice = QuestionKind::ImageEnum {
            options: vec!["/vite.svg".to_string()],
        };
        assert!(choice.is_choice());
        assert_eq!(choice.tag(), "image-enum");
        assert_eq!(choice.options().unwrap().len(), 1);

        assert!(!QuestionKind::Text.is_choice());
        assert_eq!(QuestionKind::Text.tag(), "text");
        assert!(QuestionKind::Number.options().is_none());
    }
}
