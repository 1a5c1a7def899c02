//! Loads question fixtures from JSON files.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::models::Question;

/// Error loading a fixture file.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The file is not valid question JSON.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The parsed questions break a fixture invariant.
    Invalid(InvalidFixture),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            LoadError::Parse { path, source } => {
                write!(f, "failed to parse {}: {}", path.display(), source)
            }
            LoadError::Invalid(e) => write!(f, "invalid fixture: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Parse { source, .. } => Some(source),
            LoadError::Invalid(e) => Some(e),
        }
    }
}

impl From<InvalidFixture> for LoadError {
    fn from(err: InvalidFixture) -> Self {
        LoadError::Invalid(err)
    }
}

/// A broken fixture invariant, caught when loading external data or by
/// tests over the built-in sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidFixture {
    /// The sequence contains no questions.
    Empty,
    /// The question at `index` has id 0.
    ZeroId { index: usize },
    /// Two questions share an id.
    DuplicateId { id: u32 },
    /// A question has an empty prompt.
    EmptyText { id: u32 },
    /// A choice question has no options.
    NoOptions { id: u32 },
    /// A choice question has a blank option string.
    BlankOption { id: u32, index: usize },
}

impl fmt::Display for InvalidFixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidFixture::Empty => write!(f, "must contain at least one question"),
            InvalidFixture::ZeroId { index } => {
                write!(f, "question at position {} has id 0", index)
            }
            InvalidFixture::DuplicateId { id } => write!(f, "duplicate question id {}", id),
            InvalidFixture::EmptyText { id } => write!(f, "question {} has empty text", id),
            InvalidFixture::NoOptions { id } => {
                write!(f, "choice question {} has no options", id)
            }
            InvalidFixture::BlankOption { id, index } => {
                write!(f, "question {} has a blank option at position {}", id, index)
            }
        }
    }
}

impl std::error::Error for InvalidFixture {}

/// Loads and validates questions from a JSON file.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();

    let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let questions: Vec<Question> =
        serde_json::from_str(&json).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    validate(&questions)?;
    debug!("loaded {} questions from {}", questions.len(), path.display());

    Ok(questions)
}

/// Checks the invariants every question sequence must hold: at least one
/// question, unique positive ids, non-empty prompts, and non-empty options
/// on the choice kinds.
pub fn validate(questions: &[Question]) -> Result<(), InvalidFixture> {
    if questions.is_empty() {
        return Err(InvalidFixture::Empty);
    }

    let mut seen = HashSet::new();
    for (index, question) in questions.iter().enumerate() {
        if question.id == 0 {
            return Err(InvalidFixture::ZeroId { index });
        }
        if !seen.insert(question.id) {
            return Err(InvalidFixture::DuplicateId { id: question.id });
        }
        if question.text.trim().is_empty() {
            return Err(InvalidFixture::EmptyText { id: question.id });
        }
        if let Some(options) = question.kind.options() {
            if options.is_empty() {
                return Err(InvalidFixture::NoOptions { id: question.id });
            }
            if let Some(blank) = options.iter().position(|option| option.trim().is_empty()) {
                return Err(InvalidFixture::BlankOption {
                    id: question.id,
                    index: blank,
                });
            }
        }
    }

    Ok(())
}
