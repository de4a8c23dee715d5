//! Question value object and input validation

use super::error_kind::ErrorKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound on question length, in characters after trimming.
pub const MAX_QUESTION_CHARS: usize = 1000;

/// Why a transcription was rejected before resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputRejection {
    #[error("transcription is empty")]
    Empty,

    #[error("transcription too long: {chars} characters (max {max})")]
    TooLong { chars: usize, max: usize },
}

impl InputRejection {
    /// Both rejections are reported as [`ErrorKind::NoInput`]: the caller
    /// asks the user to speak again rather than truncating.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::NoInput
    }
}

/// Validates raw transcribed text.
///
/// Pure: returns `None` when the text is acceptable.
pub fn validate(text: &str) -> Option<InputRejection> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(InputRejection::Empty);
    }
    let chars = trimmed.chars().count();
    if chars > MAX_QUESTION_CHARS {
        return Some(InputRejection::TooLong {
            chars,
            max: MAX_QUESTION_CHARS,
        });
    }
    None
}

/// A customer question accepted for resolution (Value Object)
///
/// Holds the trimmed transcription; always 1 to [`MAX_QUESTION_CHARS`]
/// characters long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    content: String,
}

impl Question {
    /// Validate and wrap a transcription.
    pub fn parse(text: &str) -> Result<Self, InputRejection> {
        match validate(text) {
            Some(rejection) => Err(rejection),
            None => Ok(Self {
                content: text.trim().to_string(),
            }),
        }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl<'de> Deserialize<'de> for Question {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Question::parse(&raw).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<&str> for Question {
    type Error = InputRejection;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Question::parse(s)
    }
}
