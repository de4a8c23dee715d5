//! Error kinds and their fixed response table.
//!
//! Every [`ErrorKind`] maps to exactly one `(message, retry, severity)`
//! triple. The mapping is an exhaustive `match`, so adding a kind without
//! a response entry does not compile.

use super::severity::Severity;
use serde::{Deserialize, Serialize};

/// Closed set of failure kinds surfaced to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The transcription was empty or could not be accepted.
    NoInput,
    /// Speech-to-text failed upstream.
    TranscriptionFailed,
    /// The knowledge base could not be searched.
    KnowledgeBaseError,
    /// The generative model failed.
    GenerationError,
    /// The caller-side deadline was exceeded.
    Timeout,
    /// Anything not tagged with a kind.
    Unknown,
}

impl ErrorKind {
    /// All kinds, in declaration order.
    pub const ALL: [ErrorKind; 6] = [
        ErrorKind::NoInput,
        ErrorKind::TranscriptionFailed,
        ErrorKind::KnowledgeBaseError,
        ErrorKind::GenerationError,
        ErrorKind::Timeout,
        ErrorKind::Unknown,
    ];

    /// Stable identifier used in categories (`error_<id>`) and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NoInput => "no_input",
            ErrorKind::TranscriptionFailed => "transcription_failed",
            ErrorKind::KnowledgeBaseError => "knowledge_base_error",
            ErrorKind::GenerationError => "bedrock_error",
            ErrorKind::Timeout => "timeout",
            ErrorKind::Unknown => "unknown",
        }
    }

    /// User-facing message read out to the caller.
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::NoInput => {
                "申し訳ございません。音声が聞き取れませんでした。もう一度はっきりとお話しください。"
            }
            ErrorKind::TranscriptionFailed => {
                "申し訳ございません。音声の処理に失敗しました。もう一度お試しください。"
            }
            ErrorKind::KnowledgeBaseError => {
                "申し訳ございません。情報の検索に失敗しました。技術サポートまでお問い合わせください。"
            }
            ErrorKind::GenerationError => {
                "現在システムが混雑しております。しばらくしてからおかけ直しください。"
            }
            ErrorKind::Timeout => "処理に時間がかかっています。もう少々お待ちください。",
            ErrorKind::Unknown => {
                "システムエラーが発生しました。技術サポートまでお問い合わせください。"
            }
        }
    }

    /// Whether the caller should prompt the user to repeat their input.
    pub fn retry(&self) -> bool {
        match self {
            ErrorKind::NoInput | ErrorKind::TranscriptionFailed => true,
            ErrorKind::KnowledgeBaseError
            | ErrorKind::GenerationError
            | ErrorKind::Timeout
            | ErrorKind::Unknown => false,
        }
    }

    /// Severity the failure is logged at.
    pub fn severity(&self) -> Severity {
        match self {
            ErrorKind::NoInput | ErrorKind::TranscriptionFailed => Severity::Warning,
            ErrorKind::KnowledgeBaseError
            | ErrorKind::GenerationError
            | ErrorKind::Timeout
            | ErrorKind::Unknown => Severity::Error,
        }
    }

    /// Category reported for an error outcome of this kind.
    pub fn category(&self) -> String {
        format!("error_{}", self.as_str())
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
