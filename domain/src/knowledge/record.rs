//! Q&A record entity

use serde::{Deserialize, Serialize};

/// Maximum recommended answer length, in characters.
pub const MAX_ANSWER_CHARS: usize = 2000;

/// A curated question/answer unit used by the local matcher.
///
/// `keywords` may be absent in the source document (treated as empty)
/// but must not be `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaRecord {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl QaRecord {
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
            category: category.into(),
            keywords: Vec::new(),
        }
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_record() {
        let json = r#"{
            "id": "1",
            "question": "レシート再発行",
            "answer": "再発行手順…",
            "category": "receipt",
            "keywords": ["レシート", "再発行"]
        }"#;
        let record: QaRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "1");
        assert_eq!(record.keywords, vec!["レシート", "再発行"]);
    }

    #[test]
    fn test_missing_keywords_default_to_empty() {
        let json = r#"{"id":"2","question":"q","answer":"a","category":"c"}"#;
        let record: QaRecord = serde_json::from_str(json).unwrap();
        assert!(record.keywords.is_empty());
    }

    #[test]
    fn test_null_keywords_rejected() {
        let json = r#"{"id":"2","question":"q","answer":"a","category":"c","keywords":null}"#;
        assert!(serde_json::from_str::<QaRecord>(json).is_err());
    }

    #[test]
    fn test_builder() {
        let record = QaRecord::new("r1", "How do I reprint a receipt?", "Press F3.", "receipt")
            .with_keywords(["receipt", "reprint"]);
        assert_eq!(record.keywords.len(), 2);
        assert_eq!(record.category, "receipt");
    }
}
