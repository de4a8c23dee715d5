//! Prompt templates for the generative fallback

/// Templates for the generation step
pub struct PromptTemplate;

impl PromptTemplate {
    /// Instructional prompt embedding the caller's question.
    ///
    /// The assistant plays a register-system support agent and is asked for
    /// short, procedural answers suitable for text-to-speech.
    pub fn support_answer(question: &str) -> String {
        format!(
            r#"あなたはレジシステムのサポート担当者です。
以下の質問に対して、丁寧で簡潔な回答を提供してください。
技術的な詳細は避け、実際の操作手順を中心に説明してください。

質問: {}

回答:"#,
            question
        )
    }

    /// Read out when generation fails after a low-confidence lookup.
    pub fn generation_apology() -> &'static str {
        "申し訳ございませんが、該当する情報が見つかりませんでした。技術サポートまでお問い合わせください。"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_support_answer_embeds_question() {
        let prompt = PromptTemplate::support_answer("レシートが出ません");
        assert!(prompt.contains("質問: レシートが出ません"));
        assert!(
            prompt.starts_with("あなたはレジシステムのサポート担当者です。")
        );
        assert!(prompt.ends_with("回答:"));
    }

    #[test]
    fn test_generation_apology_is_fixed() {
        assert_eq!(
            PromptTemplate::generation_apology(),
            "申し訳ございませんが、該当する情報が見つかりませんでした。技術サポートまでお問い合わせください。"
        );
    }
}
