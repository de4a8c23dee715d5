//! Fixed answer categories.
//!
//! Record categories (e.g. `"receipt"`) pass through unchanged; these are
//! the categories the pipeline itself assigns.

/// Top result from the managed retrieval capability.
pub const KNOWLEDGE_BASE: &str = "knowledge_base";
/// No knowledge source produced a match.
pub const NOT_FOUND: &str = "not_found";
/// No knowledge store is configured or it could not be reached.
pub const NOT_CONFIGURED: &str = "not_configured";
/// Answer produced by the generative capability.
pub const GENERATED: &str = "bedrock_generated";
/// Generation failed; the fixed apology was returned instead.
pub const GENERATION_ERROR: &str = "generation_error";

/// Whether `category` denotes an actual answer for quality reporting.
pub fn is_answer(category: &str) -> bool {
    !matches!(category, NOT_FOUND | NOT_CONFIGURED | GENERATION_ERROR)
        && !category.starts_with("error_")
}
