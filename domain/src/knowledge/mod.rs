//! Curated question/answer knowledge and the local fallback matcher.
//!
//! - [`record::QaRecord`]: one curated question/answer/category/keywords unit
//! - [`matcher::LocalMatcher`]: deterministic keyword + substring scorer
//! - [`validation::validate_records`]: record-set invariant checks

pub mod matcher;
pub mod record;
pub mod validation;
