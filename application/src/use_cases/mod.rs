//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod answer_question;
pub mod classify_error;
pub mod handle_inquiry;
pub mod resolve_knowledge;
pub mod shared;
