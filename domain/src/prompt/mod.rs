//! Prompt domain
//!
//! Instruction template for the generative fallback and the fixed texts
//! read out when no answer can be produced.

mod template;

pub use template::PromptTemplate;
