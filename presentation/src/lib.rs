//! Presentation layer for voice-helpdesk
//!
//! This crate contains the contact-flow wire layer, CLI definitions,
//! and output formatters.

pub mod cli;
pub mod contact_flow;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, CliOutputFormat};
pub use contact_flow::{ContactFlowHandler, ContactFlowRequest, RequestError, RequestValidator};
pub use output::console::ConsoleFormatter;
pub use output::formatter::{OutputFormatter, ResponseFormatter, WireBody, WireResponse};
