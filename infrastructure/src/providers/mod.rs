//! External capability providers
//!
//! AWS-backed adapters for the generation and retrieval ports. Everything
//! here is behind the `aws` feature; without it the binary runs on local
//! records only.

#[cfg(feature = "aws")]
pub mod bedrock;

#[cfg(feature = "aws")]
mod sdk;

#[cfg(feature = "aws")]
pub use sdk::load_sdk_config;
