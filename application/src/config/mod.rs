//! Application-level configuration.
//!
//! - [`ExecutionParams`]: per-call execution control (retrieval depth, deadline)

pub mod execution_params;

pub use execution_params::ExecutionParams;
