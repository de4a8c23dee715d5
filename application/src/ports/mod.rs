//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.
//! Every capability is optional at wiring time: an absent capability is
//! `None`, decided once at startup.

pub mod answer_generator;
pub mod capability;
pub mod knowledge_retriever;
pub mod knowledge_store;
pub mod metrics_sink;
