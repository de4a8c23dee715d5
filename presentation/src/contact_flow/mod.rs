//! Contact-flow wire layer: event validation and the request handler.

pub mod handler;
pub mod request;

pub use handler::ContactFlowHandler;
pub use request::{ContactFlowRequest, RequestError, RequestValidator};
