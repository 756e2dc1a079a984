//! HTTP server module.
//!
//! Exposes the report pipeline and reference datasets as a REST API via
//! axum. The HTTP layer only parses requests, delegates to the service and
//! repository layers, and maps results back to JSON.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
