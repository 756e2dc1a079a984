//! # Career Outcomes Backend
//!
//! Rust backend for the career outcomes explorer. Given a user's
//! educational stage, school, and major, it synthesizes an outcomes
//! report (salary distribution, relocation patterns, employer and title
//! lists, a career timeline, and advisory risk flags) from immutable
//! seed datasets loaded once at startup. The backend exposes a REST API
//! via Axum for the React frontend.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Domain types shared across layers (scenario, report, occupation)
//! - [`data`]: Immutable datasets and read-only repository accessors
//! - [`rules`]: Pure rule modules (risk flags, fallback timeline)
//! - [`services`]: Report composition, timeline service, input validation
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! All datasets are loaded once per process and never mutated, so concurrent
//! report requests share state without locking.

pub mod data;
pub mod models;
pub mod rules;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
