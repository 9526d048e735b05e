//! HTTP server module for the period synchronizer.
//!
//! This module exposes the period generator as a REST API. Handlers only
//! deserialize requests, read the clock and delegate to the service layer.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - JSON (de)serialization                                 │
//! │  - CORS, compression, tracing, error payloads             │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Request validation, range resolution                   │
//! │  - Period hierarchy generation                            │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
