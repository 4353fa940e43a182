//! qcomposer server - HTTP boundary for the statevector engine.
//!
//! Exposes two endpoints:
//!
//! - `POST /api/simulate` validates a gate program and returns the final
//!   statevector, probabilities and phases
//! - `GET /api/health` reports liveness and version
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use qcomposer_server::{AppState, ServerConfig, create_router};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig::default();
//!     let state = Arc::new(AppState::with_config(config.clone()));
//!
//!     let app = create_router(state);
//!     let listener = tokio::net::TcpListener::bind(config.bind_address).await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod api;
pub mod dto;
pub mod error;
pub mod server;
pub mod state;

pub use dto::{HealthResponse, SimulateRequest};
pub use error::ApiError;
pub use server::create_router;
pub use state::{AppState, ServerConfig};
