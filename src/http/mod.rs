//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, route table)
//!     → handler (api::* builds the payload)
//!     → response.rs (wrap in the standard envelope)
//!     → error.rs (failures become envelope + status code)
//!     → Send to client
//! ```

pub mod error;
pub mod response;
pub mod server;

pub use error::ApiError;
pub use response::ApiResponse;
pub use server::{AppState, DemoServer};
