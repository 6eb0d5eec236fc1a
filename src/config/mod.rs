//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! ServerConfig::default()
//!     → schema.rs (fixed demo defaults)
//!     → DemoServer (immutable for the process lifetime)
//! ```
//!
//! # Design Decisions
//! - The demo runs with fixed settings; there is no config file or
//!   environment override, only the compiled-in defaults
//! - Config is immutable once constructed and cheap to clone

pub mod schema;

pub use schema::LimitsConfig;
pub use schema::ListenerConfig;
pub use schema::ServerConfig;
pub use schema::TimeoutConfig;
