//! In-memory demo data subsystem.
//!
//! # Data Flow
//! ```text
//! Process start
//!     → seed.rs (build the three fixed collections)
//!     → DemoData (immutable, shared via Arc in AppState)
//!     → read by every /api handler; never written
//! ```
//!
//! # Design Decisions
//! - Collections are constructed once and never mutated, so handlers
//!   share them without locking
//! - Record values are the demo's fixed dataset, not samples of a store
//! - `curso_id` on files is an informal label; nothing enforces it

pub mod models;
pub mod seed;

pub use models::{Arquivo, Curso, Perfil, StatusCurso, Usuario};
pub use seed::DemoData;
