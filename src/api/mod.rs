//! Request handlers for every endpoint the demo API exposes.
//!
//! # Data Flow
//! ```text
//! Router (http::server)
//!     → meta.rs       (/, /health, /swagger)
//!     → catalogo.rs   (/api/usuarios, /api/cursos, /api/arquivos)
//!     → auth.rs       (/api/auth/login)
//!     → dashboard.rs  (/api/dashboard/stats)
//! ```

pub mod auth;
pub mod catalogo;
pub mod dashboard;
pub mod meta;
