//! Acervo Educacional Ferreira Costa Demo API Library

pub mod api;
pub mod config;
pub mod data;
pub mod http;
pub mod lifecycle;

pub use config::schema::ServerConfig;
pub use http::DemoServer;
pub use lifecycle::Shutdown;
