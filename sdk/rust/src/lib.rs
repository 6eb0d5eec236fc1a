//! Rust client for the Acervo Educacional demo API.

pub mod client;

pub use client::{
    ApiEnvelope, Arquivo, Curso, DashboardStats, DemoClient, LoginData, LoginUsuario, Usuario,
};
