//! API error taxonomy.
//!
//! # Responsibilities
//! - Name every failure a handler can return
//! - Map each failure to an HTTP status code
//! - Render failures as the standard response envelope
//!
//! # Design Decisions
//! - Display strings double as the client-facing `message` field, so they
//!   are written in the API's wire language

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::http::response::ApiResponse;

/// Errors surfaced to API clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Login attempted with an empty email or password.
    #[error("Email e senha são obrigatórios")]
    CredenciaisObrigatorias,

    /// Request body was missing or not valid JSON.
    #[error("Corpo da requisição inválido")]
    CorpoInvalido,

    /// No route matched the request path.
    #[error("Rota não encontrada")]
    RotaNaoEncontrada,
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::CredenciaisObrigatorias => StatusCode::BAD_REQUEST,
            Self::CorpoInvalido => StatusCode::BAD_REQUEST,
            Self::RotaNaoEncontrada => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiResponse::<()>::error(self.to_string());
        (self.status_code(), Json(body)).into_response()
    }
}
