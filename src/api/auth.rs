//! Mock authentication endpoint.
//!
//! # Responsibilities
//! - Accept any non-empty email/senha pair
//! - Reject empty or missing credentials with 400
//! - Issue the fixed demo token and session profile
//!
//! # Design Decisions
//! - No credential store and no token validation; this is a demo login
//! - The session user echoes the submitted email but is otherwise fixed

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::data::Perfil;
use crate::http::error::ApiError;
use crate::http::response::ApiResponse;

/// Token returned by every successful login.
pub const DEMO_TOKEN: &str = "demo_jwt_token_12345";

/// Credentials submitted to `POST /api/auth/login`.
///
/// Fields default to empty strings, so a partial body fails the
/// credential check rather than deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

/// Session payload returned on successful login.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub token: &'static str,
    pub usuario: UsuarioSessao,
    pub expires_in: &'static str,
}

/// The fixed demo session user; only the email varies.
#[derive(Debug, Serialize)]
pub struct UsuarioSessao {
    pub id: u32,
    pub nome: &'static str,
    pub email: String,
    pub role: Perfil,
}

/// `POST /api/auth/login`.
pub async fn login(
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<LoginData>>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Login body rejected");
        ApiError::CorpoInvalido
    })?;

    if request.email.is_empty() || request.senha.is_empty() {
        return Err(ApiError::CredenciaisObrigatorias);
    }

    tracing::info!(email = %request.email, "Login accepted");

    Ok(Json(ApiResponse::success(
        LoginData {
            token: DEMO_TOKEN,
            usuario: UsuarioSessao {
                id: 1,
                nome: "Demo User",
                email: request.email,
                role: Perfil::Admin,
            },
            expires_in: "24h",
        },
        "Login realizado com sucesso",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(email: &str, senha: &str) -> Result<Json<LoginRequest>, JsonRejection> {
        Ok(Json(LoginRequest {
            email: email.into(),
            senha: senha.into(),
        }))
    }

    #[tokio::test]
    async fn test_login_accepts_any_non_empty_credentials() {
        let Json(resp) = login(body("alguem@exemplo.com", "qualquer-senha"))
            .await
            .unwrap();

        assert!(resp.success);
        assert_eq!(resp.message, "Login realizado com sucesso");

        let data = resp.data.unwrap();
        assert_eq!(data.token, DEMO_TOKEN);
        assert_eq!(data.expires_in, "24h");
        assert_eq!(data.usuario.id, 1);
        assert_eq!(data.usuario.nome, "Demo User");
        assert_eq!(data.usuario.email, "alguem@exemplo.com");
        assert_eq!(data.usuario.role, Perfil::Admin);
    }

    #[tokio::test]
    async fn test_login_rejects_empty_email() {
        let err = login(body("", "senha")).await.unwrap_err();
        assert!(matches!(err, ApiError::CredenciaisObrigatorias));
    }

    #[tokio::test]
    async fn test_login_rejects_empty_senha() {
        let err = login(body("alguem@exemplo.com", "")).await.unwrap_err();
        assert!(matches!(err, ApiError::CredenciaisObrigatorias));
    }

    #[test]
    fn test_login_request_defaults_missing_fields() {
        let request: LoginRequest = serde_json::from_str(r#"{"email": "a@b.com"}"#).unwrap();
        assert_eq!(request.email, "a@b.com");
        assert!(request.senha.is_empty());
    }

    #[test]
    fn test_login_data_wire_format() {
        let data = LoginData {
            token: DEMO_TOKEN,
            usuario: UsuarioSessao {
                id: 1,
                nome: "Demo User",
                email: "a@b.com".into(),
                role: Perfil::Admin,
            },
            expires_in: "24h",
        };

        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["token"], "demo_jwt_token_12345");
        assert_eq!(value["expiresIn"], "24h");
        assert_eq!(value["usuario"]["role"], "Admin");
    }
}
