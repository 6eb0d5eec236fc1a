//! List endpoints for the three demo collections.

use axum::{extract::State, Json};

use crate::data::{Arquivo, Curso, Usuario};
use crate::http::response::ApiResponse;
use crate::http::server::AppState;

/// `GET /api/usuarios`.
pub async fn list_usuarios(State(state): State<AppState>) -> Json<ApiResponse<Vec<Usuario>>> {
    let usuarios = state.dados.usuarios.clone();
    tracing::debug!(total = usuarios.len(), "Listing usuarios");
    Json(ApiResponse::list(
        usuarios,
        "Usuários recuperados com sucesso",
    ))
}

/// `GET /api/cursos`.
pub async fn list_cursos(State(state): State<AppState>) -> Json<ApiResponse<Vec<Curso>>> {
    let cursos = state.dados.cursos.clone();
    tracing::debug!(total = cursos.len(), "Listing cursos");
    Json(ApiResponse::list(cursos, "Cursos recuperados com sucesso"))
}

/// `GET /api/arquivos`.
pub async fn list_arquivos(State(state): State<AppState>) -> Json<ApiResponse<Vec<Arquivo>>> {
    let arquivos = state.dados.arquivos.clone();
    tracing::debug!(total = arquivos.len(), "Listing arquivos");
    Json(ApiResponse::list(
        arquivos,
        "Arquivos recuperados com sucesso",
    ))
}
