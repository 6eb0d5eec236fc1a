//! Dashboard statistics endpoint.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::http::response::{utc_timestamp, ApiResponse};
use crate::http::server::AppState;

/// Aggregate counts over the demo collections.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_usuarios: usize,
    pub total_cursos: usize,
    pub total_arquivos: usize,
    pub cursos_ativos: usize,
    pub usuarios_ativos: usize,
    pub ultima_atualizacao: String,
}

/// `GET /api/dashboard/stats`.
pub async fn dashboard_stats(State(state): State<AppState>) -> Json<ApiResponse<DashboardStats>> {
    let dados = &state.dados;
    let stats = DashboardStats {
        total_usuarios: dados.usuarios.len(),
        total_cursos: dados.cursos.len(),
        total_arquivos: dados.arquivos.len(),
        cursos_ativos: dados.cursos_ativos(),
        usuarios_ativos: dados.usuarios_ativos(),
        ultima_atualizacao: utc_timestamp(),
    };

    Json(ApiResponse::success(stats, "Estatísticas do dashboard"))
}
