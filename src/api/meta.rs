//! Introspection endpoints: API info, health check, Swagger document.
//!
//! These three endpoints return their payloads bare, without the standard
//! envelope; they describe the service rather than the acervo data.

use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use crate::http::response::utc_timestamp;

/// Payload for `GET /`.
#[derive(Debug, Serialize)]
pub struct ApiInfo {
    pub sistema: &'static str,
    pub versao: &'static str,
    pub status: &'static str,
    pub timestamp: String,
    pub endpoints: ApiEndpoints,
}

/// Route map advertised by the root endpoint.
#[derive(Debug, Serialize)]
pub struct ApiEndpoints {
    pub usuarios: &'static str,
    pub cursos: &'static str,
    pub arquivos: &'static str,
    pub auth: &'static str,
    pub health: &'static str,
    pub swagger: &'static str,
}

/// Payload for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: String,
    pub services: ServicesStatus,
}

/// Simulated dependency states reported by the health check.
#[derive(Debug, Serialize)]
pub struct ServicesStatus {
    pub database: &'static str,
    pub storage: &'static str,
    pub email: &'static str,
}

/// `GET /`. Service identity plus the route map.
pub async fn api_info() -> Json<ApiInfo> {
    Json(ApiInfo {
        sistema: "Acervo Educacional Ferreira Costa",
        versao: env!("CARGO_PKG_VERSION"),
        status: "Operacional",
        timestamp: utc_timestamp(),
        endpoints: ApiEndpoints {
            usuarios: "/api/usuarios",
            cursos: "/api/cursos",
            arquivos: "/api/arquivos",
            auth: "/api/auth/login",
            health: "/health",
            swagger: "/swagger",
        },
    })
}

/// `GET /health`. Always healthy; the demo has no real dependencies.
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        timestamp: utc_timestamp(),
        services: ServicesStatus {
            database: "connected",
            storage: "available",
            email: "operational",
        },
    })
}

/// `GET /swagger`. Static Swagger 2.0 description of the list endpoints.
pub async fn swagger_doc() -> Json<Value> {
    Json(json!({
        "swagger": "2.0",
        "info": {
            "title": "Acervo Educacional API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "API do Sistema Acervo Educacional Ferreira Costa"
        },
        "host": "localhost:5000",
        "basePath": "/api",
        "schemes": ["http", "https"],
        "paths": {
            "/usuarios": {
                "get": {
                    "summary": "Listar usuários",
                    "responses": {"200": {"description": "Lista de usuários"}}
                }
            },
            "/cursos": {
                "get": {
                    "summary": "Listar cursos",
                    "responses": {"200": {"description": "Lista de cursos"}}
                }
            },
            "/arquivos": {
                "get": {
                    "summary": "Listar arquivos",
                    "responses": {"200": {"description": "Lista de arquivos"}}
                }
            }
        }
    }))
}
