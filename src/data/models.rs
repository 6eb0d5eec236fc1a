//! Record types for the demo collections.
//!
//! Field names are the system's Portuguese domain vocabulary; serde renames
//! them to the camelCase keys the API has always spoken (`ultimo_login` →
//! `ultimoLogin`). Enum variants serialize as their exact wire strings.

use serde::{Deserialize, Serialize};

/// Access profile of a demo user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Perfil {
    Admin,
    Gestor,
    Usuario,
}

/// Publication status of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusCurso {
    Ativo,
    Rascunho,
}

/// A platform user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub id: u32,
    pub nome: String,
    pub email: String,
    pub role: Perfil,
    pub ativo: bool,
    /// Fixed ISO-8601 instant; the demo never refreshes it.
    pub ultimo_login: String,
}

/// A training course in the catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Curso {
    pub id: u32,
    pub titulo: String,
    pub descricao: String,
    pub categoria: String,
    pub status: StatusCurso,
    /// Human-readable duration label such as "40 horas".
    pub duracao: String,
    pub participantes: u32,
    pub criado_em: String,
}

/// A stored file attached to a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Arquivo {
    pub id: u32,
    pub nome: String,
    pub tipo: String,
    /// Human-readable size label such as "2.5 MB".
    pub tamanho: String,
    pub categoria: String,
    /// Informal reference to a `Curso` id; not validated anywhere.
    pub curso_id: u32,
    pub upload_em: String,
}
