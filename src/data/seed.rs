//! The fixed demo dataset.
//!
//! Three users, three courses, two files. These are the records the whole
//! API serves; every count the dashboard reports is a linear scan over them.

use crate::data::models::{Arquivo, Curso, Perfil, StatusCurso, Usuario};

/// The three demo collections, built once at startup and shared read-only
/// across request handlers.
#[derive(Debug)]
pub struct DemoData {
    pub usuarios: Vec<Usuario>,
    pub cursos: Vec<Curso>,
    pub arquivos: Vec<Arquivo>,
}

impl DemoData {
    /// Build the fixed dataset.
    pub fn new() -> Self {
        Self {
            usuarios: usuarios_demo(),
            cursos: cursos_demo(),
            arquivos: arquivos_demo(),
        }
    }

    /// Number of courses currently published.
    pub fn cursos_ativos(&self) -> usize {
        self.cursos
            .iter()
            .filter(|curso| curso.status == StatusCurso::Ativo)
            .count()
    }

    /// Number of users flagged as active.
    pub fn usuarios_ativos(&self) -> usize {
        self.usuarios.iter().filter(|usuario| usuario.ativo).count()
    }
}

impl Default for DemoData {
    fn default() -> Self {
        Self::new()
    }
}

fn usuarios_demo() -> Vec<Usuario> {
    vec![
        Usuario {
            id: 1,
            nome: "Carlos Bertoldo".into(),
            email: "carlos@ferreiracosta.com".into(),
            role: Perfil::Admin,
            ativo: true,
            ultimo_login: "2025-01-02T10:30:00Z".into(),
        },
        Usuario {
            id: 2,
            nome: "Maria Silva".into(),
            email: "maria@ferreiracosta.com".into(),
            role: Perfil::Gestor,
            ativo: true,
            ultimo_login: "2025-01-02T09:15:00Z".into(),
        },
        Usuario {
            id: 3,
            nome: "João Santos".into(),
            email: "joao@ferreiracosta.com".into(),
            role: Perfil::Usuario,
            ativo: true,
            ultimo_login: "2025-01-01T16:45:00Z".into(),
        },
    ]
}

fn cursos_demo() -> Vec<Curso> {
    vec![
        Curso {
            id: 1,
            titulo: "Gestão de Vendas Ferreira Costa".into(),
            descricao: "Curso completo sobre técnicas de vendas e atendimento ao cliente".into(),
            categoria: "Vendas".into(),
            status: StatusCurso::Ativo,
            duracao: "40 horas".into(),
            participantes: 156,
            criado_em: "2024-12-01T00:00:00Z".into(),
        },
        Curso {
            id: 2,
            titulo: "Segurança no Trabalho".into(),
            descricao: "Normas de segurança e prevenção de acidentes".into(),
            categoria: "Segurança".into(),
            status: StatusCurso::Ativo,
            duracao: "20 horas".into(),
            participantes: 89,
            criado_em: "2024-11-15T00:00:00Z".into(),
        },
        Curso {
            id: 3,
            titulo: "Atendimento ao Cliente".into(),
            descricao: "Excelência no atendimento e fidelização de clientes".into(),
            categoria: "Atendimento".into(),
            status: StatusCurso::Rascunho,
            duracao: "30 horas".into(),
            participantes: 0,
            criado_em: "2025-01-01T00:00:00Z".into(),
        },
    ]
}

fn arquivos_demo() -> Vec<Arquivo> {
    vec![
        Arquivo {
            id: 1,
            nome: "Manual_Vendas_2025.pdf".into(),
            tipo: "PDF".into(),
            tamanho: "2.5 MB".into(),
            categoria: "Documento".into(),
            curso_id: 1,
            upload_em: "2024-12-01T10:00:00Z".into(),
        },
        Arquivo {
            id: 2,
            nome: "Video_Seguranca_Trabalho.mp4".into(),
            tipo: "Video".into(),
            tamanho: "45.2 MB".into(),
            categoria: "Video".into(),
            curso_id: 2,
            upload_em: "2024-11-15T14:30:00Z".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_sizes() {
        let dados = DemoData::new();
        assert_eq!(dados.usuarios.len(), 3);
        assert_eq!(dados.cursos.len(), 3);
        assert_eq!(dados.arquivos.len(), 2);
    }

    #[test]
    fn test_active_counts() {
        let dados = DemoData::new();
        assert_eq!(dados.cursos_ativos(), 2);
        assert_eq!(dados.usuarios_ativos(), 3);
    }

    #[test]
    fn test_known_records() {
        let dados = DemoData::new();
        assert_eq!(dados.usuarios[0].nome, "Carlos Bertoldo");
        assert_eq!(dados.usuarios[1].role, Perfil::Gestor);
        assert_eq!(dados.cursos[2].status, StatusCurso::Rascunho);
        assert_eq!(dados.cursos[0].participantes, 156);
        assert_eq!(dados.arquivos[1].curso_id, 2);
        assert_eq!(dados.arquivos[0].tipo, "PDF");
    }
}
