//! Startup orchestration.
//!
//! # Responsibilities
//! - Print the endpoint banner before traffic is accepted
//!
//! # Design Decisions
//! - The banner goes to stdout, not the log stream; it is operator-facing
//!   output, same as the original demo

const BANNER: &str = "\
🚀 Iniciando API Demo - Sistema Acervo Educacional Ferreira Costa
📊 Endpoints disponíveis:
   • GET  /              - Informações da API
   • GET  /health        - Health Check
   • GET  /swagger       - Documentação Swagger
   • GET  /api/usuarios  - Listar usuários
   • GET  /api/cursos    - Listar cursos
   • GET  /api/arquivos  - Listar arquivos
   • POST /api/auth/login - Autenticação
   • GET  /api/dashboard/stats - Estatísticas
";

/// The startup banner listing every endpoint.
pub fn banner() -> &'static str {
    BANNER
}

/// Print the banner to stdout.
pub fn print_banner() {
    println!("{BANNER}");
}
