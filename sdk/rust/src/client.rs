use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// The `{success, data, total, message}` envelope every `/api` endpoint uses.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub total: Option<usize>,
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub id: u32,
    pub nome: String,
    pub email: String,
    pub role: String,
    pub ativo: bool,
    pub ultimo_login: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Curso {
    pub id: u32,
    pub titulo: String,
    pub descricao: String,
    pub categoria: String,
    pub status: String,
    pub duracao: String,
    pub participantes: u32,
    pub criado_em: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Arquivo {
    pub id: u32,
    pub nome: String,
    pub tipo: String,
    pub tamanho: String,
    pub categoria: String,
    pub curso_id: u32,
    pub upload_em: String,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    senha: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub token: String,
    pub usuario: LoginUsuario,
    pub expires_in: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginUsuario {
    pub id: u32,
    pub nome: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_usuarios: usize,
    pub total_cursos: usize,
    pub total_arquivos: usize,
    pub cursos_ativos: usize,
    pub usuarios_ativos: usize,
    pub ultima_atualizacao: String,
}

pub struct DemoClient {
    client: Client,
    base_url: String,
}

impl DemoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch API info from the root endpoint.
    pub async fn info(&self) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
        self.get("/").await
    }

    /// Run the health check.
    pub async fn health(&self) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
        self.get("/health").await
    }

    /// List demo users.
    pub async fn usuarios(
        &self,
    ) -> Result<ApiEnvelope<Vec<Usuario>>, Box<dyn std::error::Error>> {
        self.get("/api/usuarios").await
    }

    /// List demo courses.
    pub async fn cursos(&self) -> Result<ApiEnvelope<Vec<Curso>>, Box<dyn std::error::Error>> {
        self.get("/api/cursos").await
    }

    /// List demo files.
    pub async fn arquivos(
        &self,
    ) -> Result<ApiEnvelope<Vec<Arquivo>>, Box<dyn std::error::Error>> {
        self.get("/api/arquivos").await
    }

    /// Fetch dashboard statistics.
    pub async fn stats(
        &self,
    ) -> Result<ApiEnvelope<DashboardStats>, Box<dyn std::error::Error>> {
        self.get("/api/dashboard/stats").await
    }

    /// Authenticate with the mock login.
    ///
    /// A 400 response still carries the standard envelope (with
    /// `success: false`), so it is returned rather than treated as an error.
    pub async fn login(
        &self,
        email: &str,
        senha: &str,
    ) -> Result<ApiEnvelope<LoginData>, Box<dyn std::error::Error>> {
        let resp = self
            .client
            .post(format!("{}/api/auth/login", self.base_url))
            .json(&LoginRequest { email, senha })
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() && status.as_u16() != 400 {
            return Err(format!("API returned error status {}: {}", status, text).into());
        }

        Ok(serde_json::from_str(&text)?)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, Box<dyn std::error::Error>> {
        let resp = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(format!("API returned error status {}: {}", status, text).into());
        }

        Ok(serde_json::from_str(&text)?)
    }
}
