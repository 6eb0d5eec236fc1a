use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "acervo-cli")]
#[command(about = "Query CLI for the Acervo Educacional demo API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:5000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show API info and endpoint map
    Status,
    /// Run the health check
    Health,
    /// List demo users
    Usuarios,
    /// List demo courses
    Cursos,
    /// List demo files
    Arquivos,
    /// Show dashboard statistics
    Stats,
    /// Authenticate with the mock login
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        senha: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Status => {
            let res = client.get(format!("{}/", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Health => {
            let res = client.get(format!("{}/health", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Usuarios => {
            let res = client.get(format!("{}/api/usuarios", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Cursos => {
            let res = client.get(format!("{}/api/cursos", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Arquivos => {
            let res = client.get(format!("{}/api/arquivos", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Stats => {
            let res = client
                .get(format!("{}/api/dashboard/stats", cli.url))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Login { email, senha } => {
            let res = client
                .post(format!("{}/api/auth/login", cli.url))
                .json(&json!({ "email": email, "senha": senha }))
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
