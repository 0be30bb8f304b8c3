//! EduMat — small educational-activity web service.

use clap::Parser;
use edumat_core::EdumatConfig;

#[derive(Parser, Debug)]
#[command(name = "edumat", version, about = "Educational-activity web service")]
struct Cli {
    /// Path to the config file (defaults to ~/.edumat/config.toml).
    #[arg(long, env = "EDUMAT_CONFIG")]
    config: Option<std::path::PathBuf>,

    /// Bind host, overrides the config file.
    #[arg(long)]
    host: Option<String>,

    /// Bind port, overrides the config file.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => EdumatConfig::load_from(path)?,
        None => EdumatConfig::load()?,
    };
    if let Some(host) = cli.host {
        config.gateway.host = host;
    }
    if let Some(port) = cli.port {
        config.gateway.port = port;
    }

    tracing::info!(
        "🚀 EduMat starting (analytics dir: {})",
        config.analytics.data_dir
    );
    edumat_gateway::start(config).await
}
