mod config;
mod routes;

use std::process::ExitCode;

use config::{ConfigError, ServerConfig};

/// Startup or serve failure of the host process.
#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Leptos(String),

    #[error("failed to bind: {0}")]
    Bind(std::io::Error),

    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    // `.env` is optional.
    let env_file = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Ok(path) = &env_file {
        tracing::info!(path = %path.display(), "loaded environment file");
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "waveportal stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let app = routes::app().map_err(ServerError::Leptos)?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .map_err(ServerError::Bind)?;

    tracing::info!(port = config.port, "waveportal listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
