use mockup_service::{
    config::ServiceConfig, routes::create_router, utils::gemini::GeminiClient, ServiceState,
};
use std::process::ExitCode;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let mut config = ServiceConfig::default();
    if let Err(e) = config.init_from_env() {
        eprintln!("Failed to load configuration: {}", e);
        return ExitCode::FAILURE;
    }
    if let Err(e) = config.tracing.init_subscriber() {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: ServiceConfig) -> Result<(), String> {
    let addr = config
        .server
        .get_socket_addr()
        .map_err(|e| format!("Invalid server address '{}': {}", config.server.get_addr(), e))?;
    let model = GeminiClient::new(&config.gemini)?;
    info!(
        "Using model '{}' at {}",
        config.gemini.model, config.gemini.api_base
    );

    let http_addr = config.server.get_http_addr();
    let state = Arc::new(ServiceState::new(config, Arc::new(model)));
    let app = create_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind {}: {}", addr, e))?;
    info!("🚀 Mockup service listening on {}", http_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("Server error: {}", e))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
