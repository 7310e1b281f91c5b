/**
 * TodoFlow Server Entry Point
 *
 * Loads `.env`, initializes tracing, assembles the Axum app and serves it.
 */

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), todoflow::backend::BackendError> {
    use todoflow::backend::server::{create_app, ServerConfig};

    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("[STARTUP] Server initialization started");

    let config = ServerConfig::from_env();
    let app = create_app(&config).await?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("[STARTUP] Listening on {}", addr);
    tracing::info!(
        "[STARTUP] Clients should connect to http://127.0.0.1:{}",
        config.port
    );

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("Server requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin todoflow-server --features ssr");
    std::process::exit(1);
}
