mod config;
mod proxy;
mod routes;
mod state;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env is normal in production.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env()?;
    let port = config.port;
    tracing::info!(upstream = %config.api_upstream, "api forwarding configured");

    let state = state::AppState::new(config)?;
    let app = routes::app(state)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "trackside listening");
    axum::serve(listener, app).await?;
    Ok(())
}
