use tally_api::Config;
use tally_app::AppContext;
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::from_env().expect("Failed to load configuration");

    let app_context = AppContext::connect(&config.database_url, config.max_connections)
        .await
        .expect("Failed to initialize database");

    let app = tally_api::router(app_context, &config.static_dir);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind address");
    tracing::info!("Listening on http://{}", config.bind_addr);
    tracing::info!("Serving landing page from {}", config.static_dir.display());

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Server stopped");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        tracing::info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
