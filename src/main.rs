use blogposts_api::{create_app, repositories::InMemoryRepo, services::posts::PostsService, Config};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use validator::Validate;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,blogposts_api=debug,tower_http=debug")),
        )
        .init();

    let config = match Config::init() {
        Ok(config) => config,
        Err(err) => {
            error!("🔥 Invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = config.validate() {
        error!("🔥 Invalid configuration: {err}");
        std::process::exit(1);
    }

    let repo = InMemoryRepo::new();
    if config.seed_posts {
        PostsService::new(repo.clone()).seed().await;
    }

    let app = create_app(&config, repo);

    let listener = match TcpListener::bind(format!("[::]:{}", config.port)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("🔥 Failed to bind port {}: {err}", config.port);
            std::process::exit(1);
        }
    };
    info!("✅ Your app is listening on port {}", config.port);

    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("🔥 Server error: {err}");
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
