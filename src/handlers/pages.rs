use axum::{routing::get_service, Router};
use tower_http::services::{ServeDir, ServeFile};

use crate::config::Config;

/// Landing page at `/`, everything else unmatched comes from the static directory.
pub fn pages_handler(config: &Config) -> Router {
    Router::new()
        .route("/", get_service(ServeFile::new(&config.index_page)))
        .fallback_service(ServeDir::new(&config.public_dir))
}
