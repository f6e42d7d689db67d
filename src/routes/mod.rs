use std::sync::Arc;

use axum::{Extension, Router};
use tower_http::trace::TraceLayer;

use crate::{
    config::Config,
    handlers::{pages::pages_handler, posts::posts_handler},
    AppState,
};

pub fn create_routes(app_state: Arc<AppState>, config: &Config) -> Router {
    Router::new()
        .nest(&config.route_prefix, posts_handler())
        .merge(pages_handler(config))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state))
}
