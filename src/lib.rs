use std::sync::Arc;

use axum::Router;

pub use self::config::Config;
pub use self::errors::{Error, Result};

use repositories::InMemoryRepo;
use routes::create_routes;
use services::posts::PostsService;

pub mod config;
mod errors;
pub mod handlers;
pub mod models;
pub mod repositories;
mod routes;
pub mod services;

#[derive(Clone)]
pub struct AppState {
    pub posts_service: PostsService,
}

/// Builds the full application around an explicitly owned post store.
pub fn create_app(config: &Config, repo: InMemoryRepo) -> Router {
    let app_state = AppState {
        posts_service: PostsService::new(repo),
    };

    create_routes(Arc::new(app_state), config)
}
