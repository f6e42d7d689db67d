use std::{env, path::PathBuf};

use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Validate)]
pub struct Config {
    #[validate(range(min = 1))]
    pub port: u16,
    #[validate(custom(function = "validate_route_prefix"))]
    pub route_prefix: String,
    pub public_dir: PathBuf,
    pub index_page: PathBuf,
    pub seed_posts: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            route_prefix: "/blogposts".to_string(),
            public_dir: PathBuf::from("public"),
            index_page: PathBuf::from("views/index.html"),
            seed_posts: true,
        }
    }
}

impl Config {
    /// Reads `.env` and the optional `PORT` override.
    pub fn init() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let mut config = Self::default();
        if let Ok(port) = env::var("PORT") {
            config.port = port
                .parse()
                .map_err(|_| format!("PORT must be a port number, got {port:?}"))?;
        }

        Ok(config)
    }
}

fn validate_route_prefix(prefix: &str) -> Result<(), ValidationError> {
    if prefix.len() < 2 || !prefix.starts_with('/') || prefix.ends_with('/') {
        return Err(ValidationError::new("route_prefix")
            .with_message("route prefix must look like `/name`".into()));
    }

    Ok(())
}
