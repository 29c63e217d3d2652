//! Configuration loaded from environment variables.

use std::env;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address (default: 127.0.0.1).
    pub host: String,

    /// HTTP server port (default: 8000).
    pub port: u16,

    /// Path to the SQLite database file (default: aroundme.db).
    pub db_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .context("PORT must be a valid u16")?;

        let db_path = env::var("DB_PATH").unwrap_or_else(|_| "aroundme.db".to_string());

        Ok(Self { host, port, db_path })
    }
}
