//! Runtime configuration read from the environment
//!
//! - `HOST` - Address to bind (default: "0.0.0.0")
//! - `PORT` - Server port number (default: 8080)
//! - `DATABASE_URL` - Path to the database file (default: "urls.db")
//!
//! The binary loads a `.env` file with `dotenvy` before reading these.

use std::env;

use tracing::warn;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATABASE_URL: &str = "urls.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
}

impl Config {
    /// Reads the process environment
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = get_or(&lookup, "HOST", DEFAULT_HOST);
        let database_url = get_or(&lookup, "DATABASE_URL", DEFAULT_DATABASE_URL);

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("PORT value {:?} is not a valid port, using default: {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => {
                warn!("PORT environment variable not set, using default: {}", DEFAULT_PORT);
                DEFAULT_PORT
            }
        };

        Self {
            host,
            port,
            database_url,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn get_or<F>(lookup: &F, var: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var).unwrap_or_else(|| {
        warn!("{} environment variable not set, using default: {}", var, default);
        default.to_string()
    })
}
