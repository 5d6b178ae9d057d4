//! Environment-driven configuration.

use std::env;

const DEFAULT_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_DATABASE_URL: &str = "sqlite://subway.db";

pub struct Config {
    pub addr: String,
    pub database_url: String,
}

impl Config {
    /// Read `SUBWAY_ADDR` and `SUBWAY_DATABASE_URL`, falling back to local
    /// defaults.
    pub fn from_env() -> Self {
        Self {
            addr: env::var("SUBWAY_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_owned()),
            database_url: env::var("SUBWAY_DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned()),
        }
    }
}
