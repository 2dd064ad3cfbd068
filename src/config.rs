use crate::storage::Seed;
use std::{env, net::SocketAddr, path::PathBuf};

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub seed: Seed,
}

impl Config {
    /// Reads `PORT`, `APP_SEED_PATH` and `APP_SEED_DEMO`, loading `.env`
    /// first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { name: "PORT", value })?,
            None => DEFAULT_PORT,
        };

        let seed_demo = match lookup("APP_SEED_DEMO") {
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "APP_SEED_DEMO",
                        value,
                    });
                }
            },
            None => true,
        };

        let seed = match lookup("APP_SEED_PATH").filter(|path| !path.trim().is_empty()) {
            Some(path) => Seed::File(PathBuf::from(path)),
            None if seed_demo => Seed::Demo,
            None => Seed::Empty,
        };

        Ok(Self { port, seed })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
