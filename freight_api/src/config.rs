use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

const DATA_PATH_ENV_VAR: &str = "FREIGHT_DATA_PATH";
const BIND_ADDR_ENV_VAR: &str = "FREIGHT_BIND_ADDR";

const DEFAULT_DATA_PATH: &str = "./data/data.json";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

pub struct Config {
    pub data_path: PathBuf,
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Reads the process environment, `.env.local` is expected to be loaded already.
    pub fn from_env() -> anyhow::Result<Config> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Config> {
        let data_path = lookup(DATA_PATH_ENV_VAR).unwrap_or_else(|| DEFAULT_DATA_PATH.to_string());
        let bind_addr = lookup(BIND_ADDR_ENV_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        Ok(Config {
            data_path: PathBuf::from(data_path),
            bind_addr: bind_addr
                .parse()
                .with_context(|| format!("Invalid {}: {}", BIND_ADDR_ENV_VAR, bind_addr))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::from_lookup(|_| None).unwrap();

        assert_eq!(config.data_path, PathBuf::from("./data/data.json"));
        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(|key| match key {
            "FREIGHT_DATA_PATH" => Some("/srv/routes.json".to_string()),
            "FREIGHT_BIND_ADDR" => Some("0.0.0.0:3000".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.data_path, PathBuf::from("/srv/routes.json"));
        assert_eq!(config.bind_addr.port(), 3000);
    }

    #[test]
    fn rejects_invalid_bind_addr() {
        let result = Config::from_lookup(|key| {
            (key == "FREIGHT_BIND_ADDR").then(|| "localhost".to_string())
        });

        assert!(result.is_err());
    }
}
