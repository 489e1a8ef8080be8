use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ConfigError;

const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to
    pub host: IpAddr,
    pub port: u16,
    /// Attach an allow-any CORS layer (the page itself is same-origin)
    pub cors_permissive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            cors_permissive: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { name: "HOST", value })?,
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { name: "PORT", value })?,
            None => defaults.port,
        };

        let cors_permissive = match lookup("CORS_PERMISSIVE") {
            Some(value) => parse_flag(&value).ok_or(ConfigError::Invalid {
                name: "CORS_PERMISSIVE",
                value,
            })?,
            None => defaults.cors_permissive,
        };

        Ok(Self {
            host,
            port,
            cors_permissive,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 5000);
        assert!(config.cors_permissive);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:5000");
    }

    #[test]
    fn reads_host_and_port() {
        let config =
            Config::from_lookup(lookup_from(&[("HOST", "127.0.0.1"), ("PORT", " 8081 ")])).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8081");
    }

    #[test]
    fn rejects_bad_port() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));
    }

    #[test]
    fn rejects_bad_host() {
        let err = Config::from_lookup(lookup_from(&[("HOST", "not-an-ip")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "HOST", .. }));
    }

    #[test]
    fn parses_cors_flag() {
        let config = Config::from_lookup(lookup_from(&[("CORS_PERMISSIVE", "off")])).unwrap();
        assert!(!config.cors_permissive);

        let err = Config::from_lookup(lookup_from(&[("CORS_PERMISSIVE", "maybe")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: "CORS_PERMISSIVE",
                ..
            }
        ));
    }
}
