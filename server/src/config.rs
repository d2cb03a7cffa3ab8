//! Server configuration parsed from environment variables.
//!
//! Leptos options (site root, package name) are read separately through
//! `get_configuration`; this covers only what the binary itself decides.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
    #[error("failed to read .env: {0}")]
    DotEnv(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Mount the read-only `/api` JSON routes.
    pub content_api: bool,
}

impl ServerConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `CONTENT_API`: `true` (default) or `false`
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: parse_host(std::env::var("HOST").ok().as_deref())?,
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            content_api: parse_flag("CONTENT_API", std::env::var("CONTENT_API").ok().as_deref(), true)?,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_host(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_HOST),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { var: "HOST", value: value.to_owned() }),
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { var: "PORT", value: value.to_owned() }),
    }
}

fn parse_flag(var: &'static str, raw: Option<&str>, default: bool) -> Result<bool, ConfigError> {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(default);
    };
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { var, value: value.to_owned() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
