use crate::error::{Error, Result};
use crate::telemetry::LogFormat;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

/// Constants stamped onto every desired child set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReconcilerConfig {
    /// Appended to the parent's image as `<image>:<tag>`.
    pub image_tag: String,
    /// Istio gateway the ingress route attaches to, as `<namespace>/<name>`.
    pub gateway: String,
    /// Container, service and route destination port.
    pub port: u16,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            image_tag: "v1".to_string(),
            gateway: "default/http-gateway".to_string(),
            port: 80,
        }
    }
}

/// Settings for the HTTP process hosting the sync hook.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub listen_addr: SocketAddr,
    pub request_timeout: Option<Duration>,
    /// Grace period between a termination signal and closing the listener.
    pub shutdown_drain: Duration,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 80)),
            request_timeout: None,
            shutdown_drain: Duration::ZERO,
            log_format: LogFormat::default(),
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listen_addr(mut self, addr: SocketAddr) -> Self {
        self.listen_addr = addr;
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn shutdown_drain(mut self, drain: Duration) -> Self {
        self.shutdown_drain = drain;
        self
    }

    pub fn log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }

    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("LISTEN_ADDR") {
            config.listen_addr = parse_var("LISTEN_ADDR", &val)?;
        }

        if let Ok(val) = std::env::var("REQUEST_TIMEOUT_MS") {
            config.request_timeout = Some(Duration::from_millis(parse_var(
                "REQUEST_TIMEOUT_MS",
                &val,
            )?));
        }

        if let Ok(val) = std::env::var("SHUTDOWN_DRAIN_MS") {
            config.shutdown_drain = Duration::from_millis(parse_var("SHUTDOWN_DRAIN_MS", &val)?);
        }

        if let Ok(val) = std::env::var("LOG_FORMAT") {
            config.log_format = parse_var("LOG_FORMAT", &val)?;
        }

        Ok(config)
    }
}

fn parse_var<T: FromStr>(key: &str, val: &str) -> Result<T> {
    val.parse()
        .map_err(|_| Error::InvalidConfig(format!("Invalid {}: {:?}", key, val)))
}
