use std::net::SocketAddr;
use serde::Deserialize;

/// Compiled-in configuration document. There is no runtime override.
const EMBEDDED_CONFIGURATION: &str = include_str!("../configuration.toml");

#[derive(thiserror::Error, Debug)]
pub enum ConfigurationError {
    #[error("Invalid configuration document: {0}")]
    InvalidDocument(#[from] toml::de::Error),
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub listen_address: SocketAddr,
}

impl Configuration {
    pub fn load() -> Result<Self, ConfigurationError> {
        Self::parse(EMBEDDED_CONFIGURATION)
    }

    fn parse(document: &str) -> Result<Self, ConfigurationError> {
        Ok(toml::from_str::<Configuration>(document)?)
    }

    pub fn port(&self) -> u16 {
        self.listen_address.port()
    }
}
