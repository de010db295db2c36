//! Host configuration parsed from environment variables.
//!
//! The host reads the same `CHAT_*` keys the browser bundle was built with
//! so a bad value fails at startup instead of in the browser. It only uses
//! the base path itself; the rest is logged.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use events::{ChatConfig, ConfigError};

pub const PORT_KEY: &str = "PORT";
pub const SITE_ROOT_KEY: &str = "SITE_ROOT";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum HostConfigError {
    #[error("{PORT_KEY} must be a port number, got `{0}`")]
    InvalidPort(String),
    #[error(transparent)]
    Chat(#[from] ConfigError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Overrides the Leptos `site-root` when set.
    pub site_root: Option<PathBuf>,
    pub chat: ChatConfig,
}

impl HostConfig {
    /// Build from environment variables (after `.env` is loaded).
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_ROOT`: default from `[package.metadata.leptos]`
    /// - every `CHAT_*` key read by [`ChatConfig::from_env`]
    ///
    /// # Errors
    ///
    /// Returns [`HostConfigError`] for a non-numeric port or an invalid chat
    /// room value.
    pub fn from_env() -> Result<Self, HostConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// # Errors
    ///
    /// See [`Self::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HostConfigError> {
        let port = match lookup(PORT_KEY).filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| HostConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let site_root = lookup(SITE_ROOT_KEY).filter(|v| !v.trim().is_empty()).map(PathBuf::from);
        let chat = ChatConfig::from_lookup(&lookup)?;
        Ok(Self { port, site_root, chat })
    }
}
