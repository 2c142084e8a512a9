// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TOML configuration file.
//!
//! ```toml
//! encoding = "cp850"
//! timeout_secs = 30
//! report_dir = "/var/tmp/netdiag"
//!
//! [commands]
//! ping = "ping -c 2 {target}"
//!
//! [env]
//! LC_ALL = "C"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::catalog::{ActionId, Catalog};
use crate::encoding::{EncodingError, OutputEncoding};
use crate::platform::{HostProfile, Platform};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },

    #[error("invalid config {}: {source}", path.display())]
    Parse { path: PathBuf, source: toml::de::Error },

    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error("unknown action `{0}` in [commands]")]
    UnknownAction(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Output encoding label; defaults per platform.
    pub encoding: Option<String>,
    /// Kill commands that run longer than this. Absent or zero means no limit.
    pub timeout_secs: Option<u64>,
    /// Directory reports are written to.
    pub report_dir: Option<PathBuf>,
    /// Catalog template overrides keyed by action slug.
    #[serde(default)]
    pub commands: BTreeMap<String, String>,
    /// Extra environment for every command, e.g. `LC_ALL = "C"` for
    /// untranslated tool output.
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

impl Config {
    /// `<config dir>/netdiag/config.toml`, when the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("netdiag").join("config.toml"))
    }

    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    /// Read and parse `path`. A missing file is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let config = Self::parse(&text, path)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.filter(|&s| s > 0).map(Duration::from_secs)
    }

    pub fn host_profile(&self, platform: Platform) -> Result<HostProfile, ConfigError> {
        let encoding = match &self.encoding {
            Some(label) => OutputEncoding::from_label(label)?,
            None => platform.default_encoding(),
        };
        Ok(HostProfile::new(platform, encoding))
    }

    /// Catalog for `platform` with `[commands]` applied.
    pub fn catalog(&self, platform: Platform) -> Result<Catalog, ConfigError> {
        let overrides = self
            .commands
            .iter()
            .map(|(slug, template)| {
                let id = ActionId::from_keyword(slug)
                    .ok_or_else(|| ConfigError::UnknownAction(slug.clone()))?;
                Ok((id, template.clone()))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;
        Ok(Catalog::new(platform).with_overrides(overrides))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
