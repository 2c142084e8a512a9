// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host platform detection and the immutable host profile.

use serde::{Deserialize, Serialize};

use crate::encoding::OutputEncoding;

/// Operating system family the catalog selects command syntax for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
    /// Any other Unix-like host. Uses Linux command syntax.
    Other,
}

impl Platform {
    /// Platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::Linux => "Linux",
            Platform::MacOs => "macOS",
            Platform::Other => "Unix",
        }
    }

    pub fn is_windows(self) -> bool {
        matches!(self, Platform::Windows)
    }

    /// Console encoding used when the configuration does not name one.
    ///
    /// Windows consoles emit the legacy OEM code page; everything else is
    /// assumed to speak UTF-8.
    pub fn default_encoding(self) -> OutputEncoding {
        match self {
            Platform::Windows => OutputEncoding::Cp850,
            _ => OutputEncoding::Utf8,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Platform and output encoding, computed once at startup and passed to the
/// runner and catalog explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostProfile {
    pub platform: Platform,
    pub encoding: OutputEncoding,
}

impl HostProfile {
    pub fn new(platform: Platform, encoding: OutputEncoding) -> Self {
        Self { platform, encoding }
    }

    /// Profile of the running host with its default encoding.
    pub fn detect() -> Self {
        let platform = Platform::current();
        Self::new(platform, platform.default_encoding())
    }

    pub fn with_encoding(self, encoding: OutputEncoding) -> Self {
        Self { encoding, ..self }
    }
}

impl Default for HostProfile {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
#[path = "platform_tests.rs"]
mod tests;
