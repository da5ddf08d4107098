// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::Error;
use serde::de::DeserializeOwned;
use std::fs::read_to_string;

/// Configuration parameters for the various collaborators.
#[derive(Debug)]
pub struct ShortbearConfig {
    debug_enabled: bool,
    toml: String,
}

impl ShortbearConfig {
    /// Creates a configuration builder.
    pub fn builder() -> ShortbearConfigBuilder {
        ShortbearConfigBuilder {
            debug_enabled: false,
            toml: Err(Error::Config("config not set".to_string())),
        }
    }

    /// Returns `true` if debug is enabled.
    pub fn debug(&self) -> bool {
        self.debug_enabled
    }

    /// Returns configuration parameters.
    pub fn get<T: DeserializeOwned>(&self) -> Result<T, Error> {
        toml::from_str(&self.toml).map_err(|e: toml::de::Error| Error::String(format!("toml: {e}")))
    }
}

/// Accumulates configuration TOML for `ShortbearConfig`.
pub struct ShortbearConfigBuilder {
    debug_enabled: bool,
    toml: Result<String, Error>,
}

impl ShortbearConfigBuilder {
    /// Returns the configuration, or the first error the builder ran into.
    pub fn build(self) -> Result<ShortbearConfig, Error> {
        let Self {
            debug_enabled,
            toml,
        } = self;
        toml.map(|toml| ShortbearConfig {
            debug_enabled,
            toml,
        })
    }

    /// Enables or disables debug.
    pub fn debug(mut self, debug_enabled: bool) -> Self {
        self.debug_enabled = debug_enabled;
        self
    }

    /// Reads configuration TOML from the specified file, looked up in the
    /// current directory and then in the home directory.
    pub fn toml_file(mut self, file_name: &str) -> Self {
        let local_path = format!("./{file_name}");
        let home_path = std::env::var("HOME")
            .ok()
            .map(|home| format!("{home}/{file_name}"));
        self.toml = read_to_string(&local_path)
            .ok()
            .or_else(|| home_path.and_then(|path| read_to_string(path).ok()))
            .ok_or(Error::Config(format!("{local_path}: cannot read")));
        self
    }

    /// Uses the specified string as configuration TOML.
    pub fn toml_str(mut self, toml: &str) -> Self {
        self.toml = Ok(toml.to_string());
        self
    }
}
