/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::boot::{PUBLIC_NETWORK_ID, SERVICE_NETWORK_ID};

const DEFAULT_CONFIG_FILE: &str = ".config/nova_boot.toml";
const DEFAULT_POLL_PERIOD: Duration = Duration::from_secs(5);
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Settings read from the optional TOML config file. Everything can also
/// come from the command line or the environment, which take precedence.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub compute_api_url: Option<String>,
    #[serde(default)]
    pub auth_token: Option<String>,
    #[serde(default = "Defaults::public_network_id")]
    pub public_network_id: String,
    #[serde(default = "Defaults::service_network_id")]
    pub service_network_id: String,
    #[serde(default = "Defaults::poll_period", with = "humantime_serde")]
    pub poll_period: Duration,
    #[serde(default = "Defaults::request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,
}

pub struct Defaults;

impl Defaults {
    pub fn public_network_id() -> String {
        PUBLIC_NETWORK_ID.to_string()
    }
    pub fn service_network_id() -> String {
        SERVICE_NETWORK_ID.to_string()
    }
    pub fn poll_period() -> Duration {
        DEFAULT_POLL_PERIOD
    }
    pub fn request_timeout() -> Duration {
        DEFAULT_REQUEST_TIMEOUT
    }
    pub fn config_path() -> Option<PathBuf> {
        std::env::var_os("HOME").map(|home| PathBuf::from(home).join(DEFAULT_CONFIG_FILE))
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file: {path}: {error}")]
    CouldNotRead { path: String, error: std::io::Error },
    #[error("Invalid TOML in config file: {path}: {error}")]
    InvalidToml {
        path: String,
        error: toml::de::Error,
    },
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            compute_api_url: None,
            auth_token: None,
            public_network_id: Defaults::public_network_id(),
            service_network_id: Defaults::service_network_id(),
            poll_period: Defaults::poll_period(),
            request_timeout: Defaults::request_timeout(),
        }
    }
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let cfg = std::fs::read_to_string(path).map_err(|error| ConfigError::CouldNotRead {
            path: path.to_string_lossy().to_string(),
            error,
        })?;
        toml::from_str::<Self>(&cfg).map_err(|error| ConfigError::InvalidToml {
            path: path.to_string_lossy().to_string(),
            error,
        })
    }

    /// Loads `explicit` if given, which must then exist. Otherwise the
    /// default location is tried and silently skipped when absent.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Defaults::config_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "loading default config file");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}
