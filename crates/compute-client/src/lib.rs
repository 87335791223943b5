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

// these are not visible outside of this crate
mod client;
mod models;

use std::time::Duration;

pub use client::{ComputeClient, NovaComputeClient};
pub use models::{
    BlockDeviceMapping, ConfigDrive, Flavor, Image, InvalidNicArgument, NicDescriptor,
    Personality, SchedulerHint, SecurityGroupRef, ServerCreateRequest, ServerInfo,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Compute endpoint including the API version and project,
    /// e.g. https://nova.example.com/v2/0123456789abcdef
    pub compute_api_url: String,
    pub auth_token: Option<String>,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            compute_api_url: Default::default(),
            auth_token: None,
            request_timeout: Duration::from_secs(60),
        }
    }
}

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum ComputeError {
    #[error("Error talking to the compute service: {0}")]
    Communication(String),
    #[error("Error Serialising/Deserialising: {0}")]
    Serde(String),
    #[error("No {kind} with ID '{id}' exists")]
    NotFound { kind: &'static str, id: String },
    #[error("Compute service returned HTTP {status}: {message}")]
    Api { status: u16, message: String },
    #[error("Invalid compute URL: {0}")]
    Url(String),
}

impl From<reqwest::Error> for ComputeError {
    fn from(value: reqwest::Error) -> ComputeError {
        ComputeError::Communication(format!("Communication error: {}", value))
    }
}

impl From<serde_json::Error> for ComputeError {
    fn from(value: serde_json::Error) -> ComputeError {
        ComputeError::Serde(value.to_string())
    }
}
