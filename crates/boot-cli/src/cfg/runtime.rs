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

use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use compute_client::ComputeClient;

use crate::output::OutputFormat;

// RuntimeContext is context passed to all subcommand
// dispatch handlers. This is built at the beginning of
// runtime and then passed to the appropriate dispatcher.
pub struct RuntimeContext {
    pub compute_client: Arc<dyn ComputeClient>,
    pub config: RuntimeConfig,
    pub output_file: Pin<Box<dyn tokio::io::AsyncWrite>>,
}

// RuntimeConfig contains runtime configuration parameters merged from
// CLI options, the environment and the config file. Command handlers
// read everything they need from here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub format: OutputFormat,
    pub public_network_id: String,
    pub service_network_id: String,
    pub poll_period: Duration,
}
