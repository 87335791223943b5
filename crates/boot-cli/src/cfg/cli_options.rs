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

use std::path::PathBuf;

use clap::{Parser, ValueHint};

use crate::boot;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[clap(name = "nova-boot", version)]
#[clap(about = "Boot servers with the default public and service networks attached.")]
pub struct CliOptions {
    #[clap(long, env = "OS_COMPUTE_API_URL", value_hint = ValueHint::Url)]
    #[clap(
        help = "Compute endpoint including the API version and project. Default to OS_COMPUTE_API_URL environment variable or compute_api_url in the config file."
    )]
    pub os_compute_api_url: Option<String>,

    #[clap(long, env = "OS_AUTH_TOKEN", hide_env_values = true)]
    #[clap(
        help = "Pre-issued auth token sent as X-Auth-Token. Default to OS_AUTH_TOKEN environment variable or auth_token in the config file."
    )]
    pub os_auth_token: Option<String>,

    #[clap(long, env = "NOVA_BOOT_CONFIG", value_hint = ValueHint::FilePath)]
    #[clap(help = "TOML config file. Default to $HOME/.config/nova_boot.toml when it exists.")]
    pub config: Option<PathBuf>,

    #[clap(short, long, value_enum, default_value = "ascii-table")]
    pub format: OutputFormat,

    #[clap(short, long, action = clap::ArgAction::Count)]
    #[clap(help = "Increase log verbosity. RUST_LOG takes precedence when set.")]
    pub debug: u8,

    #[clap(subcommand)]
    pub commands: CliCommand,
}

#[derive(Parser, Debug)]
pub enum CliCommand {
    #[clap(about = "Boot a new server.")]
    Boot(boot::Opts),
}

impl CliOptions {
    pub fn load() -> Self {
        Self::parse()
    }
}
