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

mod async_write;
mod boot;
mod cfg;
mod errors;
mod output;
#[cfg(test)]
mod test_support;

use std::sync::Arc;

use cfg::cli_options::{CliCommand, CliOptions};
use cfg::dispatch::Dispatch;
use cfg::file::FileConfig;
use cfg::runtime::{RuntimeConfig, RuntimeContext};
use compute_client::NovaComputeClient;
use eyre::{WrapErr, eyre};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;

fn init_logging(debug: u8) -> color_eyre::Result<()> {
    let default_level = match debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::builder().parse(default_level))?;

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(console_layer).try_init()?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let options = CliOptions::load();
    init_logging(options.debug)?;

    let file_config = FileConfig::load_or_default(options.config.as_deref())?;

    let compute_api_url = options
        .os_compute_api_url
        .or(file_config.compute_api_url)
        .ok_or_else(|| {
            eyre!(
                "No compute API URL configured. Pass --os-compute-api-url, set OS_COMPUTE_API_URL or add compute_api_url to the config file."
            )
        })?;
    let client_config = compute_client::Config {
        compute_api_url,
        auth_token: options.os_auth_token.or(file_config.auth_token),
        request_timeout: file_config.request_timeout,
    };
    if client_config.auth_token.is_none() {
        tracing::warn!("no auth token configured, requests will be sent unauthenticated");
    }
    let compute_client = NovaComputeClient::new_with_config(&client_config)
        .wrap_err("Unable to set up the compute client")?;

    let ctx = RuntimeContext {
        compute_client: Arc::new(compute_client),
        config: RuntimeConfig {
            format: options.format,
            public_network_id: file_config.public_network_id,
            service_network_id: file_config.service_network_id,
            poll_period: file_config.poll_period,
        },
        output_file: Box::pin(tokio::io::stdout()),
    };

    match options.commands {
        CliCommand::Boot(opts) => opts.dispatch(ctx).await?,
    }

    Ok(())
}
