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

use compute_client::{ComputeClient, NicDescriptor, ServerInfo};
use serde_json::Value;
use tokio::io::AsyncWrite;

use super::args::Opts;
use super::{lookup, poll, request};
use crate::cfg::runtime::RuntimeConfig;
use crate::errors::{BootCliError, BootCliResult};
use crate::output;

/// Options the boot flags add on top of the plain create request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BootOptions {
    pub public: bool,
    pub service_net: bool,
    pub poll: bool,
    pub public_network_id: String,
    pub service_network_id: String,
}

impl BootOptions {
    pub fn new(opts: &Opts, config: &RuntimeConfig) -> BootOptions {
        BootOptions {
            public: opts.public,
            service_net: opts.service_net,
            poll: opts.poll,
            public_network_id: config.public_network_id.clone(),
            service_network_id: config.service_network_id.clone(),
        }
    }

    /// The default NICs, public first.
    pub fn default_nics(&self) -> Vec<NicDescriptor> {
        let mut nics = Vec::new();
        if self.public {
            nics.push(NicDescriptor::network(&self.public_network_id));
        }
        if self.service_net {
            nics.push(NicDescriptor::network(&self.service_network_id));
        }
        nics
    }
}

// `info[key]["id"]`, or "" when the reference is missing.
fn reference_id(info: &ServerInfo, key: &str) -> String {
    info.get(key)
        .and_then(|reference| reference.get("id"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

pub async fn boot<W>(
    opts: Opts,
    config: &RuntimeConfig,
    client: &dyn ComputeClient,
    output: &mut W,
) -> BootCliResult<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    let mut create_request = request::build_boot_request(client, &opts).await?;
    let boot_options = BootOptions::new(&opts, config);

    // User supplied NICs come first.
    create_request.nics.extend(boot_options.default_nics());

    tracing::info!(
        name = %create_request.name,
        nics = create_request.nics.len(),
        "creating server"
    );
    let mut info = client.create_server(&create_request).await?;

    let id = info
        .get("id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            BootCliError::CommandError("create response did not include a server id".to_string())
        })?;

    // Keep anything only the create response carries, like adminPass.
    info.extend(client.get_server(&id).await?);

    let flavor = lookup::find_flavor(client, &reference_id(&info, "flavor")).await?;
    info.insert("flavor".to_string(), Value::String(flavor.name));

    let image = lookup::find_image(client, &reference_id(&info, "image")).await?;
    info.insert("image".to_string(), Value::String(image.name));

    info.remove("links");
    info.remove("addresses");

    output::print_dict(&info, config.format, output).await?;

    if boot_options.poll {
        poll::poll_for_status(
            client,
            &id,
            "building",
            &["active"],
            config.poll_period,
            output,
        )
        .await?;
    }

    Ok(())
}
