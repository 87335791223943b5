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

use std::collections::BTreeMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use compute_client::{
    BlockDeviceMapping, ComputeClient, ConfigDrive, Personality, SchedulerHint,
    SecurityGroupRef, ServerCreateRequest,
};

use super::args::Opts;
use super::lookup::{find_flavor, find_image};
use crate::errors::{BootCliError, BootCliResult};

/// Turns the boot flags into a create request. Flavor and image may be
/// given by name or ID; the request always carries the resolved IDs.
pub async fn build_boot_request(
    client: &dyn ComputeClient,
    opts: &Opts,
) -> BootCliResult<ServerCreateRequest> {
    let Some(flavor) = opts.flavor.as_deref() else {
        return Err(BootCliError::CommandError(
            "you need to specify a Flavor ID".to_string(),
        ));
    };

    let image_ref = match opts.image.as_deref() {
        Some(image) => find_image(client, image).await?.id,
        // booting from a volume
        None if !opts.block_device_mapping.is_empty() => String::new(),
        None => {
            return Err(BootCliError::CommandError(
                "you need to specify an Image ID or a block device mapping".to_string(),
            ));
        }
    };
    let flavor_ref = find_flavor(client, flavor).await?.id;

    let mut request = ServerCreateRequest::new(opts.name.clone(), image_ref, flavor_ref);
    request.metadata = opts.meta.iter().cloned().collect();
    for (dst, src) in &opts.files {
        request.personality.push(Personality {
            path: dst.clone(),
            contents: read_base64(src).await?,
        });
    }
    request.key_name = opts.key_name.clone();
    request.user_data = match &opts.user_data {
        Some(path) => Some(read_base64(path).await?),
        None => None,
    };
    request.availability_zone = opts.availability_zone.clone();
    request.security_groups = opts
        .security_groups
        .as_deref()
        .map(security_groups)
        .unwrap_or_default();
    request.block_device_mapping = dedup_block_devices(&opts.block_device_mapping);
    request.nics = opts.nics.clone();
    request.scheduler_hints = scheduler_hints(&opts.scheduler_hints);
    request.config_drive = config_drive(opts.config_drive.as_deref());

    Ok(request)
}

async fn read_base64(path: &str) -> BootCliResult<String> {
    let contents = tokio::fs::read(path)
        .await
        .map_err(|error| BootCliError::CouldNotRead {
            path: path.to_string(),
            error,
        })?;
    Ok(BASE64.encode(contents))
}

fn security_groups(names: &str) -> Vec<SecurityGroupRef> {
    names
        .split(',')
        .map(|name| SecurityGroupRef {
            name: name.to_string(),
        })
        .collect()
}

// The last mapping for a device name wins, keeping first-seen order.
fn dedup_block_devices(mappings: &[BlockDeviceMapping]) -> Vec<BlockDeviceMapping> {
    let mut result: Vec<BlockDeviceMapping> = Vec::with_capacity(mappings.len());
    for bdm in mappings {
        match result.iter_mut().find(|b| b.device_name == bdm.device_name) {
            Some(existing) => *existing = bdm.clone(),
            None => result.push(bdm.clone()),
        }
    }
    result
}

fn scheduler_hints(hints: &[(String, String)]) -> BTreeMap<String, SchedulerHint> {
    let mut result: BTreeMap<String, SchedulerHint> = BTreeMap::new();
    for (key, value) in hints {
        match result.get_mut(key) {
            Some(hint) => hint.push(value.clone()),
            None => {
                result.insert(key.clone(), SchedulerHint::Single(value.clone()));
            }
        }
    }
    result
}

fn config_drive(value: Option<&str>) -> Option<ConfigDrive> {
    let value = value?;
    match value.to_lowercase().as_str() {
        "true" | "1" => Some(ConfigDrive::Enabled),
        "false" | "0" | "" | "none" => None,
        _ => Some(ConfigDrive::Value(value.to_string())),
    }
}
