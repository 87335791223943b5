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

use clap::{ArgAction, Parser};
use compute_client::{BlockDeviceMapping, NicDescriptor};

#[derive(Parser, Debug, Clone)]
pub struct Opts {
    #[clap(value_name = "NAME", help = "Name for the new server")]
    pub name: String,

    #[clap(long, value_name = "FLAVOR", help = "Flavor ID (see 'nova flavor-list').")]
    pub flavor: Option<String>,

    #[clap(long, value_name = "IMAGE", help = "Image ID (see 'nova image-list').")]
    pub image: Option<String>,

    #[clap(
        long = "meta",
        value_name = "KEY=VALUE",
        value_parser = parse_key_val,
        help = "Record arbitrary key/value metadata to /meta.js on the new server. Can be specified multiple times."
    )]
    pub meta: Vec<(String, String)>,

    #[clap(
        long = "file",
        value_name = "DST-PATH=SRC-PATH",
        value_parser = parse_key_val,
        help = "Store arbitrary files from <src-path> locally to <dst-path> on the new server. You may store up to 5 files."
    )]
    pub files: Vec<(String, String)>,

    #[clap(
        long,
        alias = "key_name",
        value_name = "KEY_NAME",
        help = "Key name of keypair that should be created earlier with the command keypair-add"
    )]
    pub key_name: Option<String>,

    #[clap(
        long,
        alias = "user_data",
        value_name = "USER_DATA",
        help = "user data file to pass to be exposed by the metadata server."
    )]
    pub user_data: Option<String>,

    #[clap(
        long,
        alias = "availability_zone",
        value_name = "AVAILABILITY_ZONE",
        help = "The availability zone for instance placement."
    )]
    pub availability_zone: Option<String>,

    #[clap(
        long,
        alias = "security_groups",
        value_name = "SECURITY_GROUPS",
        help = "Comma separated list of security group names."
    )]
    pub security_groups: Option<String>,

    #[clap(
        long,
        alias = "block_device_mapping",
        value_name = "DEV-NAME=MAPPING",
        value_parser = parse_block_device_mapping,
        help = "Block device mapping in the format <dev-name>=<id>:<type>:<size(GB)>:<delete-on-terminate>."
    )]
    pub block_device_mapping: Vec<BlockDeviceMapping>,

    #[clap(
        long = "hint",
        value_name = "KEY=VALUE",
        value_parser = parse_hint,
        help = "Send arbitrary key/value pairs to the scheduler for custom use."
    )]
    pub scheduler_hints: Vec<(String, String)>,

    #[clap(
        long = "nic",
        value_name = "net-id=net-uuid,v4-fixed-ip=ip-addr",
        help = "Create a NIC on the server. Specify option multiple times to create multiple NICs.\n\
                net-id: attach NIC to network with this UUID (optional)\n\
                v4-fixed-ip: IPv4 fixed address for NIC (optional).\n\
                port-id: attach NIC to port with this UUID (optional)"
    )]
    pub nics: Vec<NicDescriptor>,

    #[clap(long, value_name = "VALUE", help = "Enable config drive")]
    pub config_drive: Option<String>,

    #[clap(
        long,
        help = "Blocks while instance builds so progress can be reported."
    )]
    pub poll: bool,

    #[clap(
        long = "no-public",
        action = ArgAction::SetFalse,
        help = "Boot instance without public network connectivity."
    )]
    pub public: bool,

    #[clap(
        long = "no-service-net",
        action = ArgAction::SetFalse,
        help = "Boot instance without service network connectivity."
    )]
    pub service_net: bool,
}

pub(crate) fn parse_key_val(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("invalid KEY=VALUE: no `=` found in `{s}`"))
}

// A hint without `=` is a key with an empty value.
pub(crate) fn parse_hint(s: &str) -> Result<(String, String), String> {
    let (key, value) = s.split_once('=').unwrap_or((s, ""));
    Ok((key.to_string(), value.to_string()))
}

// <dev-name>=<id>[:<type>[:<size(GB)>[:<delete-on-terminate>]]]
pub(crate) fn parse_block_device_mapping(s: &str) -> Result<BlockDeviceMapping, String> {
    let (device_name, mapping) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid block device mapping: no `=` found in `{s}`"))?;

    let mut parts = mapping.split(':');
    let id = parts.next().unwrap_or_default().to_string();
    let mut bdm = BlockDeviceMapping {
        device_name: device_name.to_string(),
        ..Default::default()
    };
    match parts.next() {
        Some(kind) if kind.starts_with("snap") => bdm.snapshot_id = Some(id),
        _ => bdm.volume_id = Some(id),
    }
    bdm.volume_size = parts.next().map(str::to_string);
    bdm.delete_on_termination = parts.next().map(str::to_string);
    Ok(bdm)
}
