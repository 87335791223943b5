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
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

/// Attributes of a server exactly as the compute service returned them.
pub type ServerInfo = serde_json::Map<String, serde_json::Value>;

/// A virtual network interface to attach to a new server. Empty strings
/// mean "not set", which is also how they appear on the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NicDescriptor {
    #[serde(rename = "net-id", default)]
    pub net_id: String,
    #[serde(rename = "v4-fixed-ip", default)]
    pub v4_fixed_ip: String,
    #[serde(rename = "port-id", default)]
    pub port_id: String,
}

impl NicDescriptor {
    /// A NIC on the given network with no fixed IP and no port.
    pub fn network(net_id: impl Into<String>) -> NicDescriptor {
        NicDescriptor {
            net_id: net_id.into(),
            ..Default::default()
        }
    }

    fn network_entry(&self) -> NetworkEntry<'_> {
        NetworkEntry {
            uuid: non_empty(&self.net_id),
            fixed_ip: non_empty(&self.v4_fixed_ip),
            port: non_empty(&self.port_id),
        }
    }
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error(
    "Invalid nic argument '{0}'. Nic arguments must be of the form --nic <net-id=net-uuid,v4-fixed-ip=ip-addr,port-id=port-uuid>, with at minimum net-id or port-id specified."
)]
pub struct InvalidNicArgument(pub String);

// Parses `net-id=<uuid>,v4-fixed-ip=<ip>,port-id=<uuid>`.
impl FromStr for NicDescriptor {
    type Err = InvalidNicArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidNicArgument(s.to_string());
        let mut nic = NicDescriptor::default();
        for kv in s.split(',') {
            let (key, value) = kv.split_once('=').ok_or_else(invalid)?;
            let slot = match key {
                "net-id" => &mut nic.net_id,
                "v4-fixed-ip" => &mut nic.v4_fixed_ip,
                "port-id" => &mut nic.port_id,
                _ => return Err(invalid()),
            };
            *slot = value.to_string();
        }
        if nic.net_id.is_empty() && nic.port_id.is_empty() {
            return Err(invalid());
        }
        Ok(nic)
    }
}

#[derive(Serialize)]
struct NetworkEntry<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    uuid: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fixed_ip: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    port: Option<&'a str>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flavor {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// A file injected into the server, contents base64 encoded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Personality {
    pub path: String,
    pub contents: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SecurityGroupRef {
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BlockDeviceMapping {
    pub device_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_on_termination: Option<String>,
}

/// Repeating a hint key turns its value into a list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SchedulerHint {
    Single(String),
    Multiple(Vec<String>),
}

impl SchedulerHint {
    pub fn push(&mut self, value: String) {
        match self {
            SchedulerHint::Single(first) => {
                *self = SchedulerHint::Multiple(vec![std::mem::take(first), value]);
            }
            SchedulerHint::Multiple(values) => values.push(value),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigDrive {
    Enabled,
    /// Passed through untouched, e.g. the ID of an image to use as the drive.
    Value(String),
}

impl Serialize for ConfigDrive {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ConfigDrive::Enabled => serializer.serialize_bool(true),
            ConfigDrive::Value(value) => serializer.serialize_str(value),
        }
    }
}

/// Everything needed to create one server. Serializes as the `server`
/// object of a create request; scheduler hints travel next to it, see
/// [`ServerCreateRequest::to_body`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ServerCreateRequest {
    pub name: String,
    #[serde(rename = "imageRef")]
    pub image_ref: String,
    #[serde(rename = "flavorRef")]
    pub flavor_ref: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub personality: Vec<Personality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub security_groups: Vec<SecurityGroupRef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub block_device_mapping: Vec<BlockDeviceMapping>,
    #[serde(
        rename = "networks",
        skip_serializing_if = "Vec::is_empty",
        serialize_with = "serialize_networks"
    )]
    pub nics: Vec<NicDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_drive: Option<ConfigDrive>,
    pub min_count: u32,
    pub max_count: u32,
    #[serde(skip)]
    pub scheduler_hints: BTreeMap<String, SchedulerHint>,
}

impl ServerCreateRequest {
    pub fn new(
        name: impl Into<String>,
        image_ref: impl Into<String>,
        flavor_ref: impl Into<String>,
    ) -> ServerCreateRequest {
        ServerCreateRequest {
            name: name.into(),
            image_ref: image_ref.into(),
            flavor_ref: flavor_ref.into(),
            metadata: BTreeMap::new(),
            personality: Vec::new(),
            key_name: None,
            user_data: None,
            availability_zone: None,
            security_groups: Vec::new(),
            block_device_mapping: Vec::new(),
            nics: Vec::new(),
            config_drive: None,
            min_count: 1,
            max_count: 1,
            scheduler_hints: BTreeMap::new(),
        }
    }

    /// The JSON document POSTed to `/servers`.
    pub fn to_body(&self) -> Result<serde_json::Value, serde_json::Error> {
        let mut body = serde_json::Map::new();
        body.insert("server".to_string(), serde_json::to_value(self)?);
        if !self.scheduler_hints.is_empty() {
            body.insert(
                "os:scheduler_hints".to_string(),
                serde_json::to_value(&self.scheduler_hints)?,
            );
        }
        Ok(serde_json::Value::Object(body))
    }
}

#[allow(clippy::ptr_arg)]
fn serialize_networks<S: Serializer>(
    nics: &Vec<NicDescriptor>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(nics.iter().map(NicDescriptor::network_entry))
}
