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

// In-memory compute service for exercising commands without HTTP.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use compute_client::{ComputeClient, ComputeError, Flavor, Image, ServerCreateRequest, ServerInfo};
use serde_json::json;

#[derive(Debug)]
pub struct StubCompute {
    pub create_response: ServerInfo,
    pub fetch_response: ServerInfo,
    /// Status reported by each get_server call. The last one repeats.
    /// An empty status leaves the field out of the response.
    pub statuses: Mutex<VecDeque<&'static str>>,
    pub created: Mutex<Vec<ServerCreateRequest>>,
    pub server_gets: AtomicUsize,
    pub flavors: Vec<Flavor>,
    pub images: Vec<Image>,
}

fn object(value: serde_json::Value) -> ServerInfo {
    value.as_object().cloned().unwrap_or_default()
}

impl Default for StubCompute {
    fn default() -> Self {
        StubCompute {
            create_response: object(json!({
                "id": "abc",
                "name": "pending",
                "adminPass": "hunter2",
                "flavor": {"id": "1"},
                "image": {"id": "2"},
                "links": [{"rel": "self", "href": "http://nova/servers/abc"}],
                "addresses": {"public": [{"addr": "203.0.113.7", "version": 4}]},
            })),
            fetch_response: object(json!({
                "id": "abc",
                "name": "test1",
                "flavor": {"id": "1", "links": []},
                "image": {"id": "2", "links": []},
                "links": [{"rel": "self", "href": "http://nova/servers/abc"}],
                "addresses": {},
                "progress": 0,
            })),
            statuses: Mutex::new(VecDeque::from(["BUILD"])),
            created: Mutex::new(Vec::new()),
            server_gets: AtomicUsize::new(0),
            flavors: vec![
                Flavor {
                    id: "1".to_string(),
                    name: "m1.small".to_string(),
                },
                Flavor {
                    id: "3".to_string(),
                    name: "m1.large".to_string(),
                },
            ],
            images: vec![
                Image {
                    id: "2".to_string(),
                    name: "ubuntu".to_string(),
                    status: Some("ACTIVE".to_string()),
                },
                Image {
                    id: "4".to_string(),
                    name: "debian".to_string(),
                    status: Some("ACTIVE".to_string()),
                },
                Image {
                    id: "5".to_string(),
                    name: "debian".to_string(),
                    status: Some("ACTIVE".to_string()),
                },
            ],
        }
    }
}

impl StubCompute {
    pub fn with_statuses(statuses: &[&'static str]) -> Self {
        StubCompute {
            statuses: Mutex::new(statuses.iter().copied().collect()),
            ..Default::default()
        }
    }

    pub fn last_request(&self) -> ServerCreateRequest {
        self.created
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no server was created")
    }

    fn next_status(&self) -> &'static str {
        let mut statuses = self.statuses.lock().unwrap();
        if statuses.len() > 1 {
            statuses.pop_front().unwrap_or_default()
        } else {
            statuses.front().copied().unwrap_or_default()
        }
    }
}

fn not_found(kind: &'static str, id: &str) -> ComputeError {
    ComputeError::NotFound {
        kind,
        id: id.to_string(),
    }
}

#[async_trait]
impl ComputeClient for StubCompute {
    async fn create_server(
        &self,
        request: &ServerCreateRequest,
    ) -> Result<ServerInfo, ComputeError> {
        self.created.lock().unwrap().push(request.clone());
        Ok(self.create_response.clone())
    }

    async fn get_server(&self, id: &str) -> Result<ServerInfo, ComputeError> {
        if self.fetch_response.get("id").and_then(|v| v.as_str()) != Some(id) {
            return Err(not_found("server", id));
        }
        self.server_gets.fetch_add(1, Ordering::SeqCst);
        let mut server = self.fetch_response.clone();
        let status = self.next_status();
        if !status.is_empty() {
            server.insert("status".to_string(), json!(status));
        }
        Ok(server)
    }

    async fn get_flavor(&self, id: &str) -> Result<Flavor, ComputeError> {
        self.flavors
            .iter()
            .find(|f| f.id == id)
            .cloned()
            .ok_or_else(|| not_found("flavor", id))
    }

    async fn list_flavors(&self) -> Result<Vec<Flavor>, ComputeError> {
        Ok(self.flavors.clone())
    }

    async fn get_image(&self, id: &str) -> Result<Image, ComputeError> {
        self.images
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(|| not_found("image", id))
    }

    async fn list_images(&self) -> Result<Vec<Image>, ComputeError> {
        Ok(self.images.clone())
    }
}
