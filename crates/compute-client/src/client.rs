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

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{ComputeError, Flavor, Image, ServerCreateRequest, ServerInfo};

// trait to invoke REST methods on the compute service
#[async_trait]
pub trait ComputeClient: std::fmt::Debug + Send + Sync + 'static {
    async fn create_server(&self, request: &ServerCreateRequest)
    -> Result<ServerInfo, ComputeError>;
    async fn get_server(&self, id: &str) -> Result<ServerInfo, ComputeError>;
    async fn get_flavor(&self, id: &str) -> Result<Flavor, ComputeError>;
    async fn list_flavors(&self) -> Result<Vec<Flavor>, ComputeError>;
    async fn get_image(&self, id: &str) -> Result<Image, ComputeError>;
    async fn list_images(&self) -> Result<Vec<Image>, ComputeError>;
}

#[derive(Deserialize)]
struct ServerEnvelope {
    server: ServerInfo,
}

#[derive(Deserialize)]
struct FlavorEnvelope {
    flavor: Flavor,
}

#[derive(Deserialize)]
struct FlavorsEnvelope {
    flavors: Vec<Flavor>,
}

#[derive(Deserialize)]
struct ImageEnvelope {
    image: Image,
}

#[derive(Deserialize)]
struct ImagesEnvelope {
    images: Vec<Image>,
}

#[derive(Debug)]
pub struct NovaComputeClient {
    config: crate::Config,
    base_url: Url,
    http_client: reqwest::Client,
}

impl NovaComputeClient {
    pub fn new_with_config(config: &crate::Config) -> Result<NovaComputeClient, ComputeError> {
        let base_url = Url::parse(&config.compute_api_url)
            .map_err(|e| ComputeError::Url(format!("{}: {}", config.compute_api_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ComputeError::Url(config.compute_api_url.clone()));
        }
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(NovaComputeClient {
            config: config.clone(),
            base_url,
            http_client,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ComputeError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ComputeError::Url(self.config.compute_api_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: reqwest::Method, url: Url) -> reqwest::RequestBuilder {
        tracing::debug!(%method, %url, "compute request");
        let builder = self
            .http_client
            .request(method, url)
            .header("Accept", "application/json");
        match &self.config.auth_token {
            Some(token) => builder.header("X-Auth-Token", token),
            None => builder,
        }
    }

    // Sends the request and decodes a successful JSON response. A 404 is
    // NotFound only for lookups of `resource` (kind, id); otherwise it is
    // an Api error like any other fault.
    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        resource: Option<(&'static str, &str)>,
    ) -> Result<T, ComputeError> {
        let response = request.send().await?;
        let status_code = response.status();
        let response_text = response.text().await?;
        tracing::trace!(%status_code, body = %response_text, "compute response");

        if status_code == reqwest::StatusCode::NOT_FOUND {
            if let Some((kind, id)) = resource {
                return Err(ComputeError::NotFound {
                    kind,
                    id: id.to_string(),
                });
            }
        }
        if !status_code.is_success() {
            return Err(ComputeError::Api {
                status: status_code.as_u16(),
                message: fault_message(&response_text),
            });
        }

        serde_json::from_str(&response_text)
            .map_err(|e| ComputeError::Serde(format!("Error decoding response: {}", e)))
    }
}

// Compute faults look like {"itemNotFound": {"message": "...", "code": 404}}.
// Fall back to the raw body for anything else.
fn fault_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .as_object()?
                .values()
                .find_map(|fault| fault.get("message")?.as_str().map(str::to_string))
        })
        .unwrap_or_else(|| body.to_string())
}

#[async_trait]
impl ComputeClient for NovaComputeClient {
    async fn create_server(
        &self,
        request: &ServerCreateRequest,
    ) -> Result<ServerInfo, ComputeError> {
        let body = request.to_body()?;
        let url = self.endpoint(&["servers"])?;
        let envelope: ServerEnvelope = self
            .send(self.request(reqwest::Method::POST, url).json(&body), None)
            .await?;
        Ok(envelope.server)
    }

    async fn get_server(&self, id: &str) -> Result<ServerInfo, ComputeError> {
        let url = self.endpoint(&["servers", id])?;
        let envelope: ServerEnvelope = self
            .send(self.request(reqwest::Method::GET, url), Some(("server", id)))
            .await?;
        Ok(envelope.server)
    }

    async fn get_flavor(&self, id: &str) -> Result<Flavor, ComputeError> {
        let url = self.endpoint(&["flavors", id])?;
        let envelope: FlavorEnvelope = self
            .send(self.request(reqwest::Method::GET, url), Some(("flavor", id)))
            .await?;
        Ok(envelope.flavor)
    }

    async fn list_flavors(&self) -> Result<Vec<Flavor>, ComputeError> {
        let url = self.endpoint(&["flavors", "detail"])?;
        let envelope: FlavorsEnvelope = self
            .send(self.request(reqwest::Method::GET, url), None)
            .await?;
        Ok(envelope.flavors)
    }

    async fn get_image(&self, id: &str) -> Result<Image, ComputeError> {
        let url = self.endpoint(&["images", id])?;
        let envelope: ImageEnvelope = self
            .send(self.request(reqwest::Method::GET, url), Some(("image", id)))
            .await?;
        Ok(envelope.image)
    }

    async fn list_images(&self) -> Result<Vec<Image>, ComputeError> {
        let url = self.endpoint(&["images", "detail"])?;
        let envelope: ImagesEnvelope = self
            .send(self.request(reqwest::Method::GET, url), None)
            .await?;
        Ok(envelope.images)
    }
}
