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

use compute_client::{ComputeClient, ComputeError, Flavor, Image};

use crate::errors::{BootCliError, BootCliResult};

trait Named {
    fn name(&self) -> &str;
}

impl Named for Flavor {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Image {
    fn name(&self) -> &str {
        &self.name
    }
}

fn pick_by_name<T: Named>(kind: &'static str, name: &str, candidates: Vec<T>) -> BootCliResult<T> {
    let mut matches = candidates.into_iter().filter(|c| c.name() == name);
    match (matches.next(), matches.next()) {
        (Some(found), None) => Ok(found),
        (Some(_), Some(_)) => Err(BootCliError::AmbiguousResource {
            kind,
            name: name.to_string(),
        }),
        (None, _) => Err(BootCliError::ResourceNotFound {
            kind,
            name: name.to_string(),
        }),
    }
}

/// Resolves a flavor by ID, falling back to an exact name match.
pub async fn find_flavor(client: &dyn ComputeClient, name_or_id: &str) -> BootCliResult<Flavor> {
    match client.get_flavor(name_or_id).await {
        Ok(flavor) => Ok(flavor),
        Err(ComputeError::NotFound { .. }) => {
            tracing::debug!(name_or_id, "no flavor with this ID, searching by name");
            pick_by_name("flavor", name_or_id, client.list_flavors().await?)
        }
        Err(e) => Err(e.into()),
    }
}

/// Resolves an image by ID, falling back to an exact name match.
pub async fn find_image(client: &dyn ComputeClient, name_or_id: &str) -> BootCliResult<Image> {
    match client.get_image(name_or_id).await {
        Ok(image) => Ok(image),
        Err(ComputeError::NotFound { .. }) => {
            tracing::debug!(name_or_id, "no image with this ID, searching by name");
            pick_by_name("image", name_or_id, client.list_images().await?)
        }
        Err(e) => Err(e.into()),
    }
}
