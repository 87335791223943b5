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

use compute_client::ComputeError;

pub type BootCliResult<T> = Result<T, BootCliError>;

#[derive(thiserror::Error, Debug)]
pub enum BootCliError {
    #[error(transparent)]
    Compute(#[from] ComputeError),
    // Bad flag values and other problems the user has to fix on the
    // command line.
    #[error("{0}")]
    CommandError(String),
    #[error("No {kind} with a name or ID of '{name}' exists.")]
    ResourceNotFound { kind: &'static str, name: String },
    #[error("Multiple {kind} matches found for '{name}', use an ID to be more specific.")]
    AmbiguousResource { kind: &'static str, name: String },
    #[error("Can't open '{path}': {error}")]
    CouldNotRead {
        path: String,
        error: std::io::Error,
    },
    #[error("Unable to serialize output: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Unable to write output: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Unable to render output: {0}")]
    OutputError(String),
    #[error("Error {action} instance {id}")]
    ServerFailed { action: String, id: String },
}
