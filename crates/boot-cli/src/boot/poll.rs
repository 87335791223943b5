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

use std::time::Duration;

use compute_client::{ComputeClient, ComputeError};
use serde_json::Value;
use tokio::io::AsyncWrite;

use crate::errors::{BootCliError, BootCliResult};

/// Re-fetches the server every `poll_period` until its status is one of
/// `final_ok_states` or `error`, reporting progress on `output`.
/// There is no timeout; interrupt the process to stop waiting.
pub async fn poll_for_status<W>(
    client: &dyn ComputeClient,
    id: &str,
    action: &str,
    final_ok_states: &[&str],
    poll_period: Duration,
    output: &mut W,
) -> BootCliResult<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    loop {
        let server = client.get_server(id).await?;
        let status = server
            .get("status")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                ComputeError::Serde(format!("server {id} response did not include a status"))
            })?
            .to_lowercase();
        let progress = server
            .get("progress")
            .and_then(Value::as_u64)
            .unwrap_or(0);
        tracing::debug!(id, %status, progress, "polled server status");

        if final_ok_states.contains(&status.as_str()) {
            crate::async_writeln!(output, "\nFinished")?;
            return Ok(());
        }
        if status == "error" {
            crate::async_writeln!(output, "\nError {action} instance")?;
            return Err(BootCliError::ServerFailed {
                action: action.to_string(),
                id: id.to_string(),
            });
        }

        crate::async_write!(output, "\rInstance {action}... {progress}% complete")?;
        tokio::time::sleep(poll_period).await;
    }
}
