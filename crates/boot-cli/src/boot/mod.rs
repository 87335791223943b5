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

pub mod args;
pub mod cmds;
pub mod lookup;
pub mod poll;
pub mod request;

#[cfg(test)]
mod tests;

// Export so the CLI builder can just pull in boot::Opts.
// boot is a single top-level command without any subcommands.
pub use args::Opts;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;
use crate::errors::BootCliResult;

/// Network attached to every new server unless --no-public is given.
pub const PUBLIC_NETWORK_ID: &str = "00000000-0000-0000-0000-000000000000";
/// Network attached to every new server unless --no-service-net is given.
pub const SERVICE_NETWORK_ID: &str = "11111111-1111-1111-1111-111111111111";

impl Dispatch for Opts {
    async fn dispatch(self, mut ctx: RuntimeContext) -> BootCliResult<()> {
        cmds::boot(
            self,
            &ctx.config,
            ctx.compute_client.as_ref(),
            &mut ctx.output_file,
        )
        .await
    }
}
