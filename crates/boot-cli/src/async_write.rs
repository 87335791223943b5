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

use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Writes all of `bytes` and flushes, so progress output shows up
/// immediately even on a buffered stdout.
pub async fn write_flushed<W>(writer: &mut W, bytes: &[u8]) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    writer.write_all(bytes).await?;
    writer.flush().await
}

/// Macro for writing formatted output to a tokio::io::AsyncWrite object
/// Similar to write! but for async writers
/// $writer must be a `&mut` to an AsyncWrite + Unpin
#[macro_export]
macro_rules! async_write {
    ($writer:expr, $($arg:tt)*) => {
        $crate::async_write::write_flushed($writer, format!($($arg)*).as_bytes()).await
    };
}

/// Macro for writing formatted output with a newline to a tokio::io::AsyncWrite object
/// Similar to writeln! but for async writers
#[macro_export]
macro_rules! async_writeln {
    ($writer:expr) => {
        $crate::async_write::write_flushed($writer, b"\n").await
    };
    ($writer:expr, $($arg:tt)+) => {{
        let mut formatted = format!($($arg)+);
        formatted.push('\n');
        $crate::async_write::write_flushed($writer, formatted.as_bytes()).await
    }};
}
