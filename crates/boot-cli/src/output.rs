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

use clap::ValueEnum;
use compute_client::ServerInfo;
use prettytable::{Table, row};
use serde_json::Value;
use tokio::io::AsyncWrite;

use crate::errors::{BootCliError, BootCliResult};

#[derive(PartialEq, Eq, ValueEnum, Clone, Copy, Debug)]
#[clap(rename_all = "kebab_case")]
pub enum OutputFormat {
    AsciiTable,
    Json,
    Csv,
}

// Strings print bare, null prints as None, and anything structured is
// rendered as compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "None".to_string(),
        other => other.to_string(),
    }
}

/// Two-column Property/Value table, sorted by property.
pub fn info_to_table(info: &ServerInfo) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Property", "Value"]);

    let mut properties: Vec<_> = info.iter().collect();
    properties.sort_by(|(a, _), (b, _)| a.cmp(b));
    for (property, value) in properties {
        table.add_row(row![property, display_value(value)]);
    }

    table
}

pub async fn print_dict<W>(
    info: &ServerInfo,
    format: OutputFormat,
    output: &mut W,
) -> BootCliResult<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    match format {
        OutputFormat::Json => {
            crate::async_writeln!(output, "{}", serde_json::to_string_pretty(info)?)?;
        }
        OutputFormat::Csv => {
            let mut csv = Vec::default();
            info_to_table(info)
                .to_csv(&mut csv)
                .map_err(|e| BootCliError::OutputError(e.to_string()))?;
            crate::async_write::write_flushed(output, &csv).await?;
        }
        OutputFormat::AsciiTable => {
            crate::async_write!(output, "{}", info_to_table(info))?;
        }
    }
    Ok(())
}
