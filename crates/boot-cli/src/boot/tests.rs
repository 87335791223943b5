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

// The intent of the tests.rs file is to test the integrity of the
// command, including things like basic structure parsing, enum
// translations, and any external input validators that are
// configured. Specific "categories" are:
//
// Command Structure - Baseline debug_assert() of the entire command.
// Argument Parsing  - Ensure required/optional arg combinations parse correctly.
// Boot Procedure    - Run the command against an in-memory compute service.

use std::sync::atomic::Ordering;
use std::time::Duration;

use clap::{CommandFactory, Parser};
use compute_client::NicDescriptor;

use super::args::*;
use super::cmds::{BootOptions, boot};
use super::{PUBLIC_NETWORK_ID, SERVICE_NETWORK_ID};
use crate::cfg::cli_options::{CliCommand, CliOptions};
use crate::cfg::runtime::RuntimeConfig;
use crate::errors::BootCliError;
use crate::output::OutputFormat;
use crate::test_support::StubCompute;

// verify_cmd_structure runs a baseline clap debug_assert()
// to do basic command configuration checking and validation,
// ensuring things like unique argument definitions, group
// configurations, argument references, etc. Things that would
// otherwise be missed until runtime.
#[test]
fn verify_cmd_structure() {
    Opts::command().debug_assert();
    CliOptions::command().debug_assert();
}

fn parse(args: &[&str]) -> Opts {
    Opts::try_parse_from(std::iter::once("boot").chain(args.iter().copied()))
        .expect("should parse boot")
}

fn runtime_config(format: OutputFormat) -> RuntimeConfig {
    RuntimeConfig {
        format,
        public_network_id: PUBLIC_NETWORK_ID.to_string(),
        service_network_id: SERVICE_NETWORK_ID.to_string(),
        poll_period: Duration::ZERO,
    }
}

// Runs boot and returns everything it printed.
async fn run_boot(stub: &StubCompute, args: &[&str]) -> Result<String, BootCliError> {
    let mut out: Vec<u8> = Vec::new();
    boot(
        parse(args),
        &runtime_config(OutputFormat::AsciiTable),
        stub,
        &mut out,
    )
    .await?;
    Ok(String::from_utf8(out).expect("output is utf-8"))
}

// Value column of the table row for `property`.
fn row_value(table: &str, property: &str) -> Option<String> {
    table.lines().find_map(|line| {
        let cells: Vec<&str> = line.split('|').map(str::trim).collect();
        (cells.len() == 4 && cells[1] == property).then(|| cells[2].to_string())
    })
}

/////////////////////////////////////////////////////////////////////////////
// Argument Parsing
//
// This section contains tests specific to argument parsing,
// including testing required arguments, as well as optional
// flag-specific checking.

// parse_defaults ensures a bare name parses with both
// default networks enabled and nothing else set.
#[test]
fn parse_defaults() {
    let opts = parse(&["test1"]);
    assert_eq!(opts.name, "test1");
    assert!(opts.public);
    assert!(opts.service_net);
    assert!(!opts.poll);
    assert!(opts.flavor.is_none());
    assert!(opts.nics.is_empty());
    assert!(opts.config_drive.is_none());
}

// parse_network_toggles ensures the --no-* flags
// switch the default networks off.
#[test]
fn parse_network_toggles() {
    let opts = parse(&["test1", "--no-public", "--no-service-net", "--poll"]);
    assert!(!opts.public);
    assert!(!opts.service_net);
    assert!(opts.poll);
}

// parse_underscore_aliases ensures the hidden
// underscore spellings still work.
#[test]
fn parse_underscore_aliases() {
    let opts = parse(&[
        "test1",
        "--key_name",
        "k",
        "--user_data",
        "/tmp/ud",
        "--availability_zone",
        "az",
        "--security_groups",
        "a,b",
        "--block_device_mapping",
        "vda=vol",
    ]);
    assert_eq!(opts.key_name.as_deref(), Some("k"));
    assert_eq!(opts.user_data.as_deref(), Some("/tmp/ud"));
    assert_eq!(opts.availability_zone.as_deref(), Some("az"));
    assert_eq!(opts.security_groups.as_deref(), Some("a,b"));
    assert_eq!(opts.block_device_mapping.len(), 1);
}

// parse_underscore_aliases_are_hidden ensures the
// underscore spellings do not show up in help.
#[test]
fn parse_underscore_aliases_are_hidden() {
    let help = Opts::command().render_long_help().to_string();
    assert!(help.contains("--key-name"));
    assert!(!help.contains("--key_name"));
}

// parse_repeatable_flags ensures the repeatable flags
// collect in order.
#[test]
fn parse_repeatable_flags() {
    let opts = parse(&[
        "test1",
        "--meta",
        "a=1",
        "--meta",
        "b=2",
        "--hint",
        "near",
        "--nic",
        "net-id=n1",
        "--nic",
        "port-id=p2",
    ]);
    assert_eq!(opts.meta, vec![
        ("a".to_string(), "1".to_string()),
        ("b".to_string(), "2".to_string()),
    ]);
    assert_eq!(opts.scheduler_hints, vec![("near".to_string(), String::new())]);
    assert_eq!(opts.nics, vec![
        NicDescriptor::network("n1"),
        NicDescriptor {
            port_id: "p2".to_string(),
            ..Default::default()
        },
    ]);
}

// parse_missing_name_fails ensures the name positional
// is required.
#[test]
fn parse_missing_name_fails() {
    let result = Opts::try_parse_from(["boot", "--flavor", "1"]);
    assert!(result.is_err(), "should fail without a name");
}

// parse_bad_values_fail ensures malformed structured
// values are rejected at parse time.
#[test]
fn parse_bad_values_fail() {
    for bad in [
        ["boot", "test1", "--meta", "novalue"],
        ["boot", "test1", "--file", "/etc/motd"],
        ["boot", "test1", "--nic", "v4-fixed-ip=10.0.0.1"],
        ["boot", "test1", "--nic", "net-uuid=abc"],
        ["boot", "test1", "--block-device-mapping", "vda"],
    ] {
        assert!(Opts::try_parse_from(bad).is_err(), "should reject {bad:?}");
    }
}

// parse_global_options ensures the top level options
// and the boot subcommand parse together.
#[test]
fn parse_global_options() {
    let options = CliOptions::try_parse_from([
        "nova-boot",
        "--os-compute-api-url",
        "https://nova.example.com/v2/t1",
        "--format",
        "json",
        "-dd",
        "boot",
        "test1",
        "--flavor",
        "1",
    ])
    .expect("should parse global options");

    assert_eq!(
        options.os_compute_api_url.as_deref(),
        Some("https://nova.example.com/v2/t1")
    );
    assert_eq!(options.format, OutputFormat::Json);
    assert_eq!(options.debug, 2);
    match options.commands {
        CliCommand::Boot(opts) => assert_eq!(opts.flavor.as_deref(), Some("1")),
    }
}

/////////////////////////////////////////////////////////////////////////////
// Default networks

#[test]
fn default_nics_public_then_service() {
    let options = BootOptions::new(&parse(&["test1"]), &runtime_config(OutputFormat::Json));
    assert_eq!(options.default_nics(), vec![
        NicDescriptor::network(PUBLIC_NETWORK_ID),
        NicDescriptor::network(SERVICE_NETWORK_ID),
    ]);
}

#[test]
fn default_nics_follow_configured_ids() {
    let mut config = runtime_config(OutputFormat::Json);
    config.service_network_id = "22222222-2222-2222-2222-222222222222".to_string();
    let options = BootOptions::new(&parse(&["test1", "--no-public"]), &config);
    assert_eq!(options.default_nics(), vec![NicDescriptor::network(
        "22222222-2222-2222-2222-222222222222"
    )]);
}

/////////////////////////////////////////////////////////////////////////////
// Boot Procedure

#[tokio::test]
async fn boot_attaches_both_default_networks() {
    let stub = StubCompute::default();
    run_boot(&stub, &["test1", "--flavor", "1", "--image", "2"])
        .await
        .unwrap();

    let nics = stub.last_request().nics;
    assert_eq!(nics, vec![
        NicDescriptor {
            net_id: PUBLIC_NETWORK_ID.to_string(),
            v4_fixed_ip: String::new(),
            port_id: String::new(),
        },
        NicDescriptor {
            net_id: SERVICE_NETWORK_ID.to_string(),
            v4_fixed_ip: String::new(),
            port_id: String::new(),
        },
    ]);
}

#[tokio::test]
async fn boot_without_public_network() {
    let stub = StubCompute::default();
    run_boot(&stub, &["test1", "--flavor", "1", "--image", "2", "--no-public"])
        .await
        .unwrap();
    assert_eq!(stub.last_request().nics, vec![NicDescriptor::network(
        SERVICE_NETWORK_ID
    )]);
}

#[tokio::test]
async fn boot_without_service_network() {
    let stub = StubCompute::default();
    run_boot(&stub, &["test1", "--flavor", "1", "--image", "2", "--no-service-net"])
        .await
        .unwrap();
    assert_eq!(stub.last_request().nics, vec![NicDescriptor::network(
        PUBLIC_NETWORK_ID
    )]);
}

#[tokio::test]
async fn boot_without_any_default_network() {
    let stub = StubCompute::default();
    run_boot(&stub, &[
        "test1",
        "--flavor",
        "1",
        "--image",
        "2",
        "--no-public",
        "--no-service-net",
    ])
    .await
    .unwrap();
    assert!(stub.last_request().nics.is_empty());
}

#[tokio::test]
async fn boot_user_nics_precede_defaults() {
    let stub = StubCompute::default();
    run_boot(&stub, &[
        "test1",
        "--flavor",
        "1",
        "--image",
        "2",
        "--nic",
        "net-id=X",
    ])
    .await
    .unwrap();
    assert_eq!(stub.last_request().nics, vec![
        NicDescriptor::network("X"),
        NicDescriptor::network(PUBLIC_NETWORK_ID),
        NicDescriptor::network(SERVICE_NETWORK_ID),
    ]);
}

#[tokio::test]
async fn boot_prints_names_and_hides_internal_fields() {
    let stub = StubCompute::default();
    let table = run_boot(&stub, &["test1", "--flavor", "1", "--image", "2"])
        .await
        .unwrap();

    assert_eq!(row_value(&table, "Property").as_deref(), Some("Value"));
    assert_eq!(row_value(&table, "flavor").as_deref(), Some("m1.small"));
    assert_eq!(row_value(&table, "image").as_deref(), Some("ubuntu"));
    assert_eq!(row_value(&table, "id").as_deref(), Some("abc"));
    assert_eq!(row_value(&table, "links"), None);
    assert_eq!(row_value(&table, "addresses"), None);
}

#[tokio::test]
async fn boot_keeps_create_only_fields() {
    let stub = StubCompute::default();
    let table = run_boot(&stub, &["test1", "--flavor", "1", "--image", "2"])
        .await
        .unwrap();

    // adminPass only comes back from create, status only from get
    assert_eq!(row_value(&table, "adminPass").as_deref(), Some("hunter2"));
    // both carry a name, the fetched one wins
    assert_eq!(row_value(&table, "name").as_deref(), Some("test1"));
    assert_eq!(row_value(&table, "status").as_deref(), Some("BUILD"));
    assert_eq!(stub.server_gets.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn boot_json_output_has_no_internal_fields() {
    let stub = StubCompute::default();
    let mut out: Vec<u8> = Vec::new();
    boot(
        parse(&["test1", "--flavor", "m1.small", "--image", "ubuntu"]),
        &runtime_config(OutputFormat::Json),
        &stub,
        &mut out,
    )
    .await
    .unwrap();

    let info: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(info["flavor"], "m1.small");
    assert_eq!(info["image"], "ubuntu");
    assert!(info.get("links").is_none());
    assert!(info.get("addresses").is_none());
}

#[tokio::test]
async fn boot_unknown_flavor_prints_nothing() {
    let stub = StubCompute::default();
    let mut out: Vec<u8> = Vec::new();
    let err = boot(
        parse(&["test1", "--flavor", "m9.huge", "--image", "2"]),
        &runtime_config(OutputFormat::AsciiTable),
        &stub,
        &mut out,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, BootCliError::ResourceNotFound { kind: "flavor", .. }));
    assert!(out.is_empty());
    assert!(stub.created.lock().unwrap().is_empty());
}

#[tokio::test]
async fn boot_vanished_server_is_an_error() {
    let mut stub = StubCompute::default();
    stub.fetch_response
        .insert("id".to_string(), serde_json::json!("other"));
    let err = run_boot(&stub, &["test1", "--flavor", "1", "--image", "2"])
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        BootCliError::Compute(compute_client::ComputeError::NotFound { kind: "server", .. })
    ));
}

#[tokio::test]
async fn boot_poll_waits_until_active() {
    let stub = StubCompute::with_statuses(&["BUILD", "BUILD", "BUILD", "ACTIVE"]);
    let output = run_boot(&stub, &["test1", "--flavor", "1", "--image", "2", "--poll"])
        .await
        .unwrap();

    // one fetch after create, then three polls
    assert_eq!(stub.server_gets.load(Ordering::SeqCst), 4);
    assert_eq!(
        output.matches("Instance building... 0% complete").count(),
        2
    );
    assert!(output.ends_with("\nFinished\n"));
}

#[tokio::test]
async fn boot_poll_reports_error_state() {
    let stub = StubCompute::with_statuses(&["BUILD", "ERROR"]);
    let err = run_boot(&stub, &["test1", "--flavor", "1", "--image", "2", "--poll"])
        .await
        .unwrap_err();
    assert!(matches!(err, BootCliError::ServerFailed { ref id, .. } if id == "abc"));
}

#[tokio::test]
async fn boot_poll_fails_when_status_is_missing() {
    let stub = StubCompute::with_statuses(&["BUILD", ""]);
    let err = run_boot(&stub, &["test1", "--flavor", "1", "--image", "2", "--poll"])
        .await
        .unwrap_err();
    assert!(matches!(err, BootCliError::Compute(compute_client::ComputeError::Serde(_))));
    // the fetch after create, then the poll without a status
    assert_eq!(stub.server_gets.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn boot_without_poll_fetches_once() {
    let stub = StubCompute::with_statuses(&["BUILD", "ACTIVE"]);
    let output = run_boot(&stub, &["test1", "--flavor", "1", "--image", "2"])
        .await
        .unwrap();
    assert_eq!(stub.server_gets.load(Ordering::SeqCst), 1);
    assert!(!output.contains("Finished"));
}
