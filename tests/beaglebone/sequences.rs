// This file is part of bbio, a tool to configure BeagleBone Black peripherals through device-tree overlays.
//
// Copyright 2026 The bbio developers
//
// SPDX-License-Identifier: GPL-3.0-only
//
// bbio is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License version 3, as published by the Free Software Foundation.
//
// bbio is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranties of MERCHANTABILITY, SATISFACTORY QUALITY, or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with this program.  If not, see http://www.gnu.org/licenses/.

//! End-to-end enable-then-report sequences against a simulated board,
//! mirroring what the entry point does for each combination of flags.

use crate::common::{RecordingToolchain, sys_devices_with};
use bbio::{capemgr, diagnostics, ports};
use googletest::prelude::*;
use std::fs;
use tempfile::TempDir;

#[gtest]
#[tokio::test]
async fn enabling_spi_port_1_activates_its_overlay_then_reports() {
    let sys = sys_devices_with(&["bone_capemgr.8", "ocp.3"]);
    fs::write(sys.path().join("bone_capemgr.8").join("slots"), "")
        .expect("failed to seed slots file");
    let dev = TempDir::new().expect("failed to create temp dir");
    let firmware = TempDir::new().expect("failed to create temp dir");

    let located = capemgr::locate(sys.path()).expect("locate should succeed");
    expect_that!(
        located.to_string_lossy().into_owned(),
        contains_substring("bone_capemgr.8")
    );

    let tools = RecordingToolchain::new();
    ports::enable_spi(&tools, Some(1))
        .await
        .expect("enable should succeed");
    assert_that!(tools.activations(), eq(&vec!["BB-SPI1-01".to_string()]));

    let report = diagnostics::report(dev.path(), firmware.path(), sys.path());
    expect_that!(report, contains_substring("No SPI devices found."));
    expect_that!(report, contains_substring("Cape manager slots"));
    expect_that!(report, contains_substring("bone_capemgr.8"));
}

#[gtest]
#[tokio::test]
async fn spi_and_uart_requests_share_one_toolchain_and_join_before_reporting() {
    let tools = RecordingToolchain::new();
    let (spi_result, uart_result) = tokio::join!(
        ports::enable_spi(&tools, Some(0)),
        ports::enable_uart(&tools, Some(4)),
    );
    spi_result.expect("SPI enable should succeed");
    uart_result.expect("UART enable should succeed");

    let mut activations = tools.activations();
    activations.sort();
    assert_that!(
        activations,
        eq(&vec!["BB-SPI0-01".to_string(), "BB-UART4".to_string()])
    );
}

#[gtest]
fn no_flags_reports_without_enabling_anything() {
    let sys = sys_devices_with(&["bone_capemgr.8"]);
    fs::write(
        sys.path().join("bone_capemgr.8").join("slots"),
        " 0: 54:PF--- \n",
    )
    .expect("failed to seed slots file");
    let dev = TempDir::new().expect("failed to create temp dir");
    let firmware = TempDir::new().expect("failed to create temp dir");

    // no enable directives: the toolchain is never touched
    let tools = RecordingToolchain::new();
    assert_that!(tools.calls(), eq(&Vec::<String>::new()));

    let report = diagnostics::report(dev.path(), firmware.path(), sys.path());
    expect_that!(report, contains_substring("No SPI devices found."));
    expect_that!(report, contains_substring("No SPI firmware found."));
    expect_that!(report, contains_substring("No UART devices found."));
    expect_that!(report, contains_substring("No UART firmware found."));
    expect_that!(report, contains_substring("bone_capemgr.8"));
    expect_that!(report, contains_substring(" 0: 54:PF--- "));
}
