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

//! Diagnostics reporting.
//!
//! Builds a report of the currently enabled SPI and UART peripherals in six
//! fixed steps: SPI device nodes, installed SPI firmware, UART device nodes,
//! installed UART firmware, the cape manager path, and the raw contents of
//! its `slots` file. Every step recovers on its own; a listing that errors or
//! matches nothing is reported as "none found" and never stops the steps
//! after it.

use crate::capemgr;
use crate::config;
use crate::system_io::{fs_read, fs_read_dir};
use log::debug;
use std::path::Path;

/// Entry names in `dir` starting with `prefix`, sorted. Listing failures
/// degrade to an empty result; the reporter treats both the same way.
fn list_with_prefix(dir: &Path, prefix: &str) -> Vec<String> {
    match fs_read_dir(dir) {
        Ok(entries) => {
            let mut names: Vec<String> = entries
                .into_iter()
                .filter(|name| name.starts_with(prefix))
                .collect();
            names.sort();
            names
        }
        Err(e) => {
            debug!("diagnostics listing skipped: {e}");
            Vec::new()
        }
    }
}

fn push_listing(out: &mut String, heading: &str, none_msg: &str, dir: &Path, prefix: &str) {
    let names = list_with_prefix(dir, prefix);
    if names.is_empty() {
        out.push_str(none_msg);
        out.push('\n');
    } else {
        out.push_str(heading);
        out.push('\n');
        for name in names {
            out.push_str(&dir.join(name).to_string_lossy());
            out.push('\n');
        }
    }
    out.push('\n');
}

/// Build the full six step diagnostics report.
///
/// `dev_dir`, `firmware_dir` and `sys_devices` are normally
/// [config::DEV_DIR], [config::FIRMWARE_DIR] and [config::SYS_DEVICES_DIR];
/// tests point them at simulated trees.
pub fn report(dev_dir: &Path, firmware_dir: &Path, sys_devices: &Path) -> String {
    let mut out = String::from("Checking enabled SPI and UART devices...\n\n");

    push_listing(
        &mut out,
        "Available SPI devices:",
        "No SPI devices found.",
        dev_dir,
        config::SPI_DEVICE_PREFIX,
    );
    push_listing(
        &mut out,
        "Installed SPI firmware:",
        "No SPI firmware found.",
        firmware_dir,
        config::SPI_FIRMWARE_PREFIX,
    );
    push_listing(
        &mut out,
        "Available UART devices:",
        "No UART devices found.",
        dev_dir,
        config::UART_DEVICE_PREFIX,
    );
    push_listing(
        &mut out,
        "Installed UART firmware:",
        "No UART firmware found.",
        firmware_dir,
        config::UART_FIRMWARE_PREFIX,
    );

    match capemgr::locate(sys_devices) {
        Ok(capemgr) => {
            out.push_str(&format!("Cape manager slots ({}):\n", capemgr.display()));
            match fs_read(&capemgr::slots_path(&capemgr)) {
                Ok(slots) => out.push_str(&slots),
                Err(e) => {
                    debug!("diagnostics slots read skipped: {e}");
                    out.push_str("Could not read the slots file.\n");
                }
            }
        }
        Err(e) => {
            debug!("diagnostics cape manager lookup skipped: {e}");
            out.push_str("No cape manager found.\n");
        }
    }

    out
}
