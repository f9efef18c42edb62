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

use bbio::error::BbioError;
use bbio::overlay::OverlayToolchain;
use std::fs;
use std::sync::Mutex;
use tempfile::TempDir;

/// Scripted outcome of a single toolchain step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepOutcome {
    Succeed,
    Fail,
    /// Activation only: the kernel reports the overlay as already loaded.
    AlreadyActive,
}

/// [`OverlayToolchain`] fake that records every call in order and answers
/// with scripted outcomes, so tests can assert on sequencing without running
/// `dtc` or touching sysfs.
pub struct RecordingToolchain {
    calls: Mutex<Vec<String>>,
    pub compile_outcome: StepOutcome,
    pub install_outcome: StepOutcome,
    pub activate_outcome: StepOutcome,
}

impl RecordingToolchain {
    pub fn new() -> Self {
        RecordingToolchain {
            calls: Mutex::new(Vec::new()),
            compile_outcome: StepOutcome::Succeed,
            install_outcome: StepOutcome::Succeed,
            activate_outcome: StepOutcome::Succeed,
        }
    }

    /// Every recorded call as `"<step> <overlay>"`, in invocation order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Overlay identifiers that reached the activation step, in order.
    pub fn activations(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| call.strip_prefix("activate ").map(str::to_string))
            .collect()
    }

    fn record(&self, step: &str, overlay: &str) {
        self.calls.lock().unwrap().push(format!("{step} {overlay}"));
    }
}

impl Default for RecordingToolchain {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayToolchain for RecordingToolchain {
    async fn compile(&self, overlay: &str) -> Result<(), BbioError> {
        self.record("compile", overlay);
        match self.compile_outcome {
            StepOutcome::Succeed => Ok(()),
            _ => Err(BbioError::Compile {
                overlay: overlay.to_string(),
                detail: "dtc exited with status 1".to_string(),
            }),
        }
    }

    async fn install(&self, overlay: &str) -> Result<(), BbioError> {
        self.record("install", overlay);
        match self.install_outcome {
            StepOutcome::Succeed => Ok(()),
            _ => Err(BbioError::Install {
                overlay: overlay.to_string(),
                detail: "cp exited with status 1".to_string(),
            }),
        }
    }

    fn activate(&self, overlay: &str) -> Result<(), BbioError> {
        self.record("activate", overlay);
        match self.activate_outcome {
            StepOutcome::Succeed => Ok(()),
            StepOutcome::AlreadyActive => Err(BbioError::AlreadyActive(overlay.to_string())),
            StepOutcome::Fail => Err(BbioError::Activate {
                overlay: overlay.to_string(),
                file: "/sys/devices/bone_capemgr.8/slots".into(),
                e: std::io::Error::other("slots write rejected"),
            }),
        }
    }
}

/// Build a simulated `/sys/devices` tree containing the given entries as
/// directories.
pub fn sys_devices_with(entries: &[&str]) -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    for entry in entries {
        fs::create_dir(dir.path().join(entry))
            .unwrap_or_else(|_| panic!("failed to create simulated entry {entry}"));
    }
    dir
}
