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

//! Device tree overlay enabling.
//!
//! Enabling an overlay is a three step sequence against external state:
//!
//! 1. compile `<overlay>-00A0.dts` into `<overlay>-00A0.dtbo` with `dtc`
//! 2. install the blob into the kernel firmware search path
//! 3. activate it by appending the identifier to the capemgr `slots` file
//!
//! The steps run strictly in order and stop at the first failure; nothing is
//! rolled back. The one recovered case is activation reporting the overlay as
//! already present, which [`enable`] logs and treats as success.
//!
//! The steps themselves sit behind the [`OverlayToolchain`] trait so that the
//! sequence can be driven against a recording fake in tests. [`DtcToolchain`]
//! is the production implementation.

use crate::capemgr;
use crate::config;
use crate::error::BbioError;
use crate::system_io::fs_append;
use log::{info, trace, warn};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// The three external-effect steps of the overlay enable sequence.
#[allow(async_fn_in_trait)]
pub trait OverlayToolchain {
    /// Compile the overlay source into a binary blob.
    async fn compile(&self, overlay: &str) -> Result<(), BbioError>;
    /// Install the compiled blob into the firmware search path.
    async fn install(&self, overlay: &str) -> Result<(), BbioError>;
    /// Request the kernel load the overlay by writing to the capemgr.
    fn activate(&self, overlay: &str) -> Result<(), BbioError>;
}

/// Compile, install and activate a device tree overlay.
///
/// Runs the toolchain steps strictly in order, stopping at the first error.
/// An [`BbioError::AlreadyActive`] result from activation is logged as a
/// warning and reported as success; the overlay is in the requested state.
///
/// # Returns: `Result<(), BbioError>`
/// * `Ok(())` - Overlay enabled, or was already enabled
/// * `Err(BbioError::Compile)` - `dtc` failed or the source is missing
/// * `Err(BbioError::Install)` - The blob could not be copied into firmware
/// * `Err(BbioError::Activate)` - The capemgr rejected the activation
pub async fn enable<T: OverlayToolchain>(tools: &T, overlay: &str) -> Result<(), BbioError> {
    tools.compile(overlay).await?;
    tools.install(overlay).await?;
    match tools.activate(overlay) {
        Ok(()) => {
            info!("enabled device tree overlay {overlay}");
            Ok(())
        }
        Err(BbioError::AlreadyActive(_)) => {
            warn!("the {overlay} device tree overlay is already enabled");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Blob file name for an overlay identifier, e.g. `BB-UART1-00A0.dtbo`.
pub fn blob_name(overlay: &str) -> String {
    format!("{overlay}{}.dtbo", config::OVERLAY_SUFFIX)
}

/// Source file name for an overlay identifier, e.g. `BB-UART1-00A0.dts`.
pub fn source_name(overlay: &str) -> String {
    format!("{overlay}{}.dts", config::OVERLAY_SUFFIX)
}

/// Run an external tool in `cwd` and fold a non-zero exit into an IO error
/// carrying the captured stderr.
async fn run_tool(program: &str, args: &[&str], cwd: &Path) -> Result<(), std::io::Error> {
    trace!("running {program} {args:?} in {cwd:?}");
    let output = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .output()
        .await?;
    if output.status.success() {
        Ok(())
    } else {
        Err(std::io::Error::other(
            String::from_utf8_lossy(&output.stderr).to_string(),
        ))
    }
}

/// Production [`OverlayToolchain`] using `dtc` and `cp`.
///
/// Overlay sources are expected in the working directory; compiled blobs are
/// produced next to them and copied into the firmware directory.
#[derive(Debug)]
pub struct DtcToolchain {
    /// The capemgr `slots` control file that activation appends to.
    slots: PathBuf,
    firmware_dir: PathBuf,
    work_dir: PathBuf,
}

impl DtcToolchain {
    /// Toolchain for a located cape manager directory, using the standard
    /// firmware directory and the current working directory for sources.
    pub fn new(capemgr: &Path) -> Self {
        Self::with_paths(
            capemgr::slots_path(capemgr),
            PathBuf::from(config::FIRMWARE_DIR),
            PathBuf::from("."),
        )
    }

    /// Toolchain with every external location supplied by the caller.
    pub fn with_paths(slots: PathBuf, firmware_dir: PathBuf, work_dir: PathBuf) -> Self {
        trace!("creating DtcToolchain with slots {slots:?}, firmware dir {firmware_dir:?}");
        DtcToolchain {
            slots,
            firmware_dir,
            work_dir,
        }
    }
}

impl OverlayToolchain for DtcToolchain {
    async fn compile(&self, overlay: &str) -> Result<(), BbioError> {
        let source = source_name(overlay);
        let blob = blob_name(overlay);
        run_tool(
            "dtc",
            &["-O", "dtb", "-o", &blob, "-b", "0", "-@", &source],
            &self.work_dir,
        )
        .await
        .map_err(|e| BbioError::Compile {
            overlay: overlay.to_string(),
            detail: e.to_string(),
        })
    }

    async fn install(&self, overlay: &str) -> Result<(), BbioError> {
        let blob = blob_name(overlay);
        let target = self.firmware_dir.to_string_lossy().into_owned();
        run_tool("cp", &[blob.as_str(), target.as_str()], &self.work_dir)
            .await
            .map_err(|e| BbioError::Install {
                overlay: overlay.to_string(),
                detail: e.to_string(),
            })
    }

    fn activate(&self, overlay: &str) -> Result<(), BbioError> {
        match fs_append(&self.slots, overlay) {
            Ok(()) => Ok(()),
            // The kernel answers EEXIST when the overlay is already loaded.
            Err(BbioError::IOAppend { e, .. }) if e.kind() == ErrorKind::AlreadyExists => {
                Err(BbioError::AlreadyActive(overlay.to_string()))
            }
            Err(BbioError::IOAppend { file, e, .. }) => Err(BbioError::Activate {
                overlay: overlay.to_string(),
                file,
                e,
            }),
            Err(other) => Err(other),
        }
    }
}
