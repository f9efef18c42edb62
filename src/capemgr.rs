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

//! Cape manager discovery.
//!
//! The capemgr control directory lives under `/sys/devices` with a name like
//! `bone_capemgr.8`, where the suffix depends on the kernel build. The kernel
//! is expected to expose exactly one such entry; should more than one exist,
//! the last in listing order wins, which matches no documented guarantee and
//! is simply listing-order dependent.

use crate::config;
use crate::error::BbioError;
use crate::system_io::fs_read_dir;
use log::trace;
use std::path::{Path, PathBuf};

/// Locate the cape manager control directory under `sys_devices`.
///
/// # Returns: `Result<PathBuf, BbioError>`
/// * `Ok(PathBuf)` - Full path of the last `bone_capemgr*` entry in listing order
/// * `Err(BbioError::IOReadDir)` - The `sys_devices` listing could not be read
/// * `Err(BbioError::Discovery)` - No `bone_capemgr*` entry exists
pub fn locate(sys_devices: &Path) -> Result<PathBuf, BbioError> {
    let entries = fs_read_dir(sys_devices)?;
    match entries
        .into_iter()
        .filter(|name| name.starts_with(config::CAPEMGR_PREFIX))
        .next_back()
    {
        Some(name) => {
            let capemgr = sys_devices.join(name);
            trace!("located cape manager at {capemgr:?}");
            Ok(capemgr)
        }
        None => Err(BbioError::Discovery(format!(
            "no '{}*' entry under {:?}",
            config::CAPEMGR_PREFIX,
            sys_devices
        ))),
    }
}

/// The `slots` control file inside a cape manager directory. Appending an
/// overlay identifier to it asks the kernel to instantiate that overlay.
pub fn slots_path(capemgr: &Path) -> PathBuf {
    capemgr.join("slots")
}
