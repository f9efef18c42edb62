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

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BbioError {
    #[error("BbioError::Discovery: failed to locate the cape manager: {0}")]
    Discovery(String),
    #[error("BbioError::Compile: failed to compile the device tree source for {overlay:?}: {detail}")]
    Compile { overlay: String, detail: String },
    #[error("BbioError::Install: failed to install the overlay blob for {overlay:?}: {detail}")]
    Install { overlay: String, detail: String },
    #[error("BbioError::Activate: failed to activate overlay {overlay:?} through {file:?}: {e}")]
    Activate {
        overlay: String,
        file: PathBuf,
        e: std::io::Error,
    },
    #[error("BbioError::AlreadyActive: overlay {0:?} is already enabled")]
    AlreadyActive(String),
    #[error("BbioError::IORead: An IO error occurred when reading from {file:?}: {e}")]
    IORead { file: PathBuf, e: std::io::Error },
    #[error("BbioError::IOAppend: An IO error occurred when appending {data:?} to {file:?}: {e}")]
    IOAppend {
        data: String,
        file: PathBuf,
        e: std::io::Error,
    },
    #[error("BbioError::IOReadDir: An IO error occurred when reading directory {dir:?}: {e}")]
    IOReadDir { dir: PathBuf, e: std::io::Error },
}
