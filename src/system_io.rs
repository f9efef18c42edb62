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

//! Error wrapping filesystem I/O helpers.
//!
//! Thin wrappers around the standard filesystem operations used against sysfs
//! and the firmware directory, with trace logging and automatic conversion to
//! [`BbioError`] carrying the affected path.

use crate::error::BbioError;
use log::trace;
use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::Path;

/// Read the contents of a file to a String.
///
/// # Returns: `Result<String, BbioError>`
/// * `Ok(String)` - The complete contents of the file
/// * `Err(BbioError::IORead)` - If the file cannot be read
pub fn fs_read(file_path: &Path) -> Result<String, BbioError> {
    trace!("Attempting to read from {file_path:?}");
    let mut buf: String = String::new();
    let result = OpenOptions::new()
        .read(true)
        .open(file_path)
        .and_then(|mut f| f.read_to_string(&mut buf));

    match result {
        Ok(_) => {
            trace!("Reading done");
            Ok(buf)
        }
        Err(e) => Err(BbioError::IORead {
            file: file_path.into(),
            e,
        }),
    }
}

/// Append a value to a file as a single line.
///
/// The target must already exist; sysfs control files like the capemgr
/// `slots` file are created by the kernel, never by us.
///
/// # Returns: `Result<(), BbioError>`
/// * `Ok(())` - Append succeeded
/// * `Err(BbioError::IOAppend)` - If the write fails; the underlying
///   `std::io::Error` is preserved so callers can inspect its kind
pub fn fs_append(file_path: &Path, value: impl AsRef<str>) -> Result<(), BbioError> {
    trace!(
        "Attempting to append {:?} to {:?}",
        value.as_ref(),
        file_path
    );
    let result = OpenOptions::new()
        .append(true)
        .open(file_path)
        .and_then(|mut f| writeln!(f, "{}", value.as_ref()));
    match result {
        Ok(_) => {
            trace!("Append done.");
            Ok(())
        }
        Err(e) => Err(BbioError::IOAppend {
            data: value.as_ref().to_string(),
            file: file_path.into(),
            e,
        }),
    }
}

/// Read the contents of a directory and return entry names.
///
/// Returns entry names (not full paths) in directory listing order. Entries
/// that cannot be read are silently skipped.
///
/// # Returns: `Result<Vec<String>, BbioError>`
/// * `Ok(Vec<String>)` - List of entry names in the directory
/// * `Err(BbioError::IOReadDir)` - If the directory cannot be read
pub fn fs_read_dir(dir: &Path) -> Result<Vec<String>, BbioError> {
    trace!("Attempting to read directory '{dir:?}'");
    std::fs::read_dir(dir).map_or_else(
        |e| {
            Err(BbioError::IOReadDir {
                dir: dir.to_owned(),
                e,
            })
        },
        |iter| {
            let ret = iter
                .filter_map(Result::ok)
                .map(|entry| entry.file_name().to_string_lossy().into_owned())
                .collect();
            trace!("Dir reading done.");
            Ok(ret)
        },
    )
}
