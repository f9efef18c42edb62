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

//! Library crate backing the `bbio` command-line tool.
//!
//! The BeagleBone Black exposes its cape manager as a directory under
//! `/sys/devices` whose `slots` file accepts device-tree overlay identifiers.
//! This crate wraps the whole enable workflow: discovering the cape manager
//! ([`capemgr`]), compiling and installing an overlay and writing its
//! identifier to `slots` ([`overlay`]), mapping logical SPI/UART port numbers
//! to overlay identifiers ([`ports`]), and reporting what is currently
//! enabled ([`diagnostics`]).

pub mod capemgr;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod overlay;
pub mod ports;
pub mod system_io;
