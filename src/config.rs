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

/// Where the kernel exposes platform devices, including the cape manager.
pub static SYS_DEVICES_DIR: &str = "/sys/devices";

/// Name prefix of the cape manager entry under [SYS_DEVICES_DIR]. The full
/// name carries a kernel-build-dependent suffix, e.g. `bone_capemgr.8`.
pub static CAPEMGR_PREFIX: &str = "bone_capemgr";

/// The kernel firmware search path that overlay blobs are installed into.
pub static FIRMWARE_DIR: &str = "/lib/firmware";

/// Device node directory scanned by diagnostics.
pub static DEV_DIR: &str = "/dev";

/// Revision suffix shared by all BeagleBone overlay sources and blobs:
/// `BB-UART1` is built from `BB-UART1-00A0.dts` into `BB-UART1-00A0.dtbo`.
pub static OVERLAY_SUFFIX: &str = "-00A0";

/// Device node prefix for enabled SPI ports (`spidev1.0` etc.).
pub static SPI_DEVICE_PREFIX: &str = "spi";

/// Device node prefix for enabled UART ports (`ttyO1` etc.).
pub static UART_DEVICE_PREFIX: &str = "ttyO";

/// Firmware file prefix for installed SPI overlays.
pub static SPI_FIRMWARE_PREFIX: &str = "BB-SPI";

/// Firmware file prefix for installed UART overlays.
pub static UART_FIRMWARE_PREFIX: &str = "BB-UART";
