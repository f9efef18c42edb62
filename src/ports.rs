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

//! SPI and UART port façades.
//!
//! Each logical port number on the BeagleBone Black maps to exactly one
//! overlay identifier. The board has two SPI ports. Of the six UARTs, port 0
//! is always enabled and has a dedicated header, and port 3 cannot receive
//! data, which leaves 1, 2, 4 and 5 worth enabling here.
//!
//! Requesting an unsupported port number is a silent no-op, and requesting
//! `None` enables every supported port of that class in table order.

use crate::error::BbioError;
use crate::overlay::{self, OverlayToolchain};
use log::{debug, info};

/// SPI ports and their overlay identifiers.
pub static SPI_OVERLAYS: &[(u8, &str)] = &[(0, "BB-SPI0-01"), (1, "BB-SPI1-01")];

/// UART ports and their overlay identifiers.
pub static UART_OVERLAYS: &[(u8, &str)] = &[
    (1, "BB-UART1"),
    (2, "BB-UART2"),
    (4, "BB-UART4"),
    (5, "BB-UART5"),
];

fn lookup(table: &[(u8, &'static str)], port: u8) -> Option<&'static str> {
    table
        .iter()
        .find(|(index, _)| *index == port)
        .map(|(_, overlay)| *overlay)
}

/// Overlay identifier for an SPI port, if the port is supported.
pub fn spi_overlay(port: u8) -> Option<&'static str> {
    lookup(SPI_OVERLAYS, port)
}

/// Overlay identifier for a UART port, if the port is supported.
pub fn uart_overlay(port: u8) -> Option<&'static str> {
    lookup(UART_OVERLAYS, port)
}

async fn enable_class<T: OverlayToolchain>(
    tools: &T,
    table: &[(u8, &'static str)],
    class: &str,
    port: Option<u8>,
) -> Result<(), BbioError> {
    match port {
        Some(index) => match lookup(table, index) {
            Some(overlay) => {
                info!("enabling {class} port {index} ({overlay})");
                overlay::enable(tools, overlay).await
            }
            None => {
                debug!("{class} port {index} is not supported, nothing to enable");
                Ok(())
            }
        },
        None => {
            for (index, overlay) in table {
                info!("enabling {class} port {index} ({overlay})");
                overlay::enable(tools, overlay).await?;
            }
            Ok(())
        }
    }
}

/// Enable an SPI port, or all SPI ports when `port` is `None`.
///
/// Unsupported port numbers complete silently with no toolchain calls.
pub async fn enable_spi<T: OverlayToolchain>(
    tools: &T,
    port: Option<u8>,
) -> Result<(), BbioError> {
    enable_class(tools, SPI_OVERLAYS, "SPI", port).await
}

/// Enable a UART port, or all UART ports when `port` is `None`.
///
/// Unsupported port numbers complete silently with no toolchain calls.
pub async fn enable_uart<T: OverlayToolchain>(
    tools: &T,
    port: Option<u8>,
) -> Result<(), BbioError> {
    enable_class(tools, UART_OVERLAYS, "UART", port).await
}
