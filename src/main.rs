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

//! bbio - enable SPI and UART ports on the BeagleBone Black.
//!
//! Enabling a port compiles its device tree overlay with `dtc`, installs the
//! blob into `/lib/firmware` and appends the overlay identifier to the cape
//! manager `slots` file. After any requested enables, a diagnostics report of
//! the currently visible device nodes, installed firmware and capemgr slots
//! is printed. With no flags only the report is printed.
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (`trace`, `debug`, `info`, `warn`,
//!   `error` or `off`). Defaults to `info`

use bbio::overlay::DtcToolchain;
use bbio::{capemgr, config, diagnostics, ports};
use clap::{Parser, command};
use log::debug;
use std::error::Error;
use std::path::Path;

#[derive(Parser, Debug)]
#[command(name = "bbio")]
#[command(bin_name = "bbio")]
struct Cli {
    /// SPI port to enable (0 or 1). Pass the flag without a value to enable
    /// both ports.
    #[arg(long = "enable-spi", value_name = "PORT", num_args = 0..=1)]
    enable_spi: Option<Option<u8>>,
    /// UART port to enable (1, 2, 4 or 5). Pass the flag without a value to
    /// enable all four ports.
    #[arg(long = "enable-uart", value_name = "PORT", num_args = 0..=1)]
    enable_uart: Option<Option<u8>>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    debug!("parsed cli command with {cli:?}");

    if cli.enable_spi.is_some() || cli.enable_uart.is_some() {
        let capemgr = capemgr::locate(Path::new(config::SYS_DEVICES_DIR))?;
        let tools = DtcToolchain::new(&capemgr);

        // Both enable sequences may run concurrently, but diagnostics must
        // wait for both to finish.
        let spi = async {
            match cli.enable_spi {
                Some(port) => ports::enable_spi(&tools, port).await,
                None => Ok(()),
            }
        };
        let uart = async {
            match cli.enable_uart {
                Some(port) => ports::enable_uart(&tools, port).await,
                None => Ok(()),
            }
        };
        let (spi_result, uart_result) = tokio::join!(spi, uart);
        spi_result?;
        uart_result?;
    }

    print!(
        "{}",
        diagnostics::report(
            Path::new(config::DEV_DIR),
            Path::new(config::FIRMWARE_DIR),
            Path::new(config::SYS_DEVICES_DIR),
        )
    );
    Ok(())
}
