/*
 *  display/drivers/mod.rs
 *
 *  ekiban - station departure board
 *  (c) 2025-26 ekiban authors
 *
 *  Matrix driver implementations and the driver factory
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

#[cfg(feature = "hardware")]
pub mod hub75;
pub mod mock;

use log::info;

use crate::config::{DriverKind, MatrixConfig};
use crate::display::error::DisplayError;
use crate::display::traits::MatrixDriver;

/// Build the configured driver. The HUB75 driver only exists when the
/// crate was built with the `hardware` feature; asking for it otherwise is
/// a clear startup error rather than a silent mock fallback.
pub fn build(kind: DriverKind, config: &MatrixConfig) -> Result<Box<dyn MatrixDriver>, DisplayError> {
    match kind {
        #[cfg(feature = "hardware")]
        DriverKind::Hub75 => {
            info!(
                "HUB75 panel {}x{} (chain {}, parallel {})",
                config.cols, config.rows, config.chain_length, config.parallel
            );
            Ok(Box::new(hub75::Hub75Driver::new(config)?))
        }
        #[cfg(not(feature = "hardware"))]
        DriverKind::Hub75 => Err(DisplayError::DriverUnavailable(
            "hub75 (build with --features hardware)".to_string(),
        )),
        DriverKind::Mock => {
            info!("mock panel {}x{}", config.width(), config.height());
            Ok(Box::new(mock::MockDriver::new(config.width(), config.height())))
        }
    }
}
