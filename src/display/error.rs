/*
 *  display/error.rs
 *
 *  ekiban - station departure board
 *  (c) 2025-26 ekiban authors
 *
 *  Unified error type for the matrix subsystem
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

use thiserror::Error;

/// Errors raised by matrix drivers. Driver construction failures are fatal
/// at startup; once the loop is running the only per-frame failure path is
/// `present`.
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("matrix initialization failed: {0}")]
    InitializationFailed(String),

    #[error("frame is {actual_w}x{actual_h} but the panel is {panel_w}x{panel_h}")]
    FrameSizeMismatch {
        panel_w: u32,
        panel_h: u32,
        actual_w: u32,
        actual_h: u32,
    },

    #[error("driver '{0}' is not available in this build")]
    DriverUnavailable(String),

    #[error("{0}")]
    Other(String),
}
