/*
 *  display/drivers/hub75.rs
 *
 *  ekiban - station departure board
 *  (c) 2025-26 ekiban authors
 *
 *  HUB75 RGB panel driver via the rpi-led-matrix bindings
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

use embedded_graphics::prelude::*;
use rpi_led_matrix::{LedCanvas, LedColor, LedMatrix, LedMatrixOptions, LedRuntimeOptions};

use crate::config::MatrixConfig;
use crate::display::error::DisplayError;
use crate::display::framebuffer::FrameBuffer;
use crate::display::traits::{MatrixCapabilities, MatrixDriver};

/// Drives a chained HUB75 panel through the hzeller rgbmatrix library.
/// `present` copies the frame into the library's off-screen canvas and
/// swaps it in on the next vertical sync, blocking until then.
pub struct Hub75Driver {
    matrix: LedMatrix,
    canvas: Option<LedCanvas>,
    capabilities: MatrixCapabilities,
}

// The matrix handle is only ever touched from the render loop; the binding
// is !Send purely because it holds a raw pointer.
unsafe impl Send for Hub75Driver {}

impl Hub75Driver {
    pub fn new(config: &MatrixConfig) -> Result<Self, DisplayError> {
        let mut options = LedMatrixOptions::new();
        options.set_rows(config.rows);
        options.set_cols(config.cols);
        options.set_chain_length(config.chain_length);
        options.set_parallel(config.parallel);
        options.set_hardware_mapping(&config.hardware_mapping);

        let mut runtime = LedRuntimeOptions::new();
        runtime.set_gpio_slowdown(config.gpio_slowdown);

        let matrix = LedMatrix::new(Some(options), Some(runtime))
            .map_err(|e| DisplayError::InitializationFailed(e.to_string()))?;
        let canvas = matrix.offscreen_canvas();

        Ok(Self {
            matrix,
            canvas: Some(canvas),
            capabilities: MatrixCapabilities {
                width: config.width(),
                height: config.height(),
                max_fps: 50,
            },
        })
    }
}

impl MatrixDriver for Hub75Driver {
    fn capabilities(&self) -> &MatrixCapabilities {
        &self.capabilities
    }

    fn present(&mut self, frame: &FrameBuffer) -> Result<(), DisplayError> {
        if frame.width() != self.capabilities.width as usize
            || frame.height() != self.capabilities.height as usize
        {
            return Err(DisplayError::FrameSizeMismatch {
                panel_w: self.capabilities.width,
                panel_h: self.capabilities.height,
                actual_w: frame.width() as u32,
                actual_h: frame.height() as u32,
            });
        }

        let mut canvas = self
            .canvas
            .take()
            .ok_or_else(|| DisplayError::Other("canvas lost".to_string()))?;

        let width = frame.width();
        for (i, pixel) in frame.as_slice().iter().enumerate() {
            let x = (i % width) as i32;
            let y = (i / width) as i32;
            canvas.set(
                x,
                y,
                &LedColor { red: pixel.r(), green: pixel.g(), blue: pixel.b() },
            );
        }

        // swap returns the previously visible canvas as the new back buffer
        self.canvas = Some(self.matrix.swap(canvas));
        Ok(())
    }
}
