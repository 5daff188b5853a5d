/*
 *  display/drivers/mock.rs
 *
 *  ekiban - station departure board
 *  (c) 2025-26 ekiban authors
 *
 *  In-memory matrix driver for tests and development without a panel
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

use embedded_graphics::pixelcolor::Rgb888;
use std::sync::{Arc, Mutex};

use crate::display::error::DisplayError;
use crate::display::framebuffer::FrameBuffer;
use crate::display::traits::{MatrixCapabilities, MatrixDriver};

/// Simulates a panel by keeping the last presented frame in memory.
/// Useful for unit/integration tests, CI, and `--driver mock` runs on
/// machines without the matrix hardware.
#[derive(Debug, Clone)]
pub struct MockDriver {
    capabilities: MatrixCapabilities,
    state: Arc<Mutex<MockDriverState>>,
}

/// Shared inspection state for tests.
#[derive(Debug, Default)]
pub struct MockDriverState {
    /// Number of times present() was called
    pub present_count: usize,

    /// The most recently presented frame, row-major
    pub last_frame: Vec<Rgb888>,

    /// Simulate a present failure (for error-path testing)
    pub simulate_present_failure: bool,
}

impl MockDriver {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            capabilities: MatrixCapabilities { width, height, max_fps: 50 },
            state: Arc::new(Mutex::new(MockDriverState::default())),
        }
    }

    /// Shared handle to the inspection state.
    pub fn state(&self) -> Arc<Mutex<MockDriverState>> {
        Arc::clone(&self.state)
    }

    /// Pixel of the last presented frame, or None before the first present
    /// or out of bounds.
    pub fn pixel_at(&self, x: u32, y: u32) -> Option<Rgb888> {
        if x >= self.capabilities.width || y >= self.capabilities.height {
            return None;
        }
        let state = self.state.lock().unwrap();
        let idx = (y * self.capabilities.width + x) as usize;
        state.last_frame.get(idx).copied()
    }

    /// Count of non-black pixels in the last presented frame.
    pub fn lit_pixels(&self) -> usize {
        let state = self.state.lock().unwrap();
        state
            .last_frame
            .iter()
            .filter(|&&p| p != Rgb888::new(0, 0, 0))
            .count()
    }
}

impl MatrixDriver for MockDriver {
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
        let mut state = self.state.lock().unwrap();
        if state.simulate_present_failure {
            return Err(DisplayError::Other("simulated present failure".to_string()));
        }
        state.present_count += 1;
        state.last_frame = frame.as_slice().to_vec();
        Ok(())
    }
}
