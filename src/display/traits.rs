/*
 *  display/traits.rs
 *
 *  ekiban - station departure board
 *  (c) 2025-26 ekiban authors
 *
 *  Core trait definitions for matrix driver abstraction
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

use crate::display::error::DisplayError;
use crate::display::framebuffer::FrameBuffer;

/// Panel geometry and metadata.
#[derive(Debug, Clone)]
pub struct MatrixCapabilities {
    /// Panel width in pixels (cols × chain_length)
    pub width: u32,

    /// Panel height in pixels (rows × parallel)
    pub height: u32,

    /// Maximum recommended frame rate
    pub max_fps: u32,
}

/// Minimal hardware abstraction every matrix driver must implement.
///
/// The rendering loop draws into an off-screen `FrameBuffer` and hands the
/// finished frame to `present`, which is expected to block until the panel
/// has taken it (vertical sync on real hardware). `present` is the frame
/// rate governor; nothing else in the loop waits on the device.
pub trait MatrixDriver: Send {
    /// Returns the capabilities of this panel
    fn capabilities(&self) -> &MatrixCapabilities;

    /// Returns the panel dimensions as (width, height)
    fn dimensions(&self) -> (u32, u32) {
        let caps = self.capabilities();
        (caps.width, caps.height)
    }

    /// Copy the frame to the back buffer and swap it to the visible panel.
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), DisplayError>;
}
