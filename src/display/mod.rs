/*
 *  display/mod.rs
 *
 *  ekiban - station departure board
 *  (c) 2025-26 ekiban authors
 *
 *  Matrix display subsystem: palette, framebuffer, drivers, draw pass
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

pub mod compositor;
pub mod drivers;
pub mod error;
pub mod face;
pub mod framebuffer;
pub mod linetype;
pub mod palette;
pub mod ticker;
pub mod traits;

pub use error::DisplayError;
pub use face::{Face, FaceToggler};
pub use framebuffer::FrameBuffer;
pub use palette::Color;
pub use ticker::ScrollTicker;
pub use traits::{MatrixCapabilities, MatrixDriver};
