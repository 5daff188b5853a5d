/*
 *  display/framebuffer.rs
 *
 *  ekiban - station departure board
 *  (c) 2025-26 ekiban authors
 *
 *  Runtime-sized RGB framebuffer for embedded-graphics
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

use core::convert::Infallible;
use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// The off-screen frame the compositor draws into each tick. Panel geometry
/// is only known at runtime (rows/cols/chaining from config), so the buffer
/// is heap-allocated rather than const-generic.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    buf: Vec<Rgb888>,
    w: usize,
    h: usize,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let (w, h) = (width as usize, height as usize);
        Self { buf: vec![Rgb888::new(0, 0, 0); w * h], w, h }
    }

    pub fn width(&self) -> usize { self.w }
    pub fn height(&self) -> usize { self.h }

    /// Immutable raw access (row-major), used by drivers pushing the frame
    /// to the panel
    pub fn as_slice(&self) -> &[Rgb888] { &self.buf }

    /// Pixel at (x,y); None if out of bounds. Test-friendly inspection.
    pub fn pixel_at(&self, x: u32, y: u32) -> Option<Rgb888> {
        let (x, y) = (x as usize, y as usize);
        if x < self.w && y < self.h {
            self.buf.get(y * self.w + x).copied()
        } else {
            None
        }
    }

    /// Map (x,y) to linear index; returns None if out of bounds
    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if p.x >= 0 && p.y >= 0 {
            let (x, y) = (p.x as usize, p.y as usize);
            if x < self.w && y < self.h {
                return Some(y * self.w + x);
            }
        }
        None
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.w as u32, self.h as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, c) in pixels {
            if let Some(i) = self.idx(p) {
                self.buf[i] = c;
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.buf.fill(color);
        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        // fast path for the rectangular fills the primitives use
        let Size { width, height } = area.size;
        if width == 0 || height == 0 { return Ok(()); }
        let (x0, y0) = (area.top_left.x.max(0) as usize, area.top_left.y.max(0) as usize);
        let w = width as usize;
        let h = height as usize;

        let mut it = colors.into_iter();
        for row in 0..h {
            let base = (y0 + row) * self.w + x0;
            for col in 0..w {
                if let Some(c) = it.next() {
                    let i = base + col;
                    if i < self.buf.len() { self.buf[i] = c; }
                } else {
                    return Ok(());
                }
            }
        }
        Ok(())
    }
}
