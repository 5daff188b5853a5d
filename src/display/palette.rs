/*
 *  display/palette.rs
 *
 *  ekiban - station departure board
 *  (c) 2025-26 ekiban authors
 *
 *  Fixed color palette for the departure board
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

/// The board draws from a small fixed palette; colors are always selected
/// by name, never computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
    Red,
    Green,
    Blue,
    Magenta,
    Orange,
    Yellow,
    Cyan,
}

impl Color {
    /// Resolve to a concrete RGB value for the panel.
    pub fn rgb(&self) -> Rgb888 {
        match self {
            Color::Black => Rgb888::new(0, 0, 0),
            Color::White => Rgb888::new(255, 255, 255),
            Color::Red => Rgb888::new(255, 0, 0),
            Color::Green => Rgb888::new(0, 255, 0),
            Color::Blue => Rgb888::new(0, 0, 255),
            Color::Magenta => Rgb888::new(255, 0, 255),
            Color::Orange => Rgb888::new(255, 172, 0),
            Color::Yellow => Rgb888::new(255, 255, 0),
            Color::Cyan => Rgb888::new(0, 255, 255),
        }
    }
}
