/*
 *  display/linetype.rs
 *
 *  ekiban - station departure board
 *  (c) 2025-26 ekiban authors
 *
 *  Train-type keyword to color lookup
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

use crate::display::palette::Color;

/// Ordered (keyword, color) pairs scanned front-to-back; first substring
/// match wins. The ordering is load-bearing: the four-character compound
/// types must be checked before the shorter generic types that are also
/// their substrings (中央特快 would otherwise match 特快).
pub const TYPE_COLORS: [(&str, Color); 14] = [
    ("快速急行", Color::Orange),
    ("通勤特快", Color::Magenta),
    ("中央特快", Color::Blue),
    ("区間快速", Color::Green),
    ("各駅停車", Color::Blue),
    ("新快速", Color::Blue),
    ("特快", Color::Magenta),
    ("特急", Color::Red),
    ("急行", Color::Red),
    ("快速", Color::Red),
    ("準急", Color::Green),
    ("普通", Color::Green),
    ("各駅", Color::Blue),
    ("各停", Color::Blue),
];

/// Resolve the display color for a train-type string; unrecognized types
/// fall back to white.
pub fn color_for(line_type: &str) -> Color {
    for (keyword, color) in TYPE_COLORS {
        if line_type.contains(keyword) {
            return color;
        }
    }
    Color::White
}
