/*
 *  lib.rs
 *
 *  ekiban - station departure board
 *  (c) 2025-26 ekiban authors
 *
 *  Renders train departures, service status, weather and a clock onto a
 *  HUB75 RGB LED matrix, fed by JSON snapshot files that external
 *  scrapers rewrite every couple of seconds.
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

pub mod board;
pub mod config;
pub mod display;
pub mod docs;
pub mod eta;
pub mod font;
pub mod messages;
pub mod snapshot;

pub use board::BoardState;
pub use font::GlyphFont;
pub use messages::ScrollMessage;
pub use snapshot::{DepartureEntry, Snapshot, SnapshotStore};
