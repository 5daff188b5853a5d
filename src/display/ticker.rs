/*
 *  display/ticker.rs
 *
 *  ekiban - station departure board
 *  (c) 2025-26 ekiban authors
 *
 *  Horizontal scroll state for the announcement line
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

use crate::messages::ScrollMessage;

/// Pixels of leftward travel per rendered frame.
const SCROLL_STEP: i32 = 1;

/// Scroll state for the bottom announcement line. Messages enter from the
/// right edge (offset starts at the viewport width) and travel left one
/// pixel per frame; once a message has fully left the viewport the cursor
/// moves to the next one and the offset resets.
///
/// The ticker survives message-list rebuilds: the cursor and offset are
/// never reset on reload, and an out-of-range cursor simply wraps to 0 on
/// the next read.
#[derive(Debug)]
pub struct ScrollTicker {
    viewport: i32,
    offset: i32,
    cursor: usize,
}

impl ScrollTicker {
    pub fn new(viewport_width: i32) -> Self {
        Self { viewport: viewport_width, offset: viewport_width, cursor: 0 }
    }

    /// Current horizontal pixel offset of the message's left edge.
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// The message under the cursor, or None when the list is empty (the
    /// ticker stays idle). Wraps the cursor first if the list was rebuilt
    /// shorter than the cursor position.
    pub fn current<'a>(&mut self, messages: &'a [ScrollMessage]) -> Option<&'a ScrollMessage> {
        if messages.is_empty() {
            return None;
        }
        if self.cursor >= messages.len() {
            self.cursor = 0;
        }
        Some(&messages[self.cursor])
    }

    /// Advance one frame. `text_px_width` is the rendered width of the
    /// message just drawn; when the offset has carried it fully past the
    /// left edge, move to the next message and re-enter from the right.
    pub fn advance(&mut self, text_px_width: i32) {
        self.offset -= SCROLL_STEP;
        if self.offset < -text_px_width {
            self.cursor += 1;
            self.offset = self.viewport;
        }
    }
}
