/*
 *  display/face.rs
 *
 *  ekiban - station departure board
 *  (c) 2025-26 ekiban authors
 *
 *  Two-state timer alternating the departure-row layouts
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

use std::time::{Duration, Instant};

/// Default flip period between the two row layouts.
pub const TOGGLE_PERIOD: Duration = Duration::from_secs(5);

/// One of the two mutually exclusive departure-row layouts.
///
/// Face A shows direction, countdown and destination; face B shows the
/// raw timetable view (type, scheduled time, destination).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    A,
    B,
}

impl Face {
    fn flipped(self) -> Self {
        match self {
            Face::A => Face::B,
            Face::B => Face::A,
        }
    }
}

/// Pure timer; carries no data beyond the face and its last flip instant.
#[derive(Debug)]
pub struct FaceToggler {
    face: Face,
    last_flip: Instant,
    period: Duration,
}

impl FaceToggler {
    pub fn new(now: Instant) -> Self {
        Self::with_period(now, TOGGLE_PERIOD)
    }

    pub fn with_period(now: Instant, period: Duration) -> Self {
        Self { face: Face::A, last_flip: now, period }
    }

    pub fn face(&self) -> Face {
        self.face
    }

    /// Evaluate the timer for this frame; flips at most once no matter how
    /// much time has elapsed, and re-arms from the observed `now` rather
    /// than the theoretical boundary, so a stalled loop never produces a
    /// burst of catch-up flips. Returns true when a flip happened.
    pub fn tick(&mut self, now: Instant) -> bool {
        if now.duration_since(self.last_flip) >= self.period {
            self.face = self.face.flipped();
            self.last_flip = now;
            true
        } else {
            false
        }
    }
}
