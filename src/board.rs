// src/board.rs
//
// BoardState owns every piece of mutable state the rendering loop carries
// across iterations: the snapshot store, the composed announcement list,
// the scroll ticker and the face toggler. The main loop owns exactly one
// BoardState and threads it through by &mut; nothing here is global.

use chrono::NaiveDateTime;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use log::debug;
use std::path::PathBuf;
use std::time::Instant;

use crate::display::compositor;
use crate::display::face::FaceToggler;
use crate::display::ticker::ScrollTicker;
use crate::font::GlyphFont;
use crate::messages::{self, ScrollMessage};
use crate::snapshot::SnapshotStore;

pub struct BoardState {
    pub store: SnapshotStore,
    pub messages: Vec<ScrollMessage>,
    pub ticker: ScrollTicker,
    pub faces: FaceToggler,
}

impl BoardState {
    pub fn new<P: Into<PathBuf>>(data_dir: P, viewport_width: i32, now: Instant) -> Self {
        Self {
            store: SnapshotStore::new(data_dir),
            messages: Vec::new(),
            ticker: ScrollTicker::new(viewport_width),
            faces: FaceToggler::new(now),
        }
    }

    /// One loop iteration's worth of work against a single pair of clock
    /// samples: reload the snapshot if the gate is open, evaluate the face
    /// timer, then composite the frame. The ticker's cursor and offset
    /// survive reloads untouched.
    pub fn step<D>(
        &mut self,
        target: &mut D,
        font: &GlyphFont,
        now_mono: Instant,
        now_wall: NaiveDateTime,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        if self.store.reload_due(now_mono) {
            self.store.reload(now_mono);
            self.messages = messages::compose(self.store.snapshot(), now_wall);
            debug!("reloaded snapshot, {} scroll messages", self.messages.len());
        }

        self.faces.tick(now_mono);

        compositor::render(
            target,
            font,
            self.store.snapshot(),
            &self.messages,
            &mut self.ticker,
            self.faces.face(),
            now_wall,
        )
    }
}
