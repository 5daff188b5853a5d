/*
 *  main.rs
 *
 *  ekiban - station departure board
 *  (c) 2025-26 ekiban authors
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

use anyhow::Context;
use chrono::Local;
use env_logger::Env;
use log::info;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::signal::unix::{signal, SignalKind};

use ekiban::board::BoardState;
use ekiban::config;
use ekiban::display::drivers;
use ekiban::display::framebuffer::FrameBuffer;
use ekiban::font::GlyphFont;

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Sleep between loop iterations; the vsync wait inside `present` governs
/// the actual frame rate.
const FRAME_INTERVAL: Duration = Duration::from_millis(20);

/// Waits for SIGINT or SIGTERM and raises the shutdown flag. The flag is
/// the only channel between this task and the render loop: one writer,
/// one reader, polled at the top of each iteration.
async fn signal_listener(shutdown: Arc<AtomicBool>) -> Result<(), std::io::Error> {
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        _ = sigint.recv() => {
            info!("SIGINT received. Initiating graceful shutdown.");
        }
        _ = sigterm.recv() => {
            info!("SIGTERM received. Initiating graceful shutdown.");
        }
    }
    shutdown.store(true, Ordering::SeqCst);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = config::load()?;

    env_logger::Builder::from_env(
        Env::default().default_filter_or(cfg.log_level.as_deref().unwrap_or("info")),
    )
    .format_timestamp_secs()
    .init();

    info!("{} v.{} built {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), BUILD_DATE);

    // startup is the only fatal territory: a panel or font failure exits
    // nonzero before the loop begins
    let matrix_cfg = cfg.matrix_config();
    let mut driver = drivers::build(cfg.driver_kind(), &matrix_cfg)
        .context("matrix driver initialization failed")?;

    let font_path = cfg.font_path();
    let font = GlyphFont::load(&font_path)
        .with_context(|| format!("could not load font {}", font_path.display()))?;

    let (width, height) = driver.dimensions();
    let mut frame = FrameBuffer::new(width, height);
    let mut board = BoardState::new(cfg.data_dir(), width as i32, Instant::now());

    let shutdown = Arc::new(AtomicBool::new(false));
    tokio::spawn(signal_listener(Arc::clone(&shutdown)));

    info!("entering render loop ({}x{}, data dir {})", width, height, cfg.data_dir().display());

    while !shutdown.load(Ordering::SeqCst) {
        let now_mono = Instant::now();
        let now_wall = Local::now().naive_local();

        board.step(&mut frame, &font, now_mono, now_wall)?;
        driver.present(&frame)?;

        tokio::time::sleep(FRAME_INTERVAL).await;
    }

    info!("shutdown complete");
    Ok(())
}
