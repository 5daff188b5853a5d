/*
 *  display/compositor.rs
 *
 *  ekiban - station departure board
 *  (c) 2025-26 ekiban authors
 *
 *  Stateless per-frame draw pass: departure rows, ticker, clock, dividers
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

use chrono::{NaiveDateTime, Timelike};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};

use crate::display::face::Face;
use crate::display::linetype;
use crate::display::palette::Color;
use crate::display::ticker::ScrollTicker;
use crate::eta::{self, Tier};
use crate::font::GlyphFont;
use crate::messages::ScrollMessage;
use crate::snapshot::{DepartureEntry, Snapshot};

/// Baseline Y of the two departure rows.
const ROW_BASELINES: [i32; 2] = [9, 20];
/// Baseline Y shared by the ticker and the clock.
const BOTTOM_BASELINE: i32 = 31;
/// Divider Y coordinates between the three bands.
const DIVIDER_YS: [i32; 2] = [10, 21];
/// Clock left edge, measured back from the right edge of the panel.
const CLOCK_WIDTH: i32 = 28;
/// Top of the clock's private clear region.
const CLOCK_CLEAR_TOP: i32 = 22;

/// Motivational overrides shown in place of the destination on face A when
/// departure is imminent.
const RUN_TO_STATION: &str = "駅まで走れ";
const LEAVE_NOW: &str = "今すぐ出発";

/// Draw one complete frame. The target is cleared to black first, so aside
/// from the clock's private clear step nothing needs incremental erasure.
pub fn render<D>(
    target: &mut D,
    font: &GlyphFont,
    snapshot: &Snapshot,
    messages: &[ScrollMessage],
    ticker: &mut ScrollTicker,
    face: Face,
    now: NaiveDateTime,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let width = target.bounding_box().size.width as i32;

    target.clear(Color::Black.rgb())?;

    let rows = DepartureEntry::rows(snapshot.departure.as_ref());
    for (slot, entry) in rows.iter().enumerate() {
        if let Some(entry) = entry {
            draw_departure_row(target, font, entry, ROW_BASELINES[slot], face, width, now)?;
        }
    }

    draw_ticker(target, font, messages, ticker)?;
    draw_clock(target, font, width, now)?;

    // dividers last; they double as erasure strips for glyph descenders
    let black = PrimitiveStyle::with_stroke(Color::Black.rgb(), 1);
    for y in DIVIDER_YS {
        Line::new(Point::new(0, y), Point::new(width, y))
            .into_styled(black)
            .draw(target)?;
    }

    Ok(())
}

fn draw_departure_row<D>(
    target: &mut D,
    font: &GlyphFont,
    entry: &DepartureEntry,
    baseline: i32,
    face: Face,
    width: i32,
    now: NaiveDateTime,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    match face {
        Face::B => {
            // timetable view: type, scheduled time, raw destination
            let type_color = linetype::color_for(&entry.line_type);
            font.draw_text(target, &entry.line_type, Point::new(0, baseline), type_color.rgb())?;
            font.draw_text(
                target,
                &entry.scheduled_time,
                Point::new(50, baseline),
                Color::Green.rgb(),
            )?;
            font.draw_text(
                target,
                &entry.destination,
                Point::new(width - 50, baseline),
                Color::Orange.rgb(),
            )?;
        }
        Face::A => {
            // countdown view: direction, ETA, destination (or an urgency
            // override once the countdown goes red or yellow)
            let direction = format!("{}方面", entry.direction);
            font.draw_text(target, &direction, Point::new(0, baseline), Color::White.rgb())?;

            let eta = eta::compute(entry, now);
            font.draw_text(target, &eta.label, Point::new(45, baseline), eta.tier.color().rgb())?;

            let (dest_text, dest_color) = match eta.tier {
                Tier::Red => (RUN_TO_STATION, Color::Red),
                Tier::Yellow => (LEAVE_NOW, Color::Yellow),
                _ => (entry.destination.as_str(), Color::Orange),
            };
            font.draw_text(
                target,
                dest_text,
                Point::new(width - 50, baseline),
                dest_color.rgb(),
            )?;
        }
    }
    Ok(())
}

fn draw_ticker<D>(
    target: &mut D,
    font: &GlyphFont,
    messages: &[ScrollMessage],
    ticker: &mut ScrollTicker,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let Some(message) = ticker.current(messages) else {
        return Ok(());
    };
    font.draw_text(
        target,
        &message.text,
        Point::new(ticker.offset(), BOTTOM_BASELINE),
        message.color.rgb(),
    )?;
    ticker.advance(font.text_width(&message.text));
    Ok(())
}

fn draw_clock<D>(
    target: &mut D,
    font: &GlyphFont,
    width: i32,
    now: NaiveDateTime,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    // colon blinks off on even seconds
    let text = if now.second() % 2 != 0 {
        format!("{:02}:{:02}", now.hour(), now.minute())
    } else {
        format!("{:02} {:02}", now.hour(), now.minute())
    };

    // the ticker has already drawn into this region this frame, so the
    // clock paints its background black before drawing over it
    let clock_x = width - CLOCK_WIDTH;
    Rectangle::new(
        Point::new(clock_x - 1, CLOCK_CLEAR_TOP),
        Size::new(
            (width - clock_x + 1) as u32,
            (BOTTOM_BASELINE - CLOCK_CLEAR_TOP + 1) as u32,
        ),
    )
    .into_styled(PrimitiveStyle::with_fill(Color::Black.rgb()))
    .draw(target)?;

    font.draw_text(target, &text, Point::new(clock_x, BOTTOM_BASELINE), Color::White.rgb())
}
