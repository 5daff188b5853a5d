// src/eta.rs
//
// Countdown computation for a departure row: scheduled "HH:MM" plus the
// wall clock becomes a relative label and an urgency tier. Pure functions
// of their inputs so the tier boundaries are directly testable.

use chrono::{NaiveDateTime, Timelike};

use crate::display::palette::Color;
use crate::snapshot::DepartureEntry;

/// First-train status marker in the departure document.
pub const STATUS_FIRST_TRAIN: &str = "始発";
/// Last-train status marker.
pub const STATUS_LAST_TRAIN: &str = "終電";

/// Urgency classification of a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Red,
    Yellow,
    Green,
    Blue,
}

impl Tier {
    pub fn color(&self) -> Color {
        match self {
            Tier::Red => Color::Red,
            Tier::Yellow => Color::Yellow,
            Tier::Green => Color::Green,
            Tier::Blue => Color::Blue,
        }
    }
}

/// Computed countdown for one departure row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eta {
    pub label: String,
    pub tier: Tier,
}

/// Compute the countdown label and tier for a departure.
///
/// First/last-train statuses short-circuit the time math entirely. For a
/// normal departure the scheduled "HH:MM" is anchored on today's date, with
/// one adjustment: a scheduled hour below 3 observed from a clock at or past
/// 3 belongs to the next calendar day (a post-midnight service seen the
/// evening before). The `+ 1` on the minute difference keeps the boundary
/// read at "1分後" rather than a misleading "0分後".
pub fn compute(entry: &DepartureEntry, now: NaiveDateTime) -> Eta {
    if entry.status == STATUS_FIRST_TRAIN {
        return Eta { label: STATUS_FIRST_TRAIN.to_string(), tier: Tier::Blue };
    }
    if entry.status == STATUS_LAST_TRAIN {
        return Eta { label: STATUS_LAST_TRAIN.to_string(), tier: Tier::Red };
    }

    let Some((hour, minute)) = parse_hhmm(&entry.scheduled_time) else {
        return Eta { label: "--:--".to_string(), tier: Tier::Green };
    };

    let mut date = now.date();
    if hour < 3 && now.hour() >= 3 {
        // post-midnight rollover: "01:30" seen at 23:50 is later tonight
        date = date.succ_opt().unwrap_or(date);
    }
    let candidate = date
        .and_hms_opt(hour, minute, 0)
        .unwrap_or_else(|| now.date().and_hms_opt(0, 0, 0).unwrap_or(now));

    let diff_seconds = candidate.signed_duration_since(now).num_seconds();
    let diff_minutes = diff_seconds.div_euclid(60) + 1;

    if diff_minutes > 99 {
        // too far out to be a meaningful countdown; fold into the
        // first-train treatment
        return Eta { label: STATUS_FIRST_TRAIN.to_string(), tier: Tier::Blue };
    }

    let tier = if diff_minutes <= 17 {
        Tier::Red
    } else if diff_minutes <= 20 {
        Tier::Yellow
    } else {
        Tier::Green
    };
    Eta { label: format!("{}分後", diff_minutes), tier }
}

/// Lenient "H:MM" / "HH:MM" split. Whitespace around either part is
/// tolerated; out-of-range hours or minutes are a parse failure.
fn parse_hhmm(s: &str) -> Option<(u32, u32)> {
    let (h, m) = s.split_once(':')?;
    let hour: u32 = h.trim().parse().ok()?;
    let minute: u32 = m.trim().parse().ok()?;
    if hour < 24 && minute < 60 {
        Some((hour, minute))
    } else {
        None
    }
}
