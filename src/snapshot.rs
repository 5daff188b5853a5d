// src/snapshot.rs
//
// The snapshot store owns the three most recently loaded scraper documents.
// Reload is time-gated, not event-driven: the loop asks `reload_due` each
// iteration and the store re-reads all three files when the gate opens.
// Each document loads independently; one failing never blocks the others.

use log::{debug, warn};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::docs;

/// Minimum interval between file reloads.
pub const RELOAD_INTERVAL: Duration = Duration::from_secs(2);

const DEPARTURE_FILE: &str = "departure.json";
const OPERATION_FILE: &str = "operation.json";
const WEATHER_FILE: &str = "weather_forecast.json";

/// Immutable-per-load bundle of the three input documents. Replaced
/// wholesale on every reload, never mutated in place.
#[derive(Debug, Default)]
pub struct Snapshot {
    pub departure: Option<Value>,
    pub operation: Option<Value>,
    pub weather: Option<Value>,
}

/// One departure row's worth of data, derived from the departure document
/// rather than stored. `direction` is the destination key in the mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartureEntry {
    pub direction: String,
    pub line_type: String,
    pub scheduled_time: String,
    pub status: String,
    pub destination: String,
}

impl DepartureEntry {
    /// The first two destination keys of the departure mapping, in insertion
    /// order, as row slots. A key whose first `segments` element is missing
    /// still consumes its slot (`None`) so the row below it does not shift.
    pub fn rows(departure: Option<&Value>) -> Vec<Option<DepartureEntry>> {
        let mut rows = Vec::with_capacity(2);
        let Some(Value::Object(map)) = departure else {
            return rows;
        };
        for (direction, val) in map {
            if rows.len() >= 2 {
                break;
            }
            let entry = docs::first_element(val, "segments").map(|seg| DepartureEntry {
                direction: direction.clone(),
                line_type: docs::str_or(seg, "type", ""),
                scheduled_time: docs::str_or(val, "departure_time", "--:--"),
                status: docs::str_or(val, "status", ""),
                destination: docs::str_or(seg, "destination", ""),
            });
            rows.push(entry);
        }
        rows
    }
}

/// Holds the current snapshot plus the reload gate.
#[derive(Debug)]
pub struct SnapshotStore {
    data_dir: PathBuf,
    snapshot: Snapshot,
    last_reload: Option<Instant>,
}

impl SnapshotStore {
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
            snapshot: Snapshot::default(),
            last_reload: None,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// True on the first call and whenever the reload interval has elapsed.
    pub fn reload_due(&self, now: Instant) -> bool {
        match self.last_reload {
            None => true,
            Some(last) => now.duration_since(last) >= RELOAD_INTERVAL,
        }
    }

    /// Re-read all three documents, replacing the stored snapshot. A file
    /// that is missing or unparsable becomes `None` for this cycle only and
    /// is naturally retried at the next reload tick.
    pub fn reload(&mut self, now: Instant) {
        self.snapshot = Snapshot {
            departure: load_document(&self.data_dir.join(DEPARTURE_FILE)),
            operation: load_document(&self.data_dir.join(OPERATION_FILE)),
            weather: load_document(&self.data_dir.join(WEATHER_FILE)),
        };
        self.last_reload = Some(now);
    }
}

fn load_document(path: &Path) -> Option<Value> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("could not read {}: {}", path.display(), e);
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(doc) => {
            debug!("loaded {}", path.display());
            Some(doc)
        }
        Err(e) => {
            warn!("could not parse {}: {}", path.display(), e);
            None
        }
    }
}
