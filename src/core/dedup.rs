//! Warn-once call-site tracking
//!
//! A process-wide set of `(file, line)` pairs that have already produced a
//! warn-once record. The check-and-insert is a single critical section, so
//! two threads racing on the same never-seen site cannot both claim the
//! first sighting.

use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Concurrency-safe set of call sites that have already warned.
///
/// Entries are never removed: once a site is recorded it stays suppressed
/// for the rest of the process run. Growth is bounded by the number of
/// distinct call sites in the program, not by call volume.
#[derive(Debug, Default)]
pub struct WarnOnceSet {
    sites: Mutex<HashMap<String, HashSet<i32>>>,
}

impl WarnOnceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `(file, line)` and report whether this is its first sighting.
    ///
    /// Atomic as a unit: exactly one caller per site ever sees `true`.
    pub fn first_sighting(&self, file: &str, line: i32) -> bool {
        let mut sites = self.sites.lock();
        match sites.get_mut(file) {
            Some(lines) => lines.insert(line),
            None => {
                sites.insert(file.to_string(), HashSet::from([line]));
                true
            }
        }
    }

    /// Whether `(file, line)` has already been sighted.
    pub fn contains(&self, file: &str, line: i32) -> bool {
        self.sites
            .lock()
            .get(file)
            .is_some_and(|lines| lines.contains(&line))
    }

    /// Number of recorded call sites across all files.
    pub fn len(&self) -> usize {
        self.sites.lock().values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

static WARNED_SITES: OnceLock<WarnOnceSet> = OnceLock::new();

/// The process-wide set consulted by every logger's warn-once path.
pub fn warned_sites() -> &'static WarnOnceSet {
    WARNED_SITES.get_or_init(WarnOnceSet::new)
}
