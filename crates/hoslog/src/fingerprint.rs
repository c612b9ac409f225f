//! Input fingerprints and a projection memo.
//!
//! Projection is cheap and pure, so recomputing on every render is the
//! baseline. When a caller does want to memoize, the cache key must be the
//! input itself: [`Fingerprint`] is a BLAKE3 hash over the entries and the
//! day, so identical inputs hit and any change misses.

use std::collections::HashMap;

use tracing::trace;

use crate::config::LayoutConfig;
use crate::entry::DutyStatusEntry;
use crate::projector::{Segment, TimelineProjector};
use crate::time::Day;

/// Default number of projections a [`ProjectionCache`] keeps.
const DEFAULT_CAPACITY: usize = 64;

/// BLAKE3 digest of an entry list and a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Fingerprint `entries` as projected onto `day`.
    #[must_use]
    pub fn of(entries: &[DutyStatusEntry], day: &Day) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&day.start().timestamp_millis().to_le_bytes());
        hasher.update(&(entries.len() as u64).to_le_bytes());
        for entry in entries {
            write_str(&mut hasher, entry.duty_status.as_str());
            hasher.update(&entry.start_time.timestamp_millis().to_le_bytes());
            hasher.update(&entry.end_time.timestamp_millis().to_le_bytes());
            write_str(&mut hasher, &entry.location);
        }
        Self(*hasher.finalize().as_bytes())
    }

    /// Lowercase hex form.
    #[must_use]
    pub fn to_hex(&self) -> String {
        blake3::Hash::from(self.0).to_hex().to_string()
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

fn write_str(hasher: &mut blake3::Hasher, s: &str) {
    hasher.update(&(s.len() as u64).to_le_bytes());
    hasher.update(s.as_bytes());
}

/// Memoizes projections by input fingerprint for one fixed layout.
#[derive(Debug)]
pub struct ProjectionCache {
    layout: LayoutConfig,
    capacity: usize,
    entries: HashMap<Fingerprint, Vec<Segment>>,
    hits: u64,
    misses: u64,
}

impl ProjectionCache {
    /// Create a cache for `layout`.
    #[must_use]
    pub fn new(layout: LayoutConfig) -> Self {
        Self::with_capacity(layout, DEFAULT_CAPACITY)
    }

    /// Create a cache that holds at most `capacity` projections.
    ///
    /// When full, the cache is emptied before the next insert.
    #[must_use]
    pub fn with_capacity(layout: LayoutConfig, capacity: usize) -> Self {
        Self {
            layout,
            capacity: capacity.max(1),
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Return the projection of `entries` onto `day`, computing it on a miss.
    pub fn project(&mut self, entries: &[DutyStatusEntry], day: &Day) -> &[Segment] {
        let key = Fingerprint::of(entries, day);
        if self.entries.contains_key(&key) {
            self.hits += 1;
            trace!(fingerprint = %key, "projection cache hit");
        } else {
            self.misses += 1;
            if self.entries.len() >= self.capacity {
                self.entries.clear();
            }
            let segments = TimelineProjector::new(&self.layout).project(entries, day);
            self.entries.insert(key, segments);
        }
        self.entries.get(&key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of lookups answered from the cache.
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of lookups that had to project.
    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Number of cached projections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::DutyStatus;
    use crate::time::parse_instant;
    use chrono::FixedOffset;

    fn day(s: &str) -> Day {
        Day::parse(s, FixedOffset::east_opt(0).unwrap()).unwrap()
    }

    fn entries(location: &str) -> Vec<DutyStatusEntry> {
        vec![
            DutyStatusEntry::new(
                DutyStatus::OffDuty,
                parse_instant("t", "2025-03-01T00:00:00Z").unwrap(),
                parse_instant("t", "2025-03-01T08:00:00Z").unwrap(),
                location,
            )
            .unwrap(),
            DutyStatusEntry::new(
                DutyStatus::Driving,
                parse_instant("t", "2025-03-01T08:00:00Z").unwrap(),
                parse_instant("t", "2025-03-01T12:00:00Z").unwrap(),
                location,
            )
            .unwrap(),
        ]
    }

    #[test]
    fn test_fingerprint_is_stable() {
        let a = Fingerprint::of(&entries("Reno"), &day("2025-03-01"));
        let b = Fingerprint::of(&entries("Reno"), &day("2025-03-01"));
        assert_eq!(a, b);
        assert_eq!(a.to_hex().len(), 64);
        assert_eq!(a.to_string(), a.to_hex());
    }

    #[test]
    fn test_fingerprint_changes_with_input() {
        let base = Fingerprint::of(&entries("Reno"), &day("2025-03-01"));
        assert_ne!(base, Fingerprint::of(&entries("Elko"), &day("2025-03-01")));
        assert_ne!(base, Fingerprint::of(&entries("Reno"), &day("2025-03-02")));
        assert_ne!(base, Fingerprint::of(&entries("Reno")[..1], &day("2025-03-01")));
    }

    #[test]
    fn test_fingerprint_location_boundaries_matter() {
        let mut a = entries("ab");
        a[1].location = "c".to_string();
        let mut b = entries("a");
        b[1].location = "bc".to_string();
        let d = day("2025-03-01");
        assert_ne!(Fingerprint::of(&a, &d), Fingerprint::of(&b, &d));
    }

    #[test]
    fn test_cache_hits_on_identical_input() {
        let mut cache = ProjectionCache::new(LayoutConfig::default());
        let d = day("2025-03-01");

        let first = cache.project(&entries("Reno"), &d).to_vec();
        let second = cache.project(&entries("Reno"), &d).to_vec();

        assert_eq!(first, second);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_matches_direct_projection() {
        let layout = LayoutConfig::default();
        let mut cache = ProjectionCache::new(layout.clone());
        let d = day("2025-03-01");
        let direct = TimelineProjector::new(&layout).project(&entries("Reno"), &d);
        assert_eq!(cache.project(&entries("Reno"), &d), direct.as_slice());
    }

    #[test]
    fn test_cache_evicts_when_full() {
        let mut cache = ProjectionCache::with_capacity(LayoutConfig::default(), 1);
        let d = day("2025-03-01");

        cache.project(&entries("Reno"), &d);
        cache.project(&entries("Elko"), &d);
        assert_eq!(cache.len(), 1);

        cache.project(&entries("Reno"), &d);
        assert_eq!(cache.misses(), 3);
        assert!(!cache.is_empty());
    }
}
