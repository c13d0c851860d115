//! Insertion Order Tracker Module
//!
//! Tracks the order keys were first written, for oldest-inserted eviction.
//!
//! This is deliberately NOT least-recently-used tracking: reads never
//! refresh a key's position, so a frequently re-read old entry is still
//! the first to go when the cache fills. The staleness window is short
//! enough that the simpler policy is acceptable.

use std::collections::VecDeque;

// == Insertion Tracker ==
/// Tracks key insertion order for eviction.
///
/// Keys are stored in a VecDeque where:
/// - Front = Oldest inserted
/// - Back = Newest inserted
#[derive(Debug, Default)]
pub struct InsertionTracker {
    /// Keys in first-write order
    order: VecDeque<String>,
}

impl InsertionTracker {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Record ==
    /// Records a key's first insertion (appends to the back).
    ///
    /// A key already being tracked keeps its original position, so
    /// overwrites do not reset eviction order.
    pub fn record(&mut self, key: &str) {
        if !self.contains(key) {
            self.order.push_back(key.to_string());
        }
    }

    // == Remove ==
    /// Removes a key from the tracker.
    pub fn remove(&mut self, key: &str) {
        self.order.retain(|k| k != key);
    }

    // == Evict Oldest ==
    /// Returns and removes the oldest-inserted key.
    ///
    /// Returns None if the tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        self.order.pop_front()
    }

    // == Peek Oldest ==
    /// Returns the oldest-inserted key without removing it.
    #[allow(dead_code)]
    pub fn peek_oldest(&self) -> Option<&String> {
        self.order.front()
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    pub fn contains(&self, key: &str) -> bool {
        self.order.iter().any(|k| k == key)
    }

    // == Clear ==
    /// Drops all tracked keys.
    pub fn clear(&mut self) {
        self.order.clear();
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_new() {
        let tracker = InsertionTracker::new();
        assert!(tracker.is_empty());
        assert_eq!(tracker.len(), 0);
    }

    #[test]
    fn test_tracker_record_order() {
        let mut tracker = InsertionTracker::new();

        tracker.record("key1");
        tracker.record("key2");
        tracker.record("key3");

        assert_eq!(tracker.len(), 3);
        // key1 was inserted first
        assert_eq!(tracker.peek_oldest(), Some(&"key1".to_string()));
    }

    #[test]
    fn test_tracker_record_existing_keeps_position() {
        let mut tracker = InsertionTracker::new();

        tracker.record("key1");
        tracker.record("key2");
        tracker.record("key3");

        // Recording key1 again must NOT move it to the back
        tracker.record("key1");

        assert_eq!(tracker.len(), 3);
        assert_eq!(tracker.peek_oldest(), Some(&"key1".to_string()));
    }

    #[test]
    fn test_tracker_evict_oldest() {
        let mut tracker = InsertionTracker::new();

        tracker.record("key1");
        tracker.record("key2");
        tracker.record("key3");

        let evicted = tracker.evict_oldest();
        assert_eq!(evicted, Some("key1".to_string()));
        assert_eq!(tracker.len(), 2);

        let evicted = tracker.evict_oldest();
        assert_eq!(evicted, Some("key2".to_string()));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_tracker_evict_empty() {
        let mut tracker = InsertionTracker::new();
        assert_eq!(tracker.evict_oldest(), None);
    }

    #[test]
    fn test_tracker_remove() {
        let mut tracker = InsertionTracker::new();

        tracker.record("key1");
        tracker.record("key2");
        tracker.record("key3");

        tracker.remove("key2");

        assert_eq!(tracker.len(), 2);
        assert!(!tracker.contains("key2"));
        assert!(tracker.contains("key1"));
        assert!(tracker.contains("key3"));
    }

    #[test]
    fn test_tracker_remove_nonexistent_key() {
        let mut tracker = InsertionTracker::new();

        tracker.record("key1");
        tracker.record("key2");

        // Removing a key that doesn't exist should not panic or affect others
        tracker.remove("nonexistent");

        assert_eq!(tracker.len(), 2);
    }

    #[test]
    fn test_tracker_clear() {
        let mut tracker = InsertionTracker::new();

        tracker.record("key1");
        tracker.record("key2");
        tracker.clear();

        assert!(tracker.is_empty());
        assert_eq!(tracker.evict_oldest(), None);
    }
}
