//! Utility functions for the library
//!
//! Small slice and time helpers shared by the other modules and by
//! consuming services.

use crate::shared::constants::DATE_TIME_FORMAT;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Check if an entry exists in a slice
pub fn entry_exists<T: PartialEq>(slice: &[T], entry: &T) -> bool {
    slice.contains(entry)
}

/// Return the index of the first occurrence of an entry in a slice
pub fn entry_index<T: PartialEq>(slice: &[T], entry: &T) -> Option<usize> {
    slice.iter().position(|item| item == entry)
}

/// Remove the first occurrence of an entry from a vector.
/// The vector is left untouched when the entry does not exist.
pub fn remove_entry<T: PartialEq>(entries: &mut Vec<T>, entry: &T) {
    if let Some(index) = entry_index(entries, entry) {
        entries.remove(index);
    }
}

/// Return a copy of the slice with duplicate entries removed,
/// preserving first-occurrence order
pub fn dedup_entries<T: Eq + Hash + Clone>(entries: &[T]) -> Vec<T> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for entry in entries {
        if seen.insert(entry.clone()) {
            result.push(entry.clone());
        }
    }
    result
}

/// Count how often each entry occurs in a slice
pub fn count_duplicate_entries<T: Eq + Hash + Clone>(entries: &[T]) -> HashMap<T, usize> {
    let mut counts = HashMap::new();
    for entry in entries {
        *counts.entry(entry.clone()).or_insert(0) += 1;
    }
    counts
}

/// Check whether a slice contains any duplicate entries
pub fn has_duplicate_entries<T: Eq + Hash + Clone>(entries: &[T]) -> bool {
    count_duplicate_entries(entries)
        .values()
        .any(|count| *count > 1)
}

/// Current date-time in UTC
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Current UTC date-time formatted as "YYYY-MM-DD HH:MM:SS"
pub fn now_formatted() -> String {
    now_utc().format(DATE_TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<String> {
        vec![
            "apple".to_string(),
            "banana".to_string(),
            "apple".to_string(),
            "cherry".to_string(),
        ]
    }

    #[test]
    fn test_entry_exists() {
        let entries = sample();
        assert!(entry_exists(&entries, &"banana".to_string()));
        assert!(!entry_exists(&entries, &"mango".to_string()));
    }

    #[test]
    fn test_entry_index() {
        let entries = sample();
        assert_eq!(entry_index(&entries, &"apple".to_string()), Some(0));
        assert_eq!(entry_index(&entries, &"cherry".to_string()), Some(3));
        assert_eq!(entry_index(&entries, &"mango".to_string()), None);
    }

    #[test]
    fn test_remove_entry() {
        let mut entries = sample();
        remove_entry(&mut entries, &"apple".to_string());
        assert_eq!(entries, vec!["banana", "apple", "cherry"]);

        remove_entry(&mut entries, &"mango".to_string());
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn test_dedup_entries() {
        let entries = sample();
        assert_eq!(dedup_entries(&entries), vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_count_duplicate_entries() {
        let counts = count_duplicate_entries(&sample());
        assert_eq!(counts["apple"], 2);
        assert_eq!(counts["banana"], 1);
        assert_eq!(counts["cherry"], 1);
    }

    #[test]
    fn test_has_duplicate_entries() {
        assert!(has_duplicate_entries(&sample()));
        assert!(!has_duplicate_entries(&["a", "b", "c"]));
    }

    #[test]
    fn test_now_formatted() {
        let formatted = now_formatted();
        // "2024-01-01 12:00:00" is 19 characters
        assert_eq!(formatted.len(), 19);
        assert_eq!(formatted.as_bytes()[4], b'-');
        assert_eq!(formatted.as_bytes()[13], b':');
    }
}
