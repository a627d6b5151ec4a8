//! Translation lookup tables
//!
//! 리그 팩의 translations 섹션에 대응하는 다섯 개의 사전.
//! 조회는 전부 결정적이다. 같은 입력이면 맵 순서와 무관하게 같은 결과.

use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::cmp::Reverse;

/// Lookup tables for one league
///
/// FxHashMap for O(1) string lookup (30-40% faster than SipHash maps
/// for short keys). All sections are optional in the pack file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslationTable {
    /// Full name -> Korean name
    #[serde(default)]
    pub exact: FxHashMap<String, String>,
    /// Surname token -> Korean surname
    #[serde(default)]
    pub surnames: FxHashMap<String, String>,
    /// Given-name token -> Korean given name
    #[serde(default)]
    pub given_names: FxHashMap<String, String>,
    /// Name prefix ("Al-", "Al ") -> Korean particle
    #[serde(default)]
    pub prefixes: FxHashMap<String, String>,
    /// Name component substring -> Korean component
    #[serde(default)]
    pub tokens: FxHashMap<String, String>,
}

impl TranslationTable {
    /// Total number of entries across all sections
    pub fn entry_count(&self) -> usize {
        self.exact.len()
            + self.surnames.len()
            + self.given_names.len()
            + self.prefixes.len()
            + self.tokens.len()
    }

    /// Longest prefix key that the name starts with
    ///
    /// Ties on length break toward the lexicographically smaller key so
    /// the result never depends on map iteration order.
    pub fn best_prefix(&self, name: &str) -> Option<(&str, &str)> {
        self.prefixes
            .iter()
            .filter(|(key, _)| !key.is_empty() && name.starts_with(key.as_str()))
            .max_by_key(|(key, _)| (key.len(), Reverse(key.as_str())))
            .map(|(key, korean)| (key.as_str(), korean.as_str()))
    }

    /// Earliest token occurrence in the input
    ///
    /// Returns (byte offset, matched key, replacement). At the same
    /// offset the longest key wins, then the lexicographically smaller
    /// key, making the match independent of map iteration order.
    pub fn first_token_match(&self, input: &str) -> Option<(usize, &str, &str)> {
        self.tokens
            .iter()
            .filter(|(key, _)| !key.is_empty())
            .filter_map(|(key, korean)| {
                input
                    .find(key.as_str())
                    .map(|pos| (pos, key.as_str(), korean.as_str()))
            })
            .min_by_key(|(pos, key, _)| (*pos, Reverse(key.len()), *key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TranslationTable {
        let mut t = TranslationTable::default();
        t.prefixes.insert("Al-".to_string(), "알".to_string());
        t.prefixes.insert("Al ".to_string(), "알".to_string());
        t.prefixes.insert("A".to_string(), "아".to_string());
        t.tokens.insert("Abdullah".to_string(), "압둘라".to_string());
        t.tokens.insert("Abdul".to_string(), "압둘".to_string());
        t.tokens.insert("Owais".to_string(), "오와이스".to_string());
        t
    }

    #[test]
    fn test_best_prefix_longest_wins() {
        let t = table();
        let (key, korean) = t.best_prefix("Al-Nassr").unwrap();
        assert_eq!(key, "Al-");
        assert_eq!(korean, "알");

        let (key, _) = t.best_prefix("Al Hilal").unwrap();
        assert_eq!(key, "Al ");
    }

    #[test]
    fn test_best_prefix_none() {
        let t = table();
        assert!(t.best_prefix("Damac").is_none());
    }

    #[test]
    fn test_first_token_earliest_position_wins() {
        let t = table();
        // "Owais" appears later than "Abdullah"
        let (pos, key, korean) = t.first_token_match("Abdullah Owais").unwrap();
        assert_eq!(pos, 0);
        assert_eq!(key, "Abdullah");
        assert_eq!(korean, "압둘라");
    }

    #[test]
    fn test_first_token_longest_at_same_position() {
        let t = table();
        // "Abdul" and "Abdullah" both match at offset 0
        let (_, key, _) = t.first_token_match("Abdullah Al-Faraj").unwrap();
        assert_eq!(key, "Abdullah");
    }

    #[test]
    fn test_first_token_no_match() {
        let t = table();
        assert!(t.first_token_match("Cristiano Ronaldo").is_none());
    }

    #[test]
    fn test_empty_keys_ignored() {
        let mut t = TranslationTable::default();
        t.prefixes.insert(String::new(), "빈".to_string());
        t.tokens.insert(String::new(), "빈".to_string());
        assert!(t.best_prefix("Anything").is_none());
        assert!(t.first_token_match("Anything").is_none());
    }

    #[test]
    fn test_entry_count() {
        let t = table();
        assert_eq!(t.entry_count(), 6);
    }
}
