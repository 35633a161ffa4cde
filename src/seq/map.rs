// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::collections::HashMap;

use log::debug;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::seq::record::SeqRecord;

/// Header -> sequence map. A header that is inserted again has its sequence replaced (last write
/// wins) but keeps the position of its first insertion.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeqMap {
    order: Vec<String>,
    sequences: HashMap<String, String>,
}

impl SeqMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites. Returns the previous sequence for `header`, if any.
    pub fn insert(&mut self, header: String, sequence: String) -> Option<String> {
        match self.sequences.get_mut(&header) {
            Some(old) => {
                debug!("Duplicate header '{}': overwriting previous sequence", header);
                Some(std::mem::replace(old, sequence))
            }
            None => {
                self.order.push(header.clone());
                self.sequences.insert(header, sequence);
                None
            }
        }
    }

    pub fn get(&self, header: &str) -> Option<&str> {
        self.sequences.get(header).map(String::as_str)
    }

    pub fn contains(&self, header: &str) -> bool {
        self.sequences.contains_key(header)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// (header, sequence) pairs, in map order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order
            .iter()
            .map(move |h| (h.as_str(), self.sequences[h].as_str()))
    }

    pub fn total_length(&self) -> usize {
        self.sequences.values().map(|s| s.chars().count()).sum()
    }
}

impl FromIterator<SeqRecord> for SeqMap {
    fn from_iter<I: IntoIterator<Item = SeqRecord>>(iter: I) -> Self {
        let mut map = SeqMap::new();
        for rec in iter {
            map.insert(rec.header, rec.sequence);
        }
        map
    }
}

// Serialized as a JSON-style object whose keys follow map order.
impl Serialize for SeqMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_map(Some(self.len()))?;
        for (header, sequence) in self.iter() {
            state.serialize_entry(header, sequence)?;
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_position() {
        let mut map = SeqMap::new();
        assert_eq!(map.insert(String::from("x"), String::from("AAA")), None);
        assert_eq!(map.insert(String::from("y"), String::from("CCC")), None);
        assert_eq!(
            map.insert(String::from("x"), String::from("GGG")),
            Some(String::from("AAA"))
        );
        assert_eq!(map.len(), 2);
        assert_eq!(map.headers().collect::<Vec<_>>(), vec!["x", "y"]);
        assert_eq!(map.get("x"), Some("GGG"));
    }

    #[test]
    fn test_from_records() {
        let map: SeqMap = vec![
            SeqRecord::new("dup", "AAA"),
            SeqRecord::new("dup", "CCC"),
        ]
        .into_iter()
        .collect();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("dup"), Some("CCC"));
        assert!(map.contains("dup"));
        assert!(!map.contains("AAA"));
    }

    #[test]
    fn test_serialize_in_order() {
        let mut map = SeqMap::new();
        map.insert(String::from("zeta"), String::from("TT"));
        map.insert(String::from("alpha"), String::from("AC GT"));
        let json = serde_json::to_string(&map).expect("serialize");
        assert_eq!(json, r#"{"zeta":"TT","alpha":"AC GT"}"#);
    }

    #[test]
    fn test_empty() {
        let map = SeqMap::new();
        assert!(map.is_empty());
        assert_eq!(map.total_length(), 0);
        assert_eq!(map.iter().count(), 0);
    }
}
