use std::collections::HashMap;

use tracing::debug;

use super::LexiconEntry;

/// An English key whose earlier owner was replaced by a later entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shadowed {
    pub english: String,
    pub previous: String,
    pub winner: String,
}

/// Lowercased English sense → Flowing word.
#[derive(Debug, Clone, Default)]
pub struct ReverseIndex {
    map: HashMap<String, String>,
    shadowed: Vec<Shadowed>,
}

impl ReverseIndex {
    /// Insert one key per sense, in entry order. Later entries overwrite
    /// earlier ones; each overwrite is kept in `shadowed()`.
    pub fn build(entries: &[LexiconEntry]) -> Self {
        let mut index = Self::default();
        for entry in entries {
            for sense in &entry.senses {
                index.insert(sense.to_lowercase(), &entry.flowing);
            }
        }
        index
    }

    fn insert(&mut self, english: String, flowing: &str) {
        if let Some(previous) = self.map.insert(english.clone(), flowing.to_string()) {
            if previous != flowing {
                debug!(%english, %previous, winner = flowing, "reverse index key overwritten");
                self.shadowed.push(Shadowed {
                    english,
                    previous,
                    winner: flowing.to_string(),
                });
            }
        }
    }

    pub fn get(&self, english: &str) -> Option<&str> {
        self.map.get(english).map(String::as_str)
    }

    /// Keys whose first owner lost to a later entry.
    pub fn shadowed(&self) -> &[Shadowed] {
        &self.shadowed
    }

    /// (english, flowing) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
