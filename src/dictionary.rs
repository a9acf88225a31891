//! In-memory word dictionary.

use std::collections::HashMap;

use crate::error::DictionaryError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn search(&self, word: &str) -> Result<&str, DictionaryError> {
        self.entries
            .get(word)
            .map(String::as_str)
            .ok_or_else(|| DictionaryError::NotFound(word.to_string()))
    }

    /// Add a new word. Existing words are left untouched.
    pub fn add(&mut self, word: &str, definition: &str) -> Result<(), DictionaryError> {
        if self.entries.contains_key(word) {
            return Err(DictionaryError::WordExists(word.to_string()));
        }
        self.entries.insert(word.to_string(), definition.to_string());
        Ok(())
    }

    /// Replace the definition of an existing word.
    pub fn update(&mut self, word: &str, definition: &str) -> Result<(), DictionaryError> {
        match self.entries.get_mut(word) {
            Some(existing) => {
                *existing = definition.to_string();
                Ok(())
            }
            None => Err(DictionaryError::NotFound(word.to_string())),
        }
    }

    /// Remove a word, returning its definition if it was present.
    pub fn delete(&mut self, word: &str) -> Option<String> {
        self.entries.remove(word)
    }
}
