//! Case- and accent-insensitive lookup of place names.
//!
//! A [`NameIndex`] maps the normalized form of every place name to the
//! canonical spelling it was built from, so that user input such as
//! `"  yapacani"` or `"YAPACANÍ"` resolves to `"Yapacaní"`.

use std::collections::HashMap;

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::error::{GraphError, Result};

/// Normalizes a place name into its lookup key.
///
/// Surrounding whitespace is trimmed, the text is lowercased and decomposed
/// (NFKD), and combining marks are dropped. Precomposed and decomposed
/// spellings of the same accented text produce the same key.
pub fn normalize(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// What [`NameIndex::build_with`] does when two names share a key.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum CollisionPolicy {
    /// Fail with [`GraphError::NameCollision`].
    #[default]
    Reject,
    /// The name appearing later in the input replaces the earlier one.
    LastWins,
}

/// Immutable map from normalized keys to canonical place names.
#[derive(Clone, Debug, Default)]
pub struct NameIndex {
    by_key: HashMap<String, String>,
}

impl NameIndex {
    /// Builds an index, rejecting names that collide after normalization.
    pub fn build<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build_with(names, CollisionPolicy::Reject)
    }

    /// Builds an index using the given collision rule.
    ///
    /// The same name appearing twice is not a collision; it maps to itself.
    pub fn build_with<I, S>(names: I, policy: CollisionPolicy) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut by_key: HashMap<String, String> = HashMap::new();
        for name in names {
            let name = name.as_ref();
            let key = normalize(name);
            match by_key.get(&key) {
                Some(existing) if existing != name && policy == CollisionPolicy::Reject => {
                    return Err(GraphError::NameCollision {
                        key,
                        first: existing.clone(),
                        second: name.to_string(),
                    });
                }
                _ => {
                    by_key.insert(key, name.to_string());
                }
            }
        }
        Ok(NameIndex { by_key })
    }

    /// Resolves free text to the canonical name it refers to.
    pub fn resolve(&self, text: &str) -> Result<&str> {
        self.by_key
            .get(&normalize(text))
            .map(String::as_str)
            .ok_or_else(|| GraphError::NotFound(text.to_string()))
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}
