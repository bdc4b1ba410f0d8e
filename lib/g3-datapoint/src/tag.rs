/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::collections::BTreeMap;
use std::fmt::{self, Write};

use thiserror::Error;

pub const TAG_KEY_HOST: &str = "host";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty string")]
    Empty,
    #[error("invalid graphic char: {0}")]
    InvalidGraphic(char),
    #[error("not alpha numeric char")]
    NotAlphaNumeric,
}

#[inline]
fn char_allowed_in_opentsdb(c: char) -> bool {
    // Same character range as OpenTSDB
    // http://opentsdb.net/docs/build/html/user_guide/writing/index.html#metrics-and-tags
    if c.is_ascii() {
        matches!(c, 'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '/')
    } else {
        c.is_alphanumeric()
    }
}

pub fn chars_allowed_in_opentsdb(s: &str) -> Result<(), ParseError> {
    for c in s.chars() {
        if !char_allowed_in_opentsdb(c) {
            return if c.is_ascii_graphic() {
                Err(ParseError::InvalidGraphic(c))
            } else {
                Err(ParseError::NotAlphaNumeric)
            };
        }
    }
    Ok(())
}

/// Drop all chars that are not allowed in OpenTSDB metric names and tags.
///
/// Names reported by remote systems are passed through this before being
/// used as tag values.
pub fn clean(s: &str) -> String {
    s.chars().filter(|c| char_allowed_in_opentsdb(*c)).collect()
}

/// Dimensional labels attached to a datapoint.
///
/// Keys are unique and iteration is always in key order, so two tag sets
/// holding the same pairs compare and hash equal.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TagSet {
    inner: BTreeMap<String, String>,
}

impl TagSet {
    #[inline]
    pub fn new() -> Self {
        TagSet::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<String>
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.inner.insert(key.into(), value.into())
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(|v| v.as_str())
    }

    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    #[inline]
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.inner.remove(key)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Build a new tag set holding all pairs of `self` and `other`.
    ///
    /// Values in `other` win on key conflicts. Neither input is changed.
    pub fn merge(&self, other: &TagSet) -> TagSet {
        let mut inner = self.inner.clone();
        for (k, v) in &other.inner {
            inner.insert(k.clone(), v.clone());
        }
        TagSet { inner }
    }

    pub fn validate(&self) -> Result<(), ParseError> {
        for (k, v) in &self.inner {
            if k.is_empty() {
                return Err(ParseError::Empty);
            }
            chars_allowed_in_opentsdb(k)?;
            chars_allowed_in_opentsdb(v)?;
        }
        Ok(())
    }

    pub fn display_opentsdb(&self) -> DisplayTagSet<'_> {
        DisplayTagSet {
            inner: self,
            assign_delimiter: '=',
            next_delimiter: ' ',
        }
    }
}

impl<K, V> FromIterator<(K, V)> for TagSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let inner = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        TagSet { inner }
    }
}

impl<const N: usize> From<[(&str, &str); N]> for TagSet {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs.into_iter().collect()
    }
}

pub struct DisplayTagSet<'a> {
    inner: &'a TagSet,
    assign_delimiter: char,
    next_delimiter: char,
}

impl fmt::Display for DisplayTagSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.inner.iter();
        let Some((name, value)) = iter.next() else {
            return Ok(());
        };
        f.write_str(name)?;
        f.write_char(self.assign_delimiter)?;
        f.write_str(value)?;

        for (name, value) in iter {
            f.write_char(self.next_delimiter)?;
            f.write_str(name)?;
            f.write_char(self.assign_delimiter)?;
            f.write_str(value)?;
        }
        Ok(())
    }
}
