/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::collections::HashMap;

use g3_datapoint::clean;

use super::{EntityRecord, PROPERTY_NAME};

/// Map from entity id to the cleaned display name, for one kind of entity.
#[derive(Debug, Default)]
pub struct NameIndex {
    names: HashMap<String, String>,
}

impl NameIndex {
    /// Entities without a usable name are left out.
    pub fn build(records: &[EntityRecord]) -> Self {
        let mut names = HashMap::with_capacity(records.len());
        for r in records {
            let Some(v) = r.get(PROPERTY_NAME) else {
                continue;
            };
            let name = clean(v.raw());
            if !name.is_empty() {
                names.insert(r.id.clone(), name);
            }
        }
        NameIndex { names }
    }

    #[inline]
    pub fn lookup(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(|v| v.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build() {
        let records = vec![
            EntityRecord::new("host-10").with_text("name", "esx 01"),
            EntityRecord::new("host-11").with_text("name", ""),
            EntityRecord::new("host-12"),
            EntityRecord::new("host-13").with_text("name", "esx-03"),
        ];
        let index = NameIndex::build(&records);
        assert_eq!(index.len(), 2);
        assert_eq!(index.lookup("host-10"), Some("esx01"));
        assert_eq!(index.lookup("host-13"), Some("esx-03"));
        assert_eq!(index.lookup("host-11"), None);
        assert_eq!(index.lookup("host-99"), None);
    }
}
