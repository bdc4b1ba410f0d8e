/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard};

use foldhash::fast::FixedState;

use crate::TagSet;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RateType {
    #[default]
    Unknown,
    Gauge,
    Counter,
    Rate,
}

impl RateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RateType::Unknown => "",
            RateType::Gauge => "gauge",
            RateType::Counter => "counter",
            RateType::Rate => "rate",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    #[default]
    None,
    Bytes,
    BytesPerSecond,
    Count,
    Error,
    Gauge,
    Megahertz,
    Packet,
    Percent,
    Second,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::None => "",
            Unit::Bytes => "bytes",
            Unit::BytesPerSecond => "bytes per second",
            Unit::Count => "count",
            Unit::Error => "errors",
            Unit::Gauge => "gauge",
            Unit::Megahertz => "MHz",
            Unit::Packet => "packets",
            Unit::Percent => "percent",
            Unit::Second => "seconds",
        }
    }
}

/// Kind of the annotation stored in the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetaName {
    Rate,
    Unit,
    Desc,
    Model,
    SerialNumber,
    Hypervisor,
}

impl MetaName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetaName::Rate => "rate",
            MetaName::Unit => "unit",
            MetaName::Desc => "desc",
            MetaName::Model => "model",
            MetaName::SerialNumber => "serialNumber",
            MetaName::Hypervisor => "hypervisor",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MetaValue {
    Rate(RateType),
    Unit(Unit),
    Text(String),
}

impl fmt::Display for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaValue::Rate(r) => f.write_str(r.as_str()),
            MetaValue::Unit(u) => f.write_str(u.as_str()),
            MetaValue::Text(s) => f.write_str(s),
        }
    }
}

/// Metadata entries are keyed by metric name, an optional tag set qualifier
/// and the annotation kind. Host level annotations use an empty metric name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MetaKey {
    pub metric: String,
    pub tags: Option<TagSet>,
    pub name: MetaName,
}

/// The out-of-band annotations passed along with a datapoint.
///
/// `RateType::Unknown`, `Unit::None` and an empty `desc` mean the
/// corresponding annotation is not registered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MetricMeta {
    pub rate: RateType,
    pub unit: Unit,
    pub desc: &'static str,
}

impl MetricMeta {
    pub const NONE: MetricMeta = MetricMeta {
        rate: RateType::Unknown,
        unit: Unit::None,
        desc: "",
    };

    pub const fn gauge(unit: Unit) -> Self {
        MetricMeta {
            rate: RateType::Gauge,
            unit,
            desc: "",
        }
    }

    pub const fn with_desc(mut self, desc: &'static str) -> Self {
        self.desc = desc;
        self
    }
}

pub struct MetadataRegistry {
    inner: Mutex<HashMap<MetaKey, MetaValue, FixedState>>,
}

impl Default for MetadataRegistry {
    fn default() -> Self {
        MetadataRegistry::new()
    }
}

impl MetadataRegistry {
    pub fn new() -> Self {
        MetadataRegistry {
            inner: Mutex::new(HashMap::with_hasher(FixedState::with_seed(0))),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<MetaKey, MetaValue, FixedState>> {
        // entries are plain values, so a panic in another writer leaves no
        // half updated state behind
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Upsert an annotation. Returns false if the very same value is
    /// already registered under this key.
    pub fn add(&self, metric: &str, tags: Option<&TagSet>, name: MetaName, value: MetaValue) -> bool {
        let key = MetaKey {
            metric: metric.to_string(),
            tags: tags.cloned(),
            name,
        };
        let mut ht = self.lock();
        match ht.get(&key) {
            Some(old) if *old == value => false,
            _ => {
                ht.insert(key, value);
                true
            }
        }
    }

    pub fn get(&self, metric: &str, tags: Option<&TagSet>, name: MetaName) -> Option<MetaValue> {
        let key = MetaKey {
            metric: metric.to_string(),
            tags: tags.cloned(),
            name,
        };
        self.lock().get(&key).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Get a copy of all entries, sorted by key.
    pub fn snapshot(&self) -> Vec<(MetaKey, MetaValue)> {
        let mut entries: Vec<(MetaKey, MetaValue)> = self
            .lock()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}
