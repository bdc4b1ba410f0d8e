/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::sync::Arc;

use crate::{
    DataPoint, DataPointValue, MetaName, MetaValue, MetadataRegistry, MetricMeta, MultiDataPoint,
    RateType, TAG_KEY_HOST, TagSet, Unit, UnixClock,
};

/// Shared state of all collection passes in one process.
///
/// Every datapoint is built through [`CollectContext::add`] or
/// [`CollectContext::add_ts`]. The context is cheap to clone, and all clones
/// share the same metadata registry and clock.
#[derive(Clone)]
pub struct CollectContext {
    global_tags: Arc<TagSet>,
    metadata: Arc<MetadataRegistry>,
    clock: Arc<UnixClock>,
}

impl CollectContext {
    pub fn new(global_tags: TagSet, metadata: Arc<MetadataRegistry>, clock: Arc<UnixClock>) -> Self {
        CollectContext {
            global_tags: Arc::new(global_tags),
            metadata,
            clock,
        }
    }

    #[inline]
    pub fn global_tags(&self) -> &TagSet {
        &self.global_tags
    }

    #[inline]
    pub fn metadata(&self) -> &MetadataRegistry {
        &self.metadata
    }

    #[inline]
    pub fn clock(&self) -> &UnixClock {
        &self.clock
    }

    /// Append a datapoint stamped with the cached unix time.
    ///
    /// A `host` tag with an empty value is removed from the final tags. Use it
    /// for datapoints describing a third party resource rather than the
    /// collecting machine.
    pub fn add<V>(
        &self,
        md: &mut MultiDataPoint,
        name: &str,
        value: V,
        tags: Option<&TagSet>,
        meta: MetricMeta,
    ) where
        V: Into<DataPointValue>,
    {
        self.add_ts(md, name, self.clock.now(), value, tags, meta)
    }

    pub fn add_ts<V>(
        &self,
        md: &mut MultiDataPoint,
        name: &str,
        ts: i64,
        value: V,
        tags: Option<&TagSet>,
        meta: MetricMeta,
    ) where
        V: Into<DataPointValue>,
    {
        let mut tags = tags.cloned().unwrap_or_default();
        if meta.rate != RateType::Unknown {
            self.metadata
                .add(name, None, MetaName::Rate, MetaValue::Rate(meta.rate));
        }
        if meta.unit != Unit::None {
            self.metadata
                .add(name, None, MetaName::Unit, MetaValue::Unit(meta.unit));
        }
        if !meta.desc.is_empty() {
            self.metadata.add(
                name,
                Some(&tags),
                MetaName::Desc,
                MetaValue::Text(meta.desc.to_string()),
            );
        }
        // host detection is left to the scheduler layer, only the explicit
        // suppression is handled here
        if tags.get(TAG_KEY_HOST).is_some_and(|h| h.is_empty()) {
            tags.remove(TAG_KEY_HOST);
        }
        let tags = self.global_tags.merge(&tags);
        md.push(DataPoint::new(name, ts, value.into(), tags));
    }

    /// Register an annotation which is not bound to a single datapoint, such
    /// as the hardware model of a host.
    pub fn add_meta(&self, metric: &str, tags: Option<&TagSet>, name: MetaName, value: &str) {
        self.metadata
            .add(metric, tags, name, MetaValue::Text(value.to_string()));
    }
}
