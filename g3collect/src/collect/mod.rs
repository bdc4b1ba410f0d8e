/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::time::Duration;

use async_trait::async_trait;
use log::warn;

use g3_datapoint::MultiDataPoint;

use crate::{CollectError, EntityError};

pub mod railgun;
pub mod vsphere;

/// All per entity faults seen in one collection pass, in order.
#[derive(Debug, Default)]
pub struct EntityFaults {
    inner: Vec<EntityError>,
}

impl EntityFaults {
    pub fn push(&mut self, e: EntityError) {
        warn!("{e}");
        self.inner.push(e);
    }

    /// The error reported for the pass. Earlier faults are still available
    /// from [`EntityFaults::iter`].
    #[inline]
    pub fn last(&self) -> Option<&EntityError> {
        self.inner.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntityError> {
        self.inner.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// Result of a collection pass which did not fail as a whole.
///
/// The datapoints are usable even if there are entity faults.
#[derive(Debug, Default)]
pub struct CollectedBatch {
    pub points: MultiDataPoint,
    pub faults: EntityFaults,
}

impl CollectedBatch {
    pub fn into_parts(self) -> (MultiDataPoint, Option<EntityError>) {
        let CollectedBatch { points, mut faults } = self;
        (points, faults.inner.pop())
    }
}

impl From<MultiDataPoint> for CollectedBatch {
    fn from(points: MultiDataPoint) -> Self {
        CollectedBatch {
            points,
            faults: EntityFaults::default(),
        }
    }
}

#[async_trait]
pub trait Collector: Send + Sync {
    fn name(&self) -> &str;
    fn interval(&self) -> Duration;

    async fn collect(&self) -> Result<CollectedBatch, CollectError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_name(id: &str) -> EntityError {
        EntityError::EmptyName {
            kind: "Datastore",
            id: id.to_string(),
        }
    }

    #[test]
    fn last_error_wins() {
        let mut batch = CollectedBatch::default();
        assert!(batch.faults.last().is_none());

        batch.faults.push(empty_name("datastore-1"));
        batch.faults.push(empty_name("datastore-2"));
        assert_eq!(batch.faults.len(), 2);
        assert_eq!(batch.faults.last(), Some(&empty_name("datastore-2")));
        assert_eq!(
            batch.faults.iter().cloned().collect::<Vec<_>>(),
            vec![empty_name("datastore-1"), empty_name("datastore-2")]
        );

        let (points, e) = batch.into_parts();
        assert!(points.is_empty());
        assert_eq!(e, Some(empty_name("datastore-2")));
    }

    #[test]
    fn no_fault() {
        let batch = CollectedBatch::from(MultiDataPoint::new());
        assert!(batch.faults.is_empty());
        let (_, e) = batch.into_parts();
        assert!(e.is_none());
    }
}
