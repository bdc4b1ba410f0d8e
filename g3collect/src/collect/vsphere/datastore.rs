/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use g3_datapoint::catalog::*;
use g3_datapoint::{Capacity, MetricMeta, TAG_KEY_HOST, TagSet, Unit};

use super::VsphereCollector;
use crate::collect::CollectedBatch;
use crate::inventory::{EntityRecord, Field, entity_name, fields};

pub(super) const KIND: &str = "Datastore";

const CAPACITY: &str = "summary.capacity";
const FREE_SPACE: &str = "summary.freeSpace";

pub(super) const PROPERTIES: &[&str] = &["name", CAPACITY, FREE_SPACE];

const TAG_KEY_DISK: &str = "disk";

impl VsphereCollector {
    pub(super) fn collect_datastores(&self, records: &[EntityRecord], batch: &mut CollectedBatch) {
        let gauge_bytes = MetricMeta::gauge(Unit::Bytes);

        for r in records {
            let name = match entity_name(KIND, r) {
                Ok(name) => name,
                Err(e) => {
                    batch.faults.push(e);
                    continue;
                }
            };
            // the datastore is not a part of the collecting machine
            let tags = TagSet::from([(TAG_KEY_DISK, name.as_str()), (TAG_KEY_HOST, "")]);
            let md = &mut batch.points;

            let mut total = 0i64;
            let mut free = 0i64;
            for field in fields(KIND, r, &name) {
                let (property, value) = match field {
                    Ok(v) => v,
                    Err(e) => {
                        batch.faults.push(e);
                        continue;
                    }
                };
                let Field::Integer(i) = value else {
                    continue;
                };
                match property {
                    CAPACITY => {
                        self.ctx.add(
                            md,
                            OS_DISK_TOTAL,
                            i,
                            Some(&tags),
                            gauge_bytes.with_desc(OS_DISK_TOTAL_DESC),
                        );
                        self.ctx
                            .add(md, &self.names.disk_space_total, i, Some(&tags), gauge_bytes);
                        total = i;
                    }
                    FREE_SPACE => {
                        self.ctx.add(
                            md,
                            OS_DISK_FREE,
                            i,
                            Some(&tags),
                            gauge_bytes.with_desc(OS_DISK_FREE_DESC),
                        );
                        self.ctx
                            .add(md, &self.names.disk_space_free, i, Some(&tags), gauge_bytes);
                        free = i;
                    }
                    _ => {}
                }
            }

            if let Some(disk) = Capacity::from_free(total, free) {
                let gauge_pct = MetricMeta::gauge(Unit::Percent);
                self.ctx.add(
                    md,
                    OS_DISK_USED,
                    disk.used(),
                    Some(&tags),
                    gauge_bytes.with_desc(OS_DISK_USED_DESC),
                );
                self.ctx
                    .add(md, &self.names.disk_space_used, disk.used(), Some(&tags), gauge_bytes);
                self.ctx.add(
                    md,
                    OS_DISK_PCT_FREE,
                    disk.percent_free(),
                    Some(&tags),
                    gauge_pct.with_desc(OS_DISK_PCT_FREE_DESC),
                );
                self.ctx.add(
                    md,
                    &self.names.disk_percent_free,
                    disk.percent_free(),
                    Some(&tags),
                    gauge_pct,
                );
            }
        }
    }
}
