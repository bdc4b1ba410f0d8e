/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use log::debug;

use g3_datapoint::catalog::*;
use g3_datapoint::{Capacity, CpuCapacity, MetaName, MetricMeta, TAG_KEY_HOST, TagSet, Unit};

use super::ident::HostIdentificationInfo;
use super::{MB, VsphereCollector};
use crate::CollectError;
use crate::collect::CollectedBatch;
use crate::inventory::{EntityRecord, Field, decode_list, entity_name, fields};

pub(super) const KIND: &str = "HostSystem";

const CPU_MHZ: &str = "summary.hardware.cpuMhz";
const MEMORY_SIZE: &str = "summary.hardware.memorySize";
const NUM_CPU_CORES: &str = "summary.hardware.numCpuCores";
const CPU_USAGE: &str = "summary.quickStats.overallCpuUsage";
const MEMORY_USAGE: &str = "summary.quickStats.overallMemoryUsage";
const IDENTIFYING_INFO: &str = "summary.hardware.otherIdentifyingInfo";
const MODEL: &str = "summary.hardware.model";

pub(super) const PROPERTIES: &[&str] = &[
    "name",
    CPU_MHZ,
    MEMORY_SIZE,
    NUM_CPU_CORES,
    CPU_USAGE,
    MEMORY_USAGE,
    IDENTIFYING_INFO,
    MODEL,
];

const TAG_KEY_TYPE: &str = "type";

#[derive(Default)]
struct HostStats {
    mem_total: i64,
    mem_used: i64,
    cpu_mhz: i64,
    cpu_cores: i64,
    cpu_used: i64,
}

impl VsphereCollector {
    pub(super) fn collect_hosts(
        &self,
        records: &[EntityRecord],
        batch: &mut CollectedBatch,
    ) -> Result<(), CollectError> {
        let gauge_bytes = MetricMeta::gauge(Unit::Bytes);
        let gauge_mhz = MetricMeta::gauge(Unit::Megahertz);

        for r in records {
            let name = match entity_name(KIND, r) {
                Ok(name) => name,
                Err(e) => {
                    batch.faults.push(e);
                    continue;
                }
            };
            let tags = TagSet::from([(TAG_KEY_HOST, name.as_str())]);
            let md = &mut batch.points;

            let mut stats = HostStats::default();
            for field in fields(KIND, r, &name) {
                let (property, value) = match field {
                    Ok(v) => v,
                    Err(e) => {
                        batch.faults.push(e);
                        continue;
                    }
                };
                match value {
                    Field::Integer(i) => match property {
                        MEMORY_SIZE => {
                            self.ctx.add(md, OS_MEM_TOTAL, i, Some(&tags), gauge_bytes);
                            stats.mem_total = i;
                        }
                        MEMORY_USAGE => {
                            stats.mem_used = i.saturating_mul(MB);
                            self.ctx
                                .add(md, OS_MEM_USED, stats.mem_used, Some(&tags), gauge_bytes);
                        }
                        CPU_MHZ => stats.cpu_mhz = i,
                        CPU_USAGE => {
                            stats.cpu_used = i;
                            let mut cpu_tags = tags.clone();
                            cpu_tags.insert(TAG_KEY_TYPE, "usage");
                            self.ctx
                                .add(md, &self.names.cpu, i, Some(&cpu_tags), gauge_mhz);
                        }
                        NUM_CPU_CORES => stats.cpu_cores = i,
                        _ => {}
                    },
                    Field::Text(s) => {
                        if property == MODEL {
                            self.ctx.add_meta("", Some(&tags), MetaName::Model, s);
                        }
                    }
                    Field::Document { xml, .. } => {
                        if property != IDENTIFYING_INFO {
                            continue;
                        }
                        let infos: Vec<HostIdentificationInfo> =
                            decode_list(xml).map_err(|e| CollectError::SubDocument {
                                entity: name.clone(),
                                property: property.to_string(),
                                source: e,
                            })?;
                        for info in &infos {
                            if let Some(serial) = info.service_tag() {
                                debug!(
                                    "host {name}: {} {serial}",
                                    info.identifier_type.label
                                );
                                self.ctx
                                    .add_meta("", Some(&tags), MetaName::SerialNumber, serial);
                            }
                        }
                    }
                }
            }

            if let Some(mem) = Capacity::from_used(stats.mem_total, stats.mem_used) {
                self.ctx.add(
                    md,
                    OS_MEM_FREE,
                    mem.free(),
                    Some(&tags),
                    gauge_bytes.with_desc(OS_MEM_FREE_DESC),
                );
                self.ctx.add(
                    md,
                    OS_MEM_PCT_FREE,
                    mem.percent_free(),
                    Some(&tags),
                    MetricMeta::gauge(Unit::Percent).with_desc(OS_MEM_PCT_FREE_DESC),
                );
            }
            if let Some(cpu) = CpuCapacity::from_cores(stats.cpu_mhz, stats.cpu_cores, stats.cpu_used)
            {
                let mut cpu_tags = tags.clone();
                cpu_tags.insert(TAG_KEY_TYPE, "idle");
                self.ctx
                    .add(md, &self.names.cpu, cpu.idle(), Some(&cpu_tags), gauge_mhz);
                self.ctx.add(
                    md,
                    &self.names.cpu_pct,
                    cpu.percent_used(),
                    Some(&tags),
                    MetricMeta::gauge(Unit::Percent),
                );
            }
        }
        Ok(())
    }
}
