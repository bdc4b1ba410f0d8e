/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use log::debug;

use g3_datapoint::{Capacity, MetaName, MetricMeta, TAG_KEY_HOST, TagSet, Unit};

use super::{MB, VsphereCollector};
use crate::collect::CollectedBatch;
use crate::inventory::{EntityRecord, Field, NameIndex, entity_name, fields};

pub(super) const KIND: &str = "VirtualMachine";

const RUNTIME_HOST: &str = "runtime.host";
const MEMORY_MB: &str = "config.hardware.memoryMB";
const NUM_CPU: &str = "config.hardware.numCPU";
const BALLOONED_MEMORY: &str = "summary.quickStats.balloonedMemory";
const GUEST_MEMORY_USAGE: &str = "summary.quickStats.guestMemoryUsage";
const HOST_MEMORY_USAGE: &str = "summary.quickStats.hostMemoryUsage";
const CPU_USAGE: &str = "summary.quickStats.overallCpuUsage";

pub(super) const PROPERTIES: &[&str] = &[
    "name",
    RUNTIME_HOST,
    MEMORY_MB,
    NUM_CPU,
    BALLOONED_MEMORY,
    GUEST_MEMORY_USAGE,
    HOST_MEMORY_USAGE,
    CPU_USAGE,
];

const TAG_KEY_GUEST: &str = "guest";

const GUEST_MEM_HOST_DESC: &str = "Host memory utilization, also known as consumed host memory. Includes the overhead memory of the VM.";
const GUEST_MEM_USED_DESC: &str =
    "Guest memory utilization statistics, also known as active guest memory.";
const GUEST_MEM_BALLOONED_DESC: &str = "The size of the balloon driver in the VM. The host will inflate the balloon driver to reclaim physical memory from the VM. This is a sign that there is memory pressure on the host.";

impl VsphereCollector {
    pub(super) fn collect_guests(
        &self,
        records: &[EntityRecord],
        hypervisors: &NameIndex,
        batch: &mut CollectedBatch,
    ) {
        let gauge_bytes = MetricMeta::gauge(Unit::Bytes);

        for r in records {
            let name = match entity_name(KIND, r) {
                Ok(name) => name,
                Err(e) => {
                    batch.faults.push(e);
                    continue;
                }
            };
            let tags = TagSet::from([
                (TAG_KEY_HOST, self.source_host.as_str()),
                (TAG_KEY_GUEST, name.as_str()),
            ]);
            let md = &mut batch.points;

            let mut mem_total = 0i64;
            let mut mem_used = 0i64;
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
                        MEMORY_MB => {
                            mem_total = i.saturating_mul(MB);
                            self.ctx.add(
                                md,
                                &self.names.guest_mem_total,
                                mem_total,
                                Some(&tags),
                                gauge_bytes,
                            );
                        }
                        HOST_MEMORY_USAGE => self.ctx.add(
                            md,
                            &self.names.guest_mem_host,
                            i.saturating_mul(MB),
                            Some(&tags),
                            gauge_bytes.with_desc(GUEST_MEM_HOST_DESC),
                        ),
                        GUEST_MEMORY_USAGE => {
                            mem_used = i.saturating_mul(MB);
                            self.ctx.add(
                                md,
                                &self.names.guest_mem_used,
                                mem_used,
                                Some(&tags),
                                gauge_bytes.with_desc(GUEST_MEM_USED_DESC),
                            );
                        }
                        CPU_USAGE => self.ctx.add(
                            md,
                            &self.names.guest_cpu,
                            i,
                            Some(&tags),
                            MetricMeta::gauge(Unit::Megahertz),
                        ),
                        BALLOONED_MEMORY => self.ctx.add(
                            md,
                            &self.names.guest_mem_ballooned,
                            i.saturating_mul(MB),
                            Some(&tags),
                            gauge_bytes.with_desc(GUEST_MEM_BALLOONED_DESC),
                        ),
                        NUM_CPU => self.ctx.add(
                            md,
                            &self.names.guest_num_cpu,
                            i,
                            Some(&tags),
                            MetricMeta::gauge(Unit::Gauge),
                        ),
                        _ => {}
                    },
                    Field::Text(id) => {
                        if property != RUNTIME_HOST {
                            continue;
                        }
                        match hypervisors.lookup(id) {
                            Some(hypervisor) => {
                                let guest_tags = TagSet::from([(TAG_KEY_HOST, name.as_str())]);
                                self.ctx.add_meta(
                                    "",
                                    Some(&guest_tags),
                                    MetaName::Hypervisor,
                                    hypervisor,
                                );
                            }
                            None => debug!("guest {name}: no host found for id {id}"),
                        }
                    }
                    Field::Document { .. } => {}
                }
            }

            if let Some(mem) = Capacity::from_used(mem_total, mem_used) {
                self.ctx.add(
                    md,
                    &self.names.guest_mem_free,
                    mem.free(),
                    Some(&tags),
                    gauge_bytes,
                );
                self.ctx.add(
                    md,
                    &self.names.guest_mem_percent_free,
                    mem.percent_free(),
                    Some(&tags),
                    MetricMeta::gauge(Unit::Percent),
                );
            }
        }
    }
}
