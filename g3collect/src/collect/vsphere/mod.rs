/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use g3_datapoint::{CollectContext, clean};

use super::{CollectedBatch, Collector};
use crate::CollectError;
use crate::config::VsphereCollectorConfig;
use crate::inventory::{EntityRecord, InventoryClient, NameIndex};

mod datastore;
mod guest;
mod host;
mod ident;


const MB: i64 = 1024 * 1024;

/// Metric names under the configured namespace.
struct MetricNames {
    cpu: String,
    cpu_pct: String,
    disk_space_total: String,
    disk_space_free: String,
    disk_space_used: String,
    disk_percent_free: String,
    guest_cpu: String,
    guest_num_cpu: String,
    guest_mem_total: String,
    guest_mem_host: String,
    guest_mem_used: String,
    guest_mem_ballooned: String,
    guest_mem_free: String,
    guest_mem_percent_free: String,
}

impl MetricNames {
    fn new(ns: &str) -> Self {
        MetricNames {
            cpu: format!("{ns}.cpu"),
            cpu_pct: format!("{ns}.cpu.pct"),
            disk_space_total: format!("{ns}.disk.space_total"),
            disk_space_free: format!("{ns}.disk.space_free"),
            disk_space_used: format!("{ns}.disk.space_used"),
            disk_percent_free: format!("{ns}.disk.percent_free"),
            guest_cpu: format!("{ns}.guest.cpu"),
            guest_num_cpu: format!("{ns}.guest.num_cpu"),
            guest_mem_total: format!("{ns}.guest.mem.total"),
            guest_mem_host: format!("{ns}.guest.mem.host"),
            guest_mem_used: format!("{ns}.guest.mem.used"),
            guest_mem_ballooned: format!("{ns}.guest.mem.ballooned"),
            guest_mem_free: format!("{ns}.guest.mem.free"),
            guest_mem_percent_free: format!("{ns}.guest.mem.percent_free"),
        }
    }
}

/// Collect host, datastore and guest metrics from one vCenter endpoint.
pub struct VsphereCollector {
    config: Arc<VsphereCollectorConfig>,
    ctx: CollectContext,
    client: Arc<dyn InventoryClient>,
    source_host: String,
    names: MetricNames,
}

impl VsphereCollector {
    pub fn new(
        config: Arc<VsphereCollectorConfig>,
        ctx: CollectContext,
        client: Arc<dyn InventoryClient>,
    ) -> Self {
        let source_host = clean(&config.host);
        let names = MetricNames::new(&config.namespace);
        VsphereCollector {
            config,
            ctx,
            client,
            source_host,
            names,
        }
    }

    async fn query(
        &self,
        kind: &'static str,
        properties: &[&str],
    ) -> Result<Vec<EntityRecord>, CollectError> {
        self.client
            .query(kind, properties)
            .await
            .map_err(|e| CollectError::Query { kind, source: e })
    }
}

#[async_trait]
impl Collector for VsphereCollector {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn interval(&self) -> Duration {
        self.config.interval
    }

    async fn collect(&self) -> Result<CollectedBatch, CollectError> {
        let mut batch = CollectedBatch::default();

        let hosts = self.query(host::KIND, host::PROPERTIES).await?;
        self.collect_hosts(&hosts, &mut batch)?;
        let hypervisors = NameIndex::build(&hosts);

        let datastores = self.query(datastore::KIND, datastore::PROPERTIES).await?;
        self.collect_datastores(&datastores, &mut batch);

        let guests = self.query(guest::KIND, guest::PROPERTIES).await?;
        self.collect_guests(&guests, &hypervisors, &mut batch);

        debug!(
            "{}: collected {} datapoints from {} hosts, {} datastores and {} guests",
            self.config.name,
            batch.points.len(),
            hosts.len(),
            datastores.len(),
            guests.len()
        );
        Ok(batch)
    }
}
