/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::time::Duration;

use anyhow::{Context, anyhow};
use yaml_rust::{Yaml, yaml};

use g3_datapoint::chars_allowed_in_opentsdb;

use super::yaml::{as_duration, as_string, foreach_kv, normalize_key};
use super::{CONFIG_KEY_COLLECTOR_NAME, CONFIG_KEY_COLLECTOR_TYPE, DEFAULT_COLLECT_INTERVAL};

const DEFAULT_NAMESPACE: &str = "vsphere";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VsphereCollectorConfig {
    pub name: String,
    pub host: String,
    pub user: String,
    pub password: String,
    pub namespace: String,
    pub interval: Duration,
}

impl Default for VsphereCollectorConfig {
    fn default() -> Self {
        VsphereCollectorConfig {
            name: String::new(),
            host: String::new(),
            user: String::new(),
            password: String::new(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            interval: DEFAULT_COLLECT_INTERVAL,
        }
    }
}

impl VsphereCollectorConfig {
    pub(super) fn parse(map: &yaml::Hash) -> anyhow::Result<Self> {
        let mut collector = VsphereCollectorConfig::default();

        foreach_kv(map, |k, v| collector.set(k, v))?;

        collector.check()?;
        Ok(collector)
    }

    fn set(&mut self, k: &str, v: &Yaml) -> anyhow::Result<()> {
        match normalize_key(k).as_str() {
            CONFIG_KEY_COLLECTOR_TYPE => Ok(()),
            CONFIG_KEY_COLLECTOR_NAME => {
                self.name = as_string(v)?;
                Ok(())
            }
            "host" => {
                self.host = as_string(v)?;
                Ok(())
            }
            "user" | "username" => {
                self.user = as_string(v)?;
                Ok(())
            }
            "password" => {
                self.password = as_string(v)?;
                Ok(())
            }
            "namespace" => {
                let ns = as_string(v)?;
                chars_allowed_in_opentsdb(&ns).context(format!("invalid metric namespace {ns}"))?;
                self.namespace = ns;
                Ok(())
            }
            "interval" => {
                self.interval = as_duration(v)
                    .context(format!("invalid humanize duration value for key {k}"))?;
                Ok(())
            }
            _ => Err(anyhow!("invalid key {k}")),
        }
    }

    fn check(&mut self) -> anyhow::Result<()> {
        if self.host.is_empty() {
            return Err(anyhow!("host is not set"));
        }
        if self.name.is_empty() {
            self.name = format!("vsphere-{}", self.host);
        }
        if self.interval.is_zero() {
            return Err(anyhow!("interval should not be zero"));
        }
        Ok(())
    }
}
