/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, anyhow};
use yaml_rust::yaml::Hash;
use yaml_rust::{Yaml, YamlLoader};

use g3_datapoint::TagSet;

mod yaml;

mod railgun;
mod vsphere;

pub use railgun::RailgunCollectorConfig;
pub use vsphere::VsphereCollectorConfig;

const CONFIG_KEY_COLLECTOR_TYPE: &str = "type";
const CONFIG_KEY_COLLECTOR_NAME: &str = "name";

const DEFAULT_COLLECT_INTERVAL: Duration = Duration::from_secs(15);

#[derive(Clone, Debug)]
pub enum AnyCollectorConfig {
    Vsphere(Arc<VsphereCollectorConfig>),
    Railgun(Arc<RailgunCollectorConfig>),
}

impl AnyCollectorConfig {
    pub fn name(&self) -> &str {
        match self {
            AnyCollectorConfig::Vsphere(c) => &c.name,
            AnyCollectorConfig::Railgun(c) => &c.name,
        }
    }

    pub fn collector_type(&self) -> &'static str {
        match self {
            AnyCollectorConfig::Vsphere(_) => "vsphere",
            AnyCollectorConfig::Railgun(_) => "railgun",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AgentConfig {
    /// Tags added to every datapoint, unless set by the collector.
    pub global_tags: TagSet,
    pub collectors: Vec<AnyCollectorConfig>,
}

impl AgentConfig {
    fn set(&mut self, k: &str, v: &Yaml, conf_dir: Option<&Path>) -> anyhow::Result<()> {
        match yaml::normalize_key(k).as_str() {
            "global_tags" => {
                self.global_tags = yaml::as_tag_set(v)?;
                Ok(())
            }
            "collector" => self.load_collectors(v, conf_dir),
            _ => Err(anyhow!("invalid key {k} in main conf")),
        }
    }

    fn load_collectors(&mut self, v: &Yaml, conf_dir: Option<&Path>) -> anyhow::Result<()> {
        let Yaml::Array(seq) = v else {
            return Err(anyhow!("collector should be a list of maps"));
        };
        for (i, v) in seq.iter().enumerate() {
            let Yaml::Hash(map) = v else {
                return Err(anyhow!("collector #{i} should be a map"));
            };
            let collector =
                load_collector(map, conf_dir).context(format!("invalid collector #{i}"))?;
            if self.collectors.iter().any(|c| c.name() == collector.name()) {
                return Err(anyhow!(
                    "collector with name {} already exists",
                    collector.name()
                ));
            }
            self.collectors.push(collector);
        }
        Ok(())
    }
}

fn load_collector(map: &Hash, conf_dir: Option<&Path>) -> anyhow::Result<AnyCollectorConfig> {
    let collector_type = yaml::get_required_str(map, CONFIG_KEY_COLLECTOR_TYPE)?;
    match yaml::normalize_key(collector_type).as_str() {
        "vsphere" => {
            let collector = VsphereCollectorConfig::parse(map)
                .context("failed to load this vSphere collector")?;
            Ok(AnyCollectorConfig::Vsphere(Arc::new(collector)))
        }
        "railgun" => {
            let collector = RailgunCollectorConfig::parse(map, conf_dir)
                .context("failed to load this Railgun collector")?;
            Ok(AnyCollectorConfig::Railgun(Arc::new(collector)))
        }
        _ => Err(anyhow!("unsupported collector type {collector_type}")),
    }
}

fn load_docs(s: &str, conf_dir: Option<&Path>) -> anyhow::Result<AgentConfig> {
    let docs = YamlLoader::load_from_str(s).map_err(|e| anyhow!("invalid yaml: {e}"))?;
    let mut config = AgentConfig::default();
    // allow multiple docs, and treat them as the same
    for doc in &docs {
        match doc {
            Yaml::Hash(map) => yaml::foreach_kv(map, |k, v| config.set(k, v, conf_dir))?,
            Yaml::Null => {}
            _ => return Err(anyhow!("yaml doc root should be hash")),
        }
    }
    Ok(config)
}

/// Load the agent config from a yaml string. Relative paths are kept as is.
pub fn load_str(s: &str) -> anyhow::Result<AgentConfig> {
    load_docs(s, None)
}

/// Load the agent config from a yaml file. Relative paths in it are taken
/// as relative to the directory of the file.
pub fn load_file(path: &Path) -> anyhow::Result<AgentConfig> {
    let s = std::fs::read_to_string(path)
        .context(format!("failed to read config file {}", path.display()))?;
    load_docs(&s, path.parent())
        .context(format!("failed to load config file {}", path.display()))
}
