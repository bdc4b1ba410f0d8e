/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, anyhow};
use yaml_rust::{Yaml, yaml};

use super::yaml::{as_duration, as_string, foreach_kv, normalize_key};
use super::{CONFIG_KEY_COLLECTOR_NAME, CONFIG_KEY_COLLECTOR_TYPE, DEFAULT_COLLECT_INTERVAL};

const DEFAULT_NAME: &str = "railgun";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RailgunCollectorConfig {
    pub name: String,
    /// The stats url, if set directly.
    pub url: Option<String>,
    /// The listener config file to find the stats address in.
    pub config_file: Option<PathBuf>,
    pub interval: Duration,
}

impl Default for RailgunCollectorConfig {
    fn default() -> Self {
        RailgunCollectorConfig {
            name: DEFAULT_NAME.to_string(),
            url: None,
            config_file: None,
            interval: DEFAULT_COLLECT_INTERVAL,
        }
    }
}

impl RailgunCollectorConfig {
    pub(super) fn parse(map: &yaml::Hash, conf_dir: Option<&Path>) -> anyhow::Result<Self> {
        let mut collector = RailgunCollectorConfig::default();

        foreach_kv(map, |k, v| collector.set(k, v, conf_dir))?;

        collector.check()?;
        Ok(collector)
    }

    fn set(&mut self, k: &str, v: &Yaml, conf_dir: Option<&Path>) -> anyhow::Result<()> {
        match normalize_key(k).as_str() {
            CONFIG_KEY_COLLECTOR_TYPE => Ok(()),
            CONFIG_KEY_COLLECTOR_NAME => {
                self.name = as_string(v)?;
                Ok(())
            }
            "url" => {
                self.url = Some(as_string(v)?);
                Ok(())
            }
            "config_file" => {
                let path = PathBuf::from(as_string(v)?);
                let path = match conf_dir {
                    Some(dir) if path.is_relative() => dir.join(path),
                    _ => path,
                };
                self.config_file = Some(path);
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
        if self.name.is_empty() {
            return Err(anyhow!("name is not set"));
        }
        if self.url.is_none() && self.config_file.is_none() {
            return Err(anyhow!("either url or config_file should be set"));
        }
        if self.interval.is_zero() {
            return Err(anyhow!("interval should not be zero"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yaml_rust::YamlLoader;

    fn parse(s: &str, conf_dir: Option<&Path>) -> anyhow::Result<RailgunCollectorConfig> {
        let docs = YamlLoader::load_from_str(s).unwrap();
        let Yaml::Hash(map) = &docs[0] else {
            panic!("not a map");
        };
        RailgunCollectorConfig::parse(map, conf_dir)
    }

    #[test]
    fn url() {
        let config = parse("type: railgun\nurl: http://127.0.0.1:24088\n", None).unwrap();
        assert_eq!(config.name, "railgun");
        assert_eq!(config.url.as_deref(), Some("http://127.0.0.1:24088"));
        assert!(config.config_file.is_none());
        assert_eq!(config.interval, Duration::from_secs(15));
    }

    #[test]
    fn config_file() {
        let config = parse(
            "type: railgun\nconfig-file: railgun.conf\ninterval: 30s\n",
            Some(Path::new("/etc/collect")),
        )
        .unwrap();
        assert_eq!(
            config.config_file.as_deref(),
            Some(Path::new("/etc/collect/railgun.conf"))
        );
        assert_eq!(config.interval, Duration::from_secs(30));

        let config = parse(
            "type: railgun\nconfig_file: /etc/railgun/railgun.conf\n",
            Some(Path::new("/etc/collect")),
        )
        .unwrap();
        assert_eq!(
            config.config_file.as_deref(),
            Some(Path::new("/etc/railgun/railgun.conf"))
        );
    }

    #[test]
    fn invalid() {
        assert!(parse("type: railgun\n", None).is_err());
        assert!(parse("type: railgun\nurl: http://a\nport: 1\n", None).is_err());
        assert!(parse("type: railgun\nname: ''\nurl: http://a\n", None).is_err());
    }
}
