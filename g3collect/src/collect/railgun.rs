/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use g3_datapoint::{CollectContext, MetricMeta, MultiDataPoint, clean};

use super::{CollectedBatch, Collector};
use crate::CollectError;
use crate::config::RailgunCollectorConfig;
use crate::util::read_lines;

const METRIC_PREFIX: &str = "railgun.";

static LISTEN_RE: Lazy<Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"^stats.listen\s+?=\s+?([0-9.:]+)"));

/// Get the stats url from a `stats.listen = <addr>` config line.
pub fn parse_listen_url(line: &str) -> Option<String> {
    let re = LISTEN_RE.as_ref().ok()?;
    let caps = re.captures(line)?;
    let addr = caps.get(1)?;
    Some(format!("http://{}", addr.as_str()))
}

/// Find the stats url in the listener config file. The last match wins.
pub fn listen_url_from_file(path: &Path) -> anyhow::Result<Option<String>> {
    let mut url = None;
    read_lines(path, |line| {
        if let Some(u) = parse_listen_url(line) {
            url = Some(u);
        }
        Ok(())
    })?;
    Ok(url)
}

/// The http transport for the stats endpoint.
#[async_trait]
pub trait StatsFetcher: Send + Sync {
    /// Get the response body of the url.
    async fn fetch(&self, url: &str) -> anyhow::Result<Vec<u8>>;
}

/// Convert the stats json object into datapoints. Only numeric values are
/// kept.
pub fn convert(ctx: &CollectContext, body: &[u8]) -> Result<MultiDataPoint, serde_json::Error> {
    let stats: Map<String, Value> = serde_json::from_slice(body)?;
    let mut md = MultiDataPoint::with_capacity(stats.len());
    for (k, v) in stats.iter() {
        let Value::Number(n) = v else {
            debug!("railgun: skip non-numeric stats {k}");
            continue;
        };
        let Some(f) = n.as_f64() else {
            continue;
        };
        let key = clean(k);
        if key.is_empty() {
            continue;
        }
        let name = format!("{METRIC_PREFIX}{key}");
        ctx.add(&mut md, &name, f, None, MetricMeta::NONE);
    }
    Ok(md)
}

pub struct RailgunCollector {
    config: Arc<RailgunCollectorConfig>,
    ctx: CollectContext,
    fetcher: Arc<dyn StatsFetcher>,
    url: String,
}

impl RailgunCollector {
    pub fn new(
        config: Arc<RailgunCollectorConfig>,
        ctx: CollectContext,
        fetcher: Arc<dyn StatsFetcher>,
    ) -> anyhow::Result<Self> {
        let url = match (&config.url, &config.config_file) {
            (Some(url), _) => url.clone(),
            (None, Some(path)) => listen_url_from_file(path)?.ok_or_else(|| {
                anyhow!("no stats.listen address found in {}", path.display())
            })?,
            (None, None) => return Err(anyhow!("no stats url configured")),
        };
        Ok(RailgunCollector {
            config,
            ctx,
            fetcher,
            url,
        })
    }

    #[inline]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Collector for RailgunCollector {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn interval(&self) -> Duration {
        self.config.interval
    }

    async fn collect(&self) -> Result<CollectedBatch, CollectError> {
        let body = self
            .fetcher
            .fetch(&self.url)
            .await
            .map_err(|e| CollectError::Fetch {
                url: self.url.clone(),
                source: e,
            })?;
        let md = convert(&self.ctx, &body)?;
        Ok(CollectedBatch::from(md))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use g3_datapoint::{DataPointValue, MetadataRegistry, TagSet, UnixClock};

    fn context() -> CollectContext {
        CollectContext::new(
            TagSet::from([("host", "web-01")]),
            Arc::new(MetadataRegistry::new()),
            Arc::new(UnixClock::with_time(1700000000)),
        )
    }

    struct FakeFetcher {
        body: &'static str,
    }

    #[async_trait]
    impl StatsFetcher for FakeFetcher {
        async fn fetch(&self, url: &str) -> anyhow::Result<Vec<u8>> {
            if url == "http://127.0.0.1:24088" {
                Ok(self.body.as_bytes().to_vec())
            } else {
                Err(anyhow!("connection refused"))
            }
        }
    }

    fn config(url: &str) -> Arc<RailgunCollectorConfig> {
        Arc::new(RailgunCollectorConfig {
            url: Some(url.to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn listen_url() {
        assert_eq!(
            parse_listen_url("stats.listen = 127.0.0.1:24088"),
            Some("http://127.0.0.1:24088".to_string())
        );
        assert_eq!(
            parse_listen_url("stats.listen  =  :24088 # local"),
            Some("http://:24088".to_string())
        );
        assert_eq!(parse_listen_url("stats.listen=127.0.0.1:24088"), None);
        assert_eq!(parse_listen_url("# stats.listen = 127.0.0.1:24088"), None);
        assert_eq!(parse_listen_url("activation.token = abc"), None);
    }

    #[test]
    fn listen_url_file() {
        let path: PathBuf =
            std::env::temp_dir().join(format!("g3collect-{}-railgun.conf", std::process::id()));
        std::fs::write(
            &path,
            "activation.token = abc\nstats.listen = 10.0.0.1:80\nstats.listen = 127.0.0.1:24088\n",
        )
        .unwrap();
        let url = listen_url_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(url.as_deref(), Some("http://127.0.0.1:24088"));
    }

    #[test]
    fn convert_numeric() {
        let ctx = context();
        let body = br#"{"requests_served": 1200, "memory usage": 3.5, "version": "5.3", "up": true, "stats": {"a": 1}}"#;
        let md = convert(&ctx, body).unwrap();
        assert_eq!(md.len(), 2);

        let p = md
            .iter()
            .find(|p| p.metric() == "railgun.requests_served")
            .unwrap();
        assert_eq!(p.value(), DataPointValue::Double(1200.0));
        assert_eq!(p.timestamp(), 1700000000);
        assert_eq!(p.tags().get("host"), Some("web-01"));

        let p = md
            .iter()
            .find(|p| p.metric() == "railgun.memoryusage")
            .unwrap();
        assert_eq!(p.value(), DataPointValue::Double(3.5));

        // no unit, rate or description for railgun stats
        assert!(ctx.metadata().is_empty());
    }

    #[test]
    fn convert_invalid() {
        let ctx = context();
        assert!(convert(&ctx, b"[1, 2]").is_err());
        assert!(convert(&ctx, b"{\"a\": ").is_err());
    }

    #[tokio::test]
    async fn collect() {
        let fetcher = Arc::new(FakeFetcher {
            body: r#"{"requests_served": 1200}"#,
        });
        let collector =
            RailgunCollector::new(config("http://127.0.0.1:24088"), context(), fetcher.clone())
                .unwrap();
        assert_eq!(collector.name(), "railgun");
        assert_eq!(collector.interval(), Duration::from_secs(15));
        let batch = collector.collect().await.unwrap();
        assert_eq!(batch.points.len(), 1);
        assert!(batch.faults.is_empty());

        let collector =
            RailgunCollector::new(config("http://127.0.0.1:1"), context(), fetcher).unwrap();
        let e = collector.collect().await.unwrap_err();
        assert!(matches!(e, CollectError::Fetch { .. }));
    }

    #[test]
    fn missing_listen_address() {
        let fetcher = Arc::new(FakeFetcher { body: "{}" });
        let config = Arc::new(RailgunCollectorConfig {
            config_file: Some(PathBuf::from("/nonexistent/railgun.conf")),
            ..Default::default()
        });
        assert!(RailgunCollector::new(config, context(), fetcher).is_err());
    }
}
