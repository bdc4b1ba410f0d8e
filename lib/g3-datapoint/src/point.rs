/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;

use serde_json::{Map, Number, Value};

use crate::{DataPointValue, TagSet};

/// One timestamped and tagged observation.
///
/// Only [`CollectContext`](crate::CollectContext) is able to build one, and
/// there is no way to change it afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    metric: String,
    timestamp: i64,
    value: DataPointValue,
    tags: TagSet,
}

pub type MultiDataPoint = Vec<DataPoint>;

impl DataPoint {
    pub(crate) fn new(metric: &str, timestamp: i64, value: DataPointValue, tags: TagSet) -> Self {
        DataPoint {
            metric: metric.to_string(),
            timestamp,
            value,
            tags,
        }
    }

    #[inline]
    pub fn metric(&self) -> &str {
        &self.metric
    }

    #[inline]
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    #[inline]
    pub fn value(&self) -> DataPointValue {
        self.value
    }

    #[inline]
    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    // https://opentsdb.net/docs/build/html/api_http/put.html
    pub fn to_json(&self) -> Value {
        let mut map = Map::with_capacity(4);
        map.insert("metric".to_string(), Value::String(self.metric.clone()));
        map.insert(
            "timestamp".to_string(),
            Value::Number(Number::from(self.timestamp)),
        );
        map.insert("value".to_string(), self.value.as_json_value());
        let mut tag_map = Map::with_capacity(self.tags.len());
        for (name, value) in self.tags.iter() {
            tag_map.insert(name.to_string(), Value::String(value.to_string()));
        }
        map.insert("tags".to_string(), Value::Object(tag_map));
        Value::Object(map)
    }
}

/// Telnet style `put` line body, without the leading command.
impl fmt::Display for DataPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.metric, self.timestamp, self.value)?;
        if !self.tags.is_empty() {
            write!(f, " {}", self.tags.display_opentsdb())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json() {
        let dp = DataPoint::new(
            "os.mem.free",
            1700000000,
            DataPointValue::Signed(1024),
            TagSet::from([("host", "esx-01")]),
        );
        assert_eq!(
            dp.to_json().to_string(),
            r#"{"metric":"os.mem.free","tags":{"host":"esx-01"},"timestamp":1700000000,"value":1024}"#
        );
    }

    #[test]
    fn put_line() {
        let dp = DataPoint::new(
            "vsphere.cpu",
            1700000000,
            DataPointValue::Signed(300),
            TagSet::from([("host", "esx-01"), ("type", "idle")]),
        );
        assert_eq!(
            dp.to_string(),
            "vsphere.cpu 1700000000 300 host=esx-01 type=idle"
        );

        let dp = DataPoint::new(
            "railgun.requests",
            1700000000,
            DataPointValue::Double(1.5),
            TagSet::new(),
        );
        assert_eq!(dp.to_string(), "railgun.requests 1700000000 1.5");
    }
}
