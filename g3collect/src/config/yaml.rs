/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, anyhow};
use humanize_rs::ParseError;
use yaml_rust::{Yaml, yaml};

use g3_datapoint::{TAG_KEY_HOST, TagSet, chars_allowed_in_opentsdb};

pub(crate) fn normalize_key(raw: &str) -> String {
    raw.to_lowercase().replace('-', "_")
}

pub(crate) fn foreach_kv<F>(table: &yaml::Hash, mut f: F) -> anyhow::Result<()>
where
    F: FnMut(&str, &Yaml) -> anyhow::Result<()>,
{
    for (k, v) in table.iter() {
        if let Yaml::String(key) = k {
            f(key, v).context(format!("failed to parse value of key {key}"))?;
        } else {
            return Err(anyhow!("key in hash should be string"));
        }
    }
    Ok(())
}

pub(crate) fn get_required_str<'a>(map: &'a yaml::Hash, k: &str) -> anyhow::Result<&'a str> {
    let key = Yaml::String(k.to_owned());
    match map.get(&key) {
        Some(Yaml::String(s)) => Ok(s),
        Some(_) => Err(anyhow!("the value for required key {k} should be string")),
        None => Err(anyhow!("no required key {k} found in this map")),
    }
}

pub(crate) fn as_string(v: &Yaml) -> anyhow::Result<String> {
    match v {
        Yaml::String(s) => Ok(s.to_string()),
        Yaml::Integer(i) => Ok(i.to_string()),
        Yaml::Real(s) => Ok(s.to_string()),
        _ => Err(anyhow!(
            "yaml value type for string should be 'string' / 'integer' / 'real'"
        )),
    }
}

pub(crate) fn as_duration(v: &Yaml) -> anyhow::Result<Duration> {
    match v {
        Yaml::String(value) => match humanize_rs::duration::parse(value) {
            Ok(v) => Ok(v),
            Err(ParseError::MissingUnit) => {
                let u = u64::from_str(value).map_err(|_| anyhow!("invalid duration string"))?;
                Ok(Duration::from_secs(u))
            }
            Err(e) => Err(anyhow!("invalid humanize duration string: {e}")),
        },
        Yaml::Integer(value) => {
            let u = u64::try_from(*value).map_err(|_| anyhow!("negative duration value"))?;
            Ok(Duration::from_secs(u))
        }
        _ => Err(anyhow!(
            "yaml value type for humanize duration should be 'string' or 'integer'"
        )),
    }
}

/// Parse a map of static tags. Both names and values should be valid in
/// OpenTSDB, and the host tag, if set, should not be empty.
pub(crate) fn as_tag_set(v: &Yaml) -> anyhow::Result<TagSet> {
    let Yaml::Hash(map) = v else {
        return Err(anyhow!("the yaml value should be a 'map'"));
    };
    let mut tags = TagSet::new();
    for (k, v) in map.iter() {
        let name = as_string(k).context(format!("invalid tag name {k:?}"))?;
        let value = as_string(v).context(format!("invalid value for tag {name}"))?;
        chars_allowed_in_opentsdb(&name).context(format!("invalid tag name {name}"))?;
        chars_allowed_in_opentsdb(&value).context(format!("invalid value for tag {name}"))?;
        tags.insert(name, value);
    }
    tags.validate().context("invalid tag set")?;
    if tags.get(TAG_KEY_HOST).is_some_and(|h| h.is_empty()) {
        return Err(anyhow!("empty value for tag {TAG_KEY_HOST}"));
    }
    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use yaml_rust::YamlLoader;

    #[test]
    fn key() {
        assert_eq!(normalize_key("Global-Tags"), "global_tags");
        assert_eq!(normalize_key("config_file"), "config_file");
    }

    #[test]
    fn duration() {
        let v = Yaml::String("1m30s".to_string());
        assert_eq!(as_duration(&v).unwrap(), Duration::from_secs(90));

        let v = Yaml::String("20".to_string());
        assert_eq!(as_duration(&v).unwrap(), Duration::from_secs(20));

        let v = Yaml::Integer(15);
        assert_eq!(as_duration(&v).unwrap(), Duration::from_secs(15));

        let v = Yaml::Integer(-1);
        assert!(as_duration(&v).is_err());

        let v = Yaml::String("15x".to_string());
        assert!(as_duration(&v).is_err());

        let v = Yaml::Boolean(true);
        assert!(as_duration(&v).is_err());
    }

    #[test]
    fn tag_set() {
        let docs = YamlLoader::load_from_str("dc: sh\nrack: 12\n").unwrap();
        let tags = as_tag_set(&docs[0]).unwrap();
        assert_eq!(tags.get("dc"), Some("sh"));
        assert_eq!(tags.get("rack"), Some("12"));

        let docs = YamlLoader::load_from_str("dc: a b\n").unwrap();
        assert!(as_tag_set(&docs[0]).is_err());

        let docs = YamlLoader::load_from_str("- dc\n").unwrap();
        assert!(as_tag_set(&docs[0]).is_err());

        let docs = YamlLoader::load_from_str("'': x\n").unwrap();
        assert!(as_tag_set(&docs[0]).is_err());

        let docs = YamlLoader::load_from_str("host: ''\n").unwrap();
        assert!(as_tag_set(&docs[0]).is_err());

        let docs = YamlLoader::load_from_str("dc: ''\n").unwrap();
        assert_eq!(as_tag_set(&docs[0]).unwrap().get("dc"), Some(""));
    }
}
