/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use thiserror::Error;

/// A fault limited to a single entity. The rest of the batch is still
/// collected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EntityError {
    #[error("{kind} {id}: empty name")]
    EmptyName { kind: &'static str, id: String },
    #[error("{kind} {entity}: bad integer for {property}: {value}")]
    BadInteger {
        kind: &'static str,
        entity: String,
        property: String,
        value: String,
    },
}

/// A fault that fails the whole collection pass.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("failed to query {kind}: {source}")]
    Query {
        kind: &'static str,
        #[source]
        source: anyhow::Error,
    },
    #[error("failed to decode {property} of {entity}: {source}")]
    SubDocument {
        entity: String,
        property: String,
        #[source]
        source: quick_xml::DeError,
    },
    #[error("failed to fetch stats from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("invalid stats body: {0}")]
    StatsBody(#[from] serde_json::Error),
}
