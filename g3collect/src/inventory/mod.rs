/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use async_trait::async_trait;

mod record;
pub use record::{EntityRecord, PROPERTY_NAME, Property, PropertyValue};

mod extract;
pub use extract::{Field, decode_list, entity_name, fields};

mod correlate;
pub use correlate::NameIndex;

/// The remote inventory API.
///
/// Connection and authentication are owned by the implementation. Any error
/// returned here fails the whole collection pass.
#[async_trait]
pub trait InventoryClient: Send + Sync {
    /// List all entities of `kind`, with the given properties.
    async fn query(&self, kind: &str, properties: &[&str]) -> anyhow::Result<Vec<EntityRecord>>;
}
