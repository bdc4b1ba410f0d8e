/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod error;
pub use error::{CollectError, EntityError};

pub mod collect;
pub mod config;
pub mod inventory;
pub mod util;
