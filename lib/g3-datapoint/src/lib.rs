/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

pub mod catalog;
pub mod util;

mod tag;
pub use tag::{DisplayTagSet, ParseError, TAG_KEY_HOST, TagSet, chars_allowed_in_opentsdb, clean};

mod value;
pub use value::DataPointValue;

mod point;
pub use point::{DataPoint, MultiDataPoint};

mod metadata;
pub use metadata::{MetaKey, MetaName, MetaValue, MetadataRegistry, MetricMeta, RateType, Unit};

mod clock;
pub use clock::UnixClock;

mod context;
pub use context::CollectContext;

mod derive;
pub use derive::{Capacity, CpuCapacity};
