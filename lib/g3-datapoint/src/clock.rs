/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use chrono::Utc;
use log::debug;
use tokio::time::{Instant, MissedTickBehavior};

const NANOS_PER_SEC: u32 = 1_000_000_000;

/// Cached unix time in seconds.
///
/// Building a datapoint reads the cached value instead of the system clock.
/// A running ticker refreshes it at every wall clock second boundary, and the
/// stored value never goes backwards.
pub struct UnixClock {
    now: AtomicI64,
}

impl Default for UnixClock {
    fn default() -> Self {
        UnixClock::new()
    }
}

impl UnixClock {
    /// A clock holding the current time, which is not refreshed until
    /// [`UnixClock::spawn`] is used instead.
    pub fn new() -> Self {
        UnixClock::with_time(Utc::now().timestamp())
    }

    pub fn with_time(ts: i64) -> Self {
        UnixClock {
            now: AtomicI64::new(ts),
        }
    }

    /// Create a clock and spawn its ticker on the current tokio runtime.
    ///
    /// The ticker quits once all the returned handles are dropped.
    pub fn spawn() -> Arc<UnixClock> {
        let clock = Arc::new(UnixClock::new());
        let weak = Arc::downgrade(&clock);
        tokio::spawn(run_ticker(weak));
        clock
    }

    #[inline]
    pub fn now(&self) -> i64 {
        self.now.load(Ordering::Acquire)
    }

    pub(crate) fn update(&self, ts: i64) {
        self.now.fetch_max(ts, Ordering::AcqRel);
    }
}

async fn run_ticker(clock: Weak<UnixClock>) {
    // align the ticks to the start of each wall clock second
    let sub_nanos = Utc::now().timestamp_subsec_nanos().min(NANOS_PER_SEC - 1);
    let first_tick = Instant::now() + Duration::from_nanos(u64::from(NANOS_PER_SEC - sub_nanos));
    let mut interval = tokio::time::interval_at(first_tick, Duration::from_secs(1));
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        interval.tick().await;
        let Some(clock) = clock.upgrade() else {
            break;
        };
        clock.update(Utc::now().timestamp());
    }
    debug!("unix clock ticker quit");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_backwards() {
        let clock = UnixClock::with_time(100);
        clock.update(99);
        assert_eq!(clock.now(), 100);
        clock.update(101);
        assert_eq!(clock.now(), 101);
    }

    #[tokio::test]
    async fn ticking() {
        let clock = UnixClock::spawn();
        let t1 = clock.now();
        tokio::time::sleep(Duration::from_millis(2100)).await;
        let t2 = clock.now();
        assert!(t2 >= t1 + 2);
        assert!(t2 <= Utc::now().timestamp());
    }
}
