/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

/// A (total, used) pair for disk space or memory.
///
/// Only built if both the total and the used (or free) value are positive. A
/// zero value usually means the source did not report it, and a derived free
/// value equal to total would then claim a known empty state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capacity {
    total: i64,
    used: i64,
}

impl Capacity {
    pub fn from_used(total: i64, used: i64) -> Option<Self> {
        if total > 0 && used > 0 {
            Some(Capacity { total, used })
        } else {
            None
        }
    }

    pub fn from_free(total: i64, free: i64) -> Option<Self> {
        if total > 0 && free > 0 {
            Some(Capacity {
                total,
                used: total - free,
            })
        } else {
            None
        }
    }

    #[inline]
    pub fn total(&self) -> i64 {
        self.total
    }

    #[inline]
    pub fn used(&self) -> i64 {
        self.used
    }

    #[inline]
    pub fn free(&self) -> i64 {
        self.total - self.used
    }

    pub fn percent_free(&self) -> f64 {
        self.free() as f64 / self.total as f64 * 100.0
    }
}

/// CPU capacity in MHz.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CpuCapacity {
    total: i64,
    used: i64,
}

impl CpuCapacity {
    pub fn from_used(total: i64, used: i64) -> Option<Self> {
        if total > 0 && used > 0 {
            Some(CpuCapacity { total, used })
        } else {
            None
        }
    }

    /// The total capacity is the per core frequency multiplied by the number
    /// of cores.
    pub fn from_cores(mhz: i64, cores: i64, used: i64) -> Option<Self> {
        if mhz > 0 && cores > 0 {
            CpuCapacity::from_used(mhz.saturating_mul(cores), used)
        } else {
            None
        }
    }

    #[inline]
    pub fn total(&self) -> i64 {
        self.total
    }

    #[inline]
    pub fn idle(&self) -> i64 {
        self.total - self.used
    }

    pub fn percent_used(&self) -> f64 {
        self.used as f64 / self.total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gated() {
        assert!(Capacity::from_used(100, 0).is_none());
        assert!(Capacity::from_used(0, 40).is_none());
        assert!(Capacity::from_used(-1, 40).is_none());
        assert!(Capacity::from_free(100, 0).is_none());
        assert!(CpuCapacity::from_used(100, 0).is_none());
        assert!(CpuCapacity::from_cores(0, 4, 10).is_none());
        assert!(CpuCapacity::from_cores(2000, 0, 10).is_none());
    }

    #[test]
    fn from_used() {
        let c = Capacity::from_used(100, 40).unwrap();
        assert_eq!(c.free(), 60);
        assert_eq!(c.percent_free(), 60.0);
    }

    #[test]
    fn from_free() {
        let c = Capacity::from_free(1000, 400).unwrap();
        assert_eq!(c.used(), 600);
        assert_eq!(c.free(), 400);
        assert_eq!(c.percent_free(), 40.0);
    }

    #[test]
    fn cpu() {
        let c = CpuCapacity::from_cores(2000, 4, 2000).unwrap();
        assert_eq!(c.total(), 8000);
        assert_eq!(c.idle(), 6000);
        assert_eq!(c.percent_used(), 25.0);
    }
}
