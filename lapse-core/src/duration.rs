use std::time::Duration;

use crate::resolution::Resolution;

/// A signed tick count paired with the resolution those ticks are
/// expressed in.
///
/// Conversions between resolutions go through exact i128 nanosecond
/// arithmetic and truncate toward zero, matching integer division. Every
/// `Resolution` period is a whole number of nanoseconds, so widening
/// conversions are lossless and narrowing ones lose only the sub-tick
/// remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickDuration {
    count: i64,
    resolution: Resolution,
}

impl TickDuration {
    #[must_use]
    pub const fn new(count: i64, resolution: Resolution) -> Self {
        Self { count, resolution }
    }

    #[must_use]
    pub const fn zero(resolution: Resolution) -> Self {
        Self {
            count: 0,
            resolution,
        }
    }

    /// Truncates `nanos` to whole ticks of `resolution`.
    #[must_use]
    pub const fn from_nanos(nanos: i128, resolution: Resolution) -> Self {
        Self {
            count: (nanos / resolution.nanos_per_tick()) as i64,
            resolution,
        }
    }

    /// Truncates a `std::time::Duration` to whole ticks of `resolution`.
    #[must_use]
    pub fn from_std(d: Duration, resolution: Resolution) -> Self {
        Self::from_nanos(d.as_nanos() as i128, resolution)
    }

    #[must_use]
    pub const fn count(self) -> i64 {
        self.count
    }

    #[must_use]
    pub const fn resolution(self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub const fn as_nanos(self) -> i128 {
        self.count as i128 * self.resolution.nanos_per_tick()
    }

    /// Re-expresses this duration in `target` ticks, truncating toward
    /// zero when `target` is coarser than the current resolution.
    #[must_use]
    pub const fn to_resolution(self, target: Resolution) -> Self {
        Self::from_nanos(self.as_nanos(), target)
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.count == 0
    }
}
