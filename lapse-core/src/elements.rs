use strum::IntoEnumIterator;

use crate::duration::TickDuration;
use crate::resolution::Resolution;

/// A duration decomposed into per-unit remainders: each field holds what is
/// left for that unit after all coarser units have been subtracted.
///
/// For non-negative inputs every field is non-negative and bounded by its
/// carry into the next coarser unit (hours in `[0, 24)`, minutes and
/// seconds in `[0, 60)`, the sub-second fields in `[0, 1000)`); days are
/// unbounded. Negative inputs decompose with truncate-toward-zero division,
/// so each field carries the sign of the value remaining at its step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeElements {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub millis: i64,
    pub micros: i64,
    pub nanos: i64,
}

impl TimeElements {
    /// Peels `duration` into unit counts, coarse to fine: divide the
    /// remaining nanoseconds by the unit size (truncating), keep the
    /// quotient, carry the remainder to the next unit.
    #[must_use]
    pub fn split(duration: TickDuration) -> Self {
        let mut remaining = duration.as_nanos();
        let mut out = Self::default();
        for unit in Resolution::iter() {
            let per_tick = unit.nanos_per_tick();
            let count = remaining / per_tick;
            remaining -= count * per_tick;
            out.set(unit, count as i64);
        }
        out
    }

    /// Reassembles the elements into total nanoseconds. For any output of
    /// [`split`](Self::split) this equals the input truncated to
    /// nanosecond resolution.
    #[must_use]
    pub fn to_nanos(&self) -> i128 {
        Resolution::iter()
            .map(|unit| self.count(unit) as i128 * unit.nanos_per_tick())
            .sum()
    }

    #[must_use]
    pub fn count(&self, unit: Resolution) -> i64 {
        match unit {
            Resolution::Days => self.days,
            Resolution::Hours => self.hours,
            Resolution::Minutes => self.minutes,
            Resolution::Seconds => self.seconds,
            Resolution::Millis => self.millis,
            Resolution::Micros => self.micros,
            Resolution::Nanos => self.nanos,
        }
    }

    fn set(&mut self, unit: Resolution, count: i64) {
        match unit {
            Resolution::Days => self.days = count,
            Resolution::Hours => self.hours = count,
            Resolution::Minutes => self.minutes = count,
            Resolution::Seconds => self.seconds = count,
            Resolution::Millis => self.millis = count,
            Resolution::Micros => self.micros = count,
            Resolution::Nanos => self.nanos = count,
        }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        Resolution::iter().all(|unit| self.count(unit) == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_an_hour_minute_second_duration() {
        let d = TickDuration::new(3_661, Resolution::Seconds);
        let e = TimeElements::split(d);
        assert_eq!(
            e,
            TimeElements {
                hours: 1,
                minutes: 1,
                seconds: 1,
                ..TimeElements::default()
            }
        );
    }

    #[test]
    fn splits_a_full_nanosecond_duration() {
        let d = TickDuration::new(90_061_500_250_125, Resolution::Nanos);
        let e = TimeElements::split(d);
        assert_eq!(
            e,
            TimeElements {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1,
                millis: 500,
                micros: 250,
                nanos: 125,
            }
        );
    }

    #[test]
    fn fields_stay_within_their_carry_bounds() {
        // An awkward prime-ish number of nanoseconds.
        let d = TickDuration::new(987_654_321_987_654_321, Resolution::Nanos);
        let e = TimeElements::split(d);
        assert!((0..24).contains(&e.hours));
        assert!((0..60).contains(&e.minutes));
        assert!((0..60).contains(&e.seconds));
        assert!((0..1000).contains(&e.millis));
        assert!((0..1000).contains(&e.micros));
        assert!((0..1000).contains(&e.nanos));
        assert!(e.days >= 0);
    }

    #[test]
    fn reassembly_round_trips_to_nanoseconds() {
        for count in [0i64, 1, 999, 1_000_000, 90_061_500_250_125, i64::MAX / 2] {
            let d = TickDuration::new(count, Resolution::Nanos);
            assert_eq!(TimeElements::split(d).to_nanos(), d.as_nanos());
        }

        let coarse = TickDuration::new(90_000, Resolution::Millis);
        assert_eq!(TimeElements::split(coarse).to_nanos(), coarse.as_nanos());
    }

    #[test]
    fn zero_duration_yields_all_zero_elements() {
        let e = TimeElements::split(TickDuration::zero(Resolution::Micros));
        assert!(e.is_zero());
    }

    #[test]
    fn negative_durations_keep_truncating_division_signs() {
        // -90061.5s == -(1d 1h 1m 1s 500ms): every non-zero field goes
        // negative because the remaining value is negative at each step.
        let d = TickDuration::new(-90_061_500, Resolution::Millis);
        let e = TimeElements::split(d);
        assert_eq!(
            e,
            TimeElements {
                days: -1,
                hours: -1,
                minutes: -1,
                seconds: -1,
                millis: -500,
                ..TimeElements::default()
            }
        );
        assert_eq!(e.to_nanos(), d.as_nanos());
    }
}
