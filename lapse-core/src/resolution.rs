use crate::ratio::Ratio;

/// The unit hierarchy used for decomposition and rendering, declared
/// coarse-to-fine. `strum::EnumIter` preserves that order, and the strum
/// serializations double as the printed unit labels.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Resolution {
    #[strum(serialize = "d")]
    Days,
    #[strum(serialize = "h")]
    Hours,
    #[strum(serialize = "m")]
    Minutes,
    #[strum(serialize = "s")]
    Seconds,
    #[strum(serialize = "ms")]
    Millis,
    #[strum(serialize = "us")]
    Micros,
    #[strum(serialize = "ns")]
    Nanos,
}

const NS_PER_US: i128 = 1_000;
const NS_PER_MS: i128 = 1_000_000;
const NS_PER_S: i128 = 1_000_000_000;
const NS_PER_MIN: i128 = 60 * NS_PER_S;
const NS_PER_HOUR: i128 = 60 * NS_PER_MIN;
const NS_PER_DAY: i128 = 24 * NS_PER_HOUR;

impl Resolution {
    /// Seconds per tick as a rational, e.g. 86400/1 for days, 1/1000 for
    /// milliseconds.
    #[must_use]
    pub const fn period(self) -> Ratio {
        match self {
            Self::Days => Ratio::from_parts(86_400, 1),
            Self::Hours => Ratio::from_parts(3_600, 1),
            Self::Minutes => Ratio::from_parts(60, 1),
            Self::Seconds => Ratio::from_parts(1, 1),
            Self::Millis => Ratio::from_parts(1, 1_000),
            Self::Micros => Ratio::from_parts(1, 1_000_000),
            Self::Nanos => Ratio::from_parts(1, 1_000_000_000),
        }
    }

    /// Exact size of one tick in nanoseconds. Every unit in the hierarchy
    /// is a whole number of nanoseconds, so conversions through this value
    /// are lossless.
    #[must_use]
    pub const fn nanos_per_tick(self) -> i128 {
        match self {
            Self::Days => NS_PER_DAY,
            Self::Hours => NS_PER_HOUR,
            Self::Minutes => NS_PER_MIN,
            Self::Seconds => NS_PER_S,
            Self::Millis => NS_PER_MS,
            Self::Micros => NS_PER_US,
            Self::Nanos => 1,
        }
    }

    /// Zero-pad width when rendered in a non-leading position. Days are
    /// unbounded and never padded.
    #[must_use]
    pub const fn pad_width(self) -> Option<usize> {
        match self {
            Self::Days => None,
            Self::Hours | Self::Minutes | Self::Seconds => Some(2),
            Self::Millis | Self::Micros | Self::Nanos => Some(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::ratio::ratio_less;

    #[test]
    fn iteration_is_strictly_coarse_to_fine() {
        let units: Vec<Resolution> = Resolution::iter().collect();
        assert_eq!(units.len(), 7);
        assert_eq!(units[0], Resolution::Days);
        assert_eq!(units[6], Resolution::Nanos);

        for pair in units.windows(2) {
            assert!(
                ratio_less(pair[1].period(), pair[0].period()),
                "{} should be finer than {}",
                pair[1],
                pair[0]
            );
        }
    }

    #[test]
    fn labels_round_trip_through_display_and_from_str() {
        for unit in Resolution::iter() {
            let label = unit.to_string();
            assert_eq!(Resolution::from_str(&label), Ok(unit));
        }
        assert_eq!(Resolution::from_str("ms"), Ok(Resolution::Millis));
        assert!(Resolution::from_str("fortnights").is_err());
    }

    #[test]
    fn nanos_per_tick_matches_the_period() {
        for unit in Resolution::iter() {
            let p = unit.period();
            // seconds-per-tick * 1e9 == nanos-per-tick, exactly.
            assert_eq!(p.num() * 1_000_000_000 / p.den(), unit.nanos_per_tick());
        }
    }
}
