use std::fmt::Write as _;

use strum::IntoEnumIterator;

use crate::elements::TimeElements;
use crate::ratio::ratio_less_equal;
use crate::resolution::Resolution;

/// Renders decomposed elements as `1d.01h.01m.01s.500ms.250us.125ns.`,
/// walking the units coarse to fine.
///
/// A unit is a candidate only if it is no finer than `origin`, the
/// resolution the duration was expressed in. The first non-zero count
/// (candidate or not) activates printing; candidates before activation are
/// suppressed, candidates after it are printed even when zero so the
/// string stays contiguous. Days print unpadded, hours/minutes/seconds at
/// width 2, sub-second units at width 3. An all-zero input renders as the
/// empty string.
#[must_use]
pub fn render(elements: &TimeElements, origin: Resolution) -> String {
    let origin_period = origin.period();
    let mut out = String::new();
    let mut active = false;

    for unit in Resolution::iter() {
        let count = elements.count(unit);
        if count != 0 {
            active = true;
        }
        if !active || !ratio_less_equal(origin_period, unit.period()) {
            continue;
        }
        match unit.pad_width() {
            None => {
                let _ = write!(out, "{count}{unit}.");
            }
            Some(width) => {
                let _ = write!(out, "{count:0width$}{unit}.");
            }
        }
    }

    out
}
