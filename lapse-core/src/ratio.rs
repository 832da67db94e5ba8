/// A positive rational number of seconds per tick.
///
/// Comparisons use the cross-multiplication rule
/// `a.num * b.den < b.num * a.den`, so they never divide and never touch
/// floating point. All of them are `const fn` and usable on unit constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ratio {
    num: i128,
    den: i128,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RatioError {
    #[error("tick period numerator must be positive (got {0})")]
    NonPositiveNumerator(i128),

    #[error("tick period denominator must be positive (got {0})")]
    NonPositiveDenominator(i128),
}

impl Ratio {
    pub const fn new(num: i128, den: i128) -> Result<Self, RatioError> {
        if num <= 0 {
            return Err(RatioError::NonPositiveNumerator(num));
        }
        if den <= 0 {
            return Err(RatioError::NonPositiveDenominator(den));
        }
        Ok(Self { num, den })
    }

    // For the fixed unit table, where both components are known positive.
    pub(crate) const fn from_parts(num: i128, den: i128) -> Self {
        Self { num, den }
    }

    #[must_use]
    pub const fn num(self) -> i128 {
        self.num
    }

    #[must_use]
    pub const fn den(self) -> i128 {
        self.den
    }
}

#[must_use]
pub const fn ratio_less(a: Ratio, b: Ratio) -> bool {
    a.num * b.den < b.num * a.den
}

#[must_use]
pub const fn ratio_less_equal(a: Ratio, b: Ratio) -> bool {
    !ratio_less(b, a)
}

#[must_use]
pub const fn ratio_greater(a: Ratio, b: Ratio) -> bool {
    ratio_less(b, a)
}

#[must_use]
pub const fn ratio_greater_equal(a: Ratio, b: Ratio) -> bool {
    !ratio_less(a, b)
}

#[must_use]
pub const fn ratio_equal(a: Ratio, b: Ratio) -> bool {
    !ratio_less(a, b) && !ratio_less(b, a)
}

#[must_use]
pub const fn ratio_not_equal(a: Ratio, b: Ratio) -> bool {
    !ratio_equal(a, b)
}
