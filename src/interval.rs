//! The closed numeric range that both codecs bisect.

use num_traits::Float;

/// An immutable `[min, max]` range.
///
/// Bisection never mutates an interval; it returns the selected half as a new value, so
/// `min <= max` holds for every interval derived from a well-formed one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<N: Float = f64> {
    min: N,
    max: N,
}

impl<N: Float> Interval<N> {
    /// Create a new interval. `min` must not be greater than `max`.
    pub fn new(min: N, max: N) -> Self {
        debug_assert!(min <= max, "interval bounds out of order");
        Self { min, max }
    }

    /// The lower bound.
    #[inline]
    pub fn min(&self) -> N {
        self.min
    }

    /// The upper bound.
    #[inline]
    pub fn max(&self) -> N {
        self.max
    }

    /// The midpoint, `(min + max) / 2`.
    #[inline]
    pub fn mid(&self) -> N {
        (self.min + self.max) / (N::one() + N::one())
    }

    /// `max - min`.
    #[inline]
    pub fn width(&self) -> N {
        self.max - self.min
    }

    /// The lower half `[min, mid]`.
    #[inline]
    pub fn lower(&self) -> Self {
        Self::new(self.min, self.mid())
    }

    /// The upper half `[mid, max]`.
    #[inline]
    pub fn upper(&self) -> Self {
        Self::new(self.mid(), self.max)
    }

    /// Select a half by bit: `true` is the upper half.
    #[inline]
    pub fn half(&self, upper: bool) -> Self {
        if upper {
            self.upper()
        } else {
            self.lower()
        }
    }

    /// One bisection step towards `value`.
    ///
    /// Returns `true` together with the upper half when `value` lies strictly above the
    /// midpoint. A value exactly on the midpoint selects the lower half.
    #[inline]
    pub fn bisect(&self, value: N) -> (bool, Self) {
        let upper = value > self.mid();
        (upper, self.half(upper))
    }

    /// Whether `value` lies within the closed range.
    #[inline]
    pub fn contains(&self, value: N) -> bool {
        value >= self.min && value <= self.max
    }
}
