//! A bounded numeric setting that remembers whether the user chose it.

/// A numeric option constrained to `[min, max]` with explicit-set tracking.
///
/// While unset, the wrapped value is `T::default()` (zero for every numeric type),
/// which is the value the native encoder interprets as "choose for me".
/// Once [`set`](Self::set) has been called the value always lies within the bounds.
///
/// # Examples
///
/// ```
/// use ktx_codec_options::ClampedOption;
///
/// let mut quality = ClampedOption::new(1u32, 255);
/// assert!(!quality.is_set());
///
/// quality.set(300);
/// assert_eq!(quality.get(), 255);
/// assert!(quality.is_set());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampedOption<T> {
    value: T,
    min: T,
    max: T,
    set: bool,
}

impl<T> ClampedOption<T>
where
    T: PartialOrd + Copy + Default,
{
    /// Creates an unset option with the given inclusive bounds.
    ///
    /// `min` must not be greater than `max`.
    pub fn new(min: T, max: T) -> Self {
        debug_assert!(min <= max, "ClampedOption bounds are inverted");
        Self {
            value: T::default(),
            min,
            max,
            set: false,
        }
    }

    /// Saturates `value` into `[min, max]`, stores it and marks the option as set.
    ///
    /// Values that do not compare (e.g. `NaN`) saturate to `min`.
    /// Returns the value that was stored.
    pub fn set(&mut self, value: T) -> T {
        self.value = clamp(value, self.min, self.max);
        self.set = true;
        self.value
    }

    /// Returns `true` if [`set`](Self::set) was called since construction or the last [`clear`](Self::clear).
    #[inline]
    pub fn is_set(&self) -> bool {
        self.set
    }

    /// Resets the option to the unset state.
    pub fn clear(&mut self) {
        self.value = T::default();
        self.set = false;
    }

    /// The current value, whether or not it was explicitly set.
    #[inline]
    pub fn get(&self) -> T {
        self.value
    }

    /// The current value if it was explicitly set.
    #[inline]
    pub fn get_if_set(&self) -> Option<T> {
        self.set.then_some(self.value)
    }

    /// Lower bound.
    #[inline]
    pub fn min(&self) -> T {
        self.min
    }

    /// Upper bound.
    #[inline]
    pub fn max(&self) -> T {
        self.max
    }
}

// `Ord::clamp` is unavailable for floats and `f32::clamp` passes NaN through.
// The negated comparison sends unordered values to `min`.
#[inline]
#[allow(clippy::neg_cmp_op_on_partial_ord)]
fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if !(value >= min) {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(128, 128)]
    #[case(255, 255)]
    #[case(256, 255)]
    #[case(u32::MAX, 255)]
    fn set_saturates_integers_into_range(#[case] input: u32, #[case] expected: u32) {
        let mut option = ClampedOption::new(1u32, 255);
        assert_eq!(option.set(input), expected);
        assert_eq!(option.get(), expected);
    }

    #[rstest]
    #[case(0.0, 0.001)]
    #[case(-5.0, 0.001)]
    #[case(1.0, 1.0)]
    #[case(50.0, 50.0)]
    #[case(1000.0, 50.0)]
    #[case(f32::INFINITY, 50.0)]
    #[case(f32::NEG_INFINITY, 0.001)]
    fn set_saturates_floats_into_range(#[case] input: f32, #[case] expected: f32) {
        let mut option = ClampedOption::new(0.001f32, 50.0);
        assert_eq!(option.set(input), expected);
    }

    #[test]
    fn nan_saturates_to_min() {
        let mut option = ClampedOption::new(1.0f32, 300.0);
        assert_eq!(option.set(f32::NAN), 1.0);
    }

    #[test]
    fn unset_until_first_assignment() {
        let mut option = ClampedOption::new(1u32, 16128);
        assert!(!option.is_set());
        assert_eq!(option.get(), 0);
        assert_eq!(option.get_if_set(), None);

        // Assigning the value it already holds still counts as an explicit choice.
        option.set(0);
        assert!(option.is_set());
        assert_eq!(option.get_if_set(), Some(1));
    }

    #[test]
    fn clear_returns_to_unset() {
        let mut option = ClampedOption::new(256u32, 65536);
        option.set(4096);
        option.clear();

        assert!(!option.is_set());
        assert_eq!(option.get(), 0);
        assert_eq!(option.min(), 256);
        assert_eq!(option.max(), 65536);
    }

    #[test]
    fn reads_do_not_change_state() {
        let mut option = ClampedOption::new(0u32, 4);
        option.set(3);
        for _ in 0..3 {
            assert!(option.is_set());
            assert_eq!(option.get(), 3);
        }
    }
}
