//! Mixed-radix counter: a variable-base odometer over per-position radices.

use crate::error::{IndexError, IndexResult};

/// A counter whose digits each run over their own radix.
///
/// Digit 0 is the most significant; the place value of digit `i` is the
/// product of all radices strictly to its right. Starting from all-zero
/// digits, repeated [`increment`](Self::increment) visits every digit
/// combination exactly once, rightmost digit varying fastest.
///
/// Digits and radices are IEEE doubles. The same structure serves two
/// contracts: exact enumeration over small radices (combination fan-out),
/// and packing of several numeric field values into one scalar with a
/// large uniform radix. The packing contract is lossy: scalars are exact
/// only while they stay within the double's 53-bit integer range, beyond
/// which distinct digit vectors alias to the same scalar.
#[derive(Debug, Clone)]
pub struct MixedRadixCounter {
    radices: Vec<f64>,
    digits: Vec<f64>,
}

impl MixedRadixCounter {
    /// Creates a counter with all digits at zero.
    ///
    /// Every radix must be at least 1; this is a caller precondition,
    /// not a validated error.
    #[must_use]
    pub fn new(radices: Vec<f64>) -> Self {
        debug_assert!(radices.iter().all(|r| *r >= 1.0), "radix below 1");
        let digits = vec![0.0; radices.len()];
        Self { radices, digits }
    }

    /// Creates a counter whose radices all equal `radix`.
    ///
    /// This is the form used for packing several numeric field values
    /// into a single composite scalar.
    #[must_use]
    pub fn uniform(len: usize, radix: f64) -> Self {
        Self::new(vec![radix; len])
    }

    /// Returns the current digit vector.
    #[must_use]
    pub fn digits(&self) -> &[f64] {
        &self.digits
    }

    /// Returns the number of digit positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.radices.len()
    }

    /// Returns true if the counter has no digit positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.radices.is_empty()
    }

    /// Returns the positional value of the current digits.
    #[must_use]
    pub fn scalar(&self) -> f64 {
        self.radices
            .iter()
            .zip(&self.digits)
            .fold(0.0, |acc, (radix, digit)| acc * radix + digit)
    }

    /// Returns the scalar of the last valid combination: ∏radices − 1.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.radices.iter().product::<f64>() - 1.0
    }

    /// Assigns digits directly, without enumeration-order validation.
    ///
    /// Used for composite numeric-key packing, where the digits are
    /// pre-chosen field values rather than counter steps. Errors only
    /// when the digit count does not match the radix count.
    pub fn set_digits(&mut self, digits: &[f64]) -> IndexResult<&mut Self> {
        if digits.len() != self.radices.len() {
            return Err(IndexError::digit_count_mismatch(
                self.radices.len(),
                digits.len(),
            ));
        }
        self.digits.copy_from_slice(digits);
        Ok(self)
    }

    /// Advances the least significant digit by one, carrying left.
    ///
    /// Stepping past [`max_value`](Self::max_value) is undefined;
    /// callers must stop exactly at it.
    pub fn increment(&mut self) {
        for position in (0..self.digits.len()).rev() {
            self.digits[position] += 1.0;
            if self.digits[position] < self.radices[position] {
                return;
            }
            self.digits[position] = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PACKING_BASE: f64 = 4_294_967_296.0; // 2^32

    #[test]
    fn starts_at_zero() {
        let counter = MixedRadixCounter::new(vec![2.0, 3.0]);
        assert_eq!(counter.digits(), &[0.0, 0.0]);
        assert_eq!(counter.scalar(), 0.0);
    }

    #[test]
    fn max_value_is_product_minus_one() {
        let counter = MixedRadixCounter::new(vec![2.0, 3.0, 2.0]);
        assert_eq!(counter.max_value(), 11.0);
    }

    #[test]
    fn enumeration_visits_every_combination_once() {
        let mut counter = MixedRadixCounter::new(vec![2.0, 3.0, 2.0]);
        let mut seen = Vec::new();
        loop {
            // scalar stays consistent with the digit vector at every step
            assert_eq!(counter.scalar(), seen.len() as f64);
            seen.push(counter.digits().to_vec());
            if counter.scalar() >= counter.max_value() {
                break;
            }
            counter.increment();
        }
        assert_eq!(seen.len(), 12);
        seen.sort_by(|a, b| a.partial_cmp(b).unwrap());
        seen.dedup();
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn rightmost_digit_varies_fastest() {
        let mut counter = MixedRadixCounter::new(vec![2.0, 2.0]);
        counter.increment();
        assert_eq!(counter.digits(), &[0.0, 1.0]);
        counter.increment();
        assert_eq!(counter.digits(), &[1.0, 0.0]);
        counter.increment();
        assert_eq!(counter.digits(), &[1.0, 1.0]);
    }

    #[test]
    fn packs_digits_into_uniform_base() {
        let mut counter = MixedRadixCounter::uniform(2, PACKING_BASE);
        let scalar = counter.set_digits(&[1.0, 2.0]).unwrap().scalar();
        assert_eq!(scalar, PACKING_BASE + 2.0);
    }

    #[test]
    fn leftmost_digit_is_most_significant() {
        let mut counter = MixedRadixCounter::uniform(3, 10.0);
        let scalar = counter.set_digits(&[1.0, 2.0, 3.0]).unwrap().scalar();
        assert_eq!(scalar, 123.0);
    }

    #[test]
    fn set_digits_rejects_wrong_length() {
        let mut counter = MixedRadixCounter::uniform(2, 10.0);
        let err = counter.set_digits(&[1.0]).unwrap_err();
        assert!(matches!(
            err,
            IndexError::DigitCountMismatch {
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn packing_aliases_beyond_exact_integer_range() {
        // Three 32-bit fields exceed the 53-bit mantissa; distinct digit
        // vectors collapse to the same scalar. Documented, not repaired.
        let mut counter = MixedRadixCounter::uniform(3, PACKING_BASE);
        let a = counter.set_digits(&[1.0, 0.0, 0.0]).unwrap().scalar();
        let b = counter.set_digits(&[1.0, 0.0, 1.0]).unwrap().scalar();
        assert_eq!(a, b);
    }
}
