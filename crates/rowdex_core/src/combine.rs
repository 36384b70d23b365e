//! Combination generator: cross products over per-field candidate lists.

use crate::counter::MixedRadixCounter;
use crate::error::{IndexError, IndexResult};

/// One ordered candidate list per field, enumerable as a cross product.
///
/// Built on [`MixedRadixCounter`]: the per-field cardinalities become the
/// counter's radices, and each digit vector selects one candidate per
/// field. A set of lists with cardinalities c₁..c_n yields exactly
/// ∏cᵢ combinations, duplicate-free, in odometer order.
#[derive(Debug, Clone)]
pub struct Combinations<T> {
    lists: Vec<Vec<T>>,
}

impl<T: Clone> Combinations<T> {
    /// Creates a generator from one candidate list per field.
    ///
    /// At least one list is required, and an empty candidate list is a
    /// construction error: there is no valid combination to produce
    /// from it.
    pub fn new(lists: Vec<Vec<T>>) -> IndexResult<Self> {
        if lists.is_empty() {
            return Err(IndexError::invalid_signature(
                "at least one candidate list is required",
            ));
        }
        for (position, list) in lists.iter().enumerate() {
            if list.is_empty() {
                return Err(IndexError::empty_candidate_list(position));
            }
        }
        Ok(Self { lists })
    }

    /// Returns the number of combinations the generator produces.
    #[must_use]
    pub fn combination_count(&self) -> usize {
        self.lists.iter().map(Vec::len).product()
    }

    /// Returns one value per field, chosen at the matching digit position.
    ///
    /// # Panics
    ///
    /// Panics if the digit vector length does not match the field count.
    #[must_use]
    pub fn select(&self, digits: &[f64]) -> Vec<T> {
        assert_eq!(
            digits.len(),
            self.lists.len(),
            "digit vector length does not match field count"
        );
        self.lists
            .iter()
            .zip(digits)
            .map(|(list, digit)| list[*digit as usize].clone())
            .collect()
    }

    /// Returns every combination, rightmost field varying fastest.
    #[must_use]
    pub fn all(&self) -> Vec<Vec<T>> {
        let cardinalities = self.lists.iter().map(|list| list.len() as f64).collect();
        let mut counter = MixedRadixCounter::new(cardinalities);
        let mut result = Vec::with_capacity(self.combination_count());
        loop {
            result.push(self.select(counter.digits()));
            if counter.scalar() >= counter.max_value() {
                break;
            }
            counter.increment();
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_picks_one_candidate_per_field() {
        let combinations =
            Combinations::new(vec![vec!["a", "b"], vec!["x", "y", "z"]]).unwrap();
        assert_eq!(combinations.select(&[1.0, 2.0]), vec!["b", "z"]);
    }

    #[test]
    fn all_is_the_full_cross_product() {
        let combinations =
            Combinations::new(vec![vec![1, 2], vec![3], vec![4, 5]]).unwrap();
        assert_eq!(combinations.combination_count(), 4);
        assert_eq!(
            combinations.all(),
            vec![
                vec![1, 3, 4],
                vec![1, 3, 5],
                vec![2, 3, 4],
                vec![2, 3, 5],
            ]
        );
    }

    #[test]
    fn all_has_no_duplicates() {
        let combinations =
            Combinations::new(vec![vec!["a", "b", "c"], vec!["x", "y"]]).unwrap();
        let mut produced = combinations.all();
        assert_eq!(produced.len(), 6);
        produced.sort();
        produced.dedup();
        assert_eq!(produced.len(), 6);
    }

    #[test]
    fn single_list_yields_its_candidates() {
        let combinations = Combinations::new(vec![vec!["x", "y"]]).unwrap();
        assert_eq!(combinations.all(), vec![vec!["x"], vec!["y"]]);
    }

    #[test]
    fn missing_candidate_lists_are_rejected() {
        let err = Combinations::<&str>::new(vec![]).unwrap_err();
        assert!(matches!(err, IndexError::InvalidSignature { .. }));
    }

    #[test]
    fn empty_candidate_list_is_rejected() {
        let err = Combinations::<&str>::new(vec![vec!["a"], vec![]]).unwrap_err();
        assert!(matches!(err, IndexError::EmptyCandidateList { position: 1 }));
    }
}
