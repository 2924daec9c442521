use log::{debug, trace};
use num_traits::{CheckedAdd, Zero};

use crate::error::{Error, Result};

/// An optimal 0/1 knapsack packing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnapsackSolution<V> {
    /// Maximum total value.
    pub value: V,
    /// Total weight of the chosen items.
    pub weight: usize,
    /// Indices of the chosen items, ascending.
    pub items: Vec<usize>,
}

/// Solves the 0/1 knapsack problem and returns the maximum achievable value.
///
/// Each item may be taken at most once, and the total weight of the chosen
/// items must not exceed `capacity`. Runs in O(n * capacity) time and space.
///
/// # Errors
///
/// * `Error::InvalidInput` if `values` and `weights` differ in length.
/// * `Error::Overflow` if a partial sum of values overflows `V`, or if
///   `capacity` is `usize::MAX`.
///
/// # Examples
///
/// ```
/// use dynprog::cs::dynamic::knapsack::knapsack;
///
/// let values = [60u64, 100, 120];
/// let weights = [10, 20, 30];
/// assert_eq!(knapsack(&values, &weights, 50).unwrap(), 220);
/// ```
pub fn knapsack<V>(values: &[V], weights: &[usize], capacity: usize) -> Result<V>
where
    V: Copy + Ord + Zero + CheckedAdd,
{
    let dp = fill_table(values, weights, capacity)?;
    Ok(dp[values.len()][capacity])
}

/// Like [`knapsack`], but also reports which items make up the optimum.
///
/// # Examples
///
/// ```
/// use dynprog::cs::dynamic::knapsack::knapsack_selection;
///
/// let solution = knapsack_selection(&[60u64, 100, 120], &[10, 20, 30], 50).unwrap();
/// assert_eq!(solution.value, 220);
/// assert_eq!(solution.items, vec![1, 2]);
/// assert_eq!(solution.weight, 50);
/// ```
pub fn knapsack_selection<V>(
    values: &[V],
    weights: &[usize],
    capacity: usize,
) -> Result<KnapsackSolution<V>>
where
    V: Copy + Ord + Zero + CheckedAdd,
{
    let dp = fill_table(values, weights, capacity)?;
    let n = values.len();

    // A changed cell means item i-1 was included at this budget.
    let mut items = Vec::new();
    let mut budget = capacity;
    for i in (1..=n).rev() {
        if dp[i][budget] != dp[i - 1][budget] {
            items.push(i - 1);
            budget -= weights[i - 1];
        }
    }
    items.reverse();

    Ok(KnapsackSolution {
        value: dp[n][capacity],
        weight: capacity - budget,
        items,
    })
}

/// Builds the (n + 1) x (capacity + 1) table where `dp[i][w]` is the best
/// value using the first `i` items within budget `w`.
fn fill_table<V>(values: &[V], weights: &[usize], capacity: usize) -> Result<Vec<Vec<V>>>
where
    V: Copy + Ord + Zero + CheckedAdd,
{
    if values.len() != weights.len() {
        return Err(Error::invalid_input(
            "Values and weights must be of the same length",
        ));
    }

    let columns = capacity
        .checked_add(1)
        .ok_or_else(|| Error::overflow(format!("Capacity {capacity} is too large")))?;

    let n = values.len();
    debug!("knapsack: {n} items, capacity {capacity}");
    trace!("knapsack: table is {} x {columns}", n + 1);

    let mut dp = vec![vec![V::zero(); columns]; n + 1];

    for i in 1..=n {
        let value = values[i - 1];
        let weight = weights[i - 1];
        for w in 0..=capacity {
            let exclude = dp[i - 1][w];
            dp[i][w] = if weight <= w {
                let include = dp[i - 1][w - weight]
                    .checked_add(&value)
                    .ok_or_else(|| Error::overflow("Knapsack value sum overflowed"))?;
                exclude.max(include)
            } else {
                exclude
            };
        }
    }

    Ok(dp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_instance() {
        let values = vec![60u64, 100, 120];
        let weights = vec![10, 20, 30];
        assert_eq!(knapsack(&values, &weights, 50), Ok(220));
    }

    #[test]
    fn test_empty_and_zero_capacity() {
        let empty: [u64; 0] = [];
        assert_eq!(knapsack(&empty, &[], 10), Ok(0));
        assert_eq!(knapsack(&[5u32, 7], &[1, 2], 0), Ok(0));
    }

    #[test]
    fn test_length_mismatch() {
        assert!(matches!(
            knapsack(&[1u64, 2, 3], &[1, 2], 5),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            knapsack_selection(&[1u64], &[], 5),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_item_used_at_most_once() {
        // An unbounded knapsack would take item 0 five times for 50.
        assert_eq!(knapsack(&[10u64], &[1], 5), Ok(10));
    }

    #[test]
    fn test_item_heavier_than_capacity() {
        assert_eq!(knapsack(&[1000u64, 1], &[11, 1], 10), Ok(1));
    }

    #[test]
    fn test_zero_weight_items() {
        assert_eq!(knapsack(&[3u64, 4, 5], &[0, 0, 10], 0), Ok(7));
    }

    #[test]
    fn test_signed_values() {
        // A negative-valued item is never worth including.
        assert_eq!(knapsack(&[-5i64, 8], &[1, 1], 2), Ok(8));
    }

    #[test]
    fn test_overflow() {
        assert!(matches!(
            knapsack(&[u8::MAX, 1], &[1, 1], 2),
            Err(Error::Overflow(_))
        ));
    }

    #[test]
    fn test_capacity_too_large() {
        assert!(matches!(
            knapsack(&[1u64], &[1], usize::MAX),
            Err(Error::Overflow(_))
        ));
        assert!(matches!(
            knapsack_selection(&[1u64], &[1], usize::MAX),
            Err(Error::Overflow(_))
        ));
    }

    #[test]
    fn test_selection() {
        let solution = knapsack_selection(&[60u64, 100, 120], &[10, 20, 30], 50).unwrap();
        assert_eq!(
            solution,
            KnapsackSolution {
                value: 220,
                weight: 50,
                items: vec![1, 2],
            }
        );

        let values = [1u64, 4, 5, 7];
        let weights = [1, 3, 4, 5];
        let solution = knapsack_selection(&values, &weights, 7).unwrap();
        assert_eq!(solution.value, 9);
        assert!(solution.weight <= 7);
        let picked: u64 = solution.items.iter().map(|&i| values[i]).sum();
        let weight: usize = solution.items.iter().map(|&i| weights[i]).sum();
        assert_eq!(picked, 9);
        assert_eq!(weight, solution.weight);
    }

    #[test]
    fn test_deterministic() {
        let values = [3u64, 4, 5, 6];
        let weights = [2, 3, 4, 5];
        assert_eq!(
            knapsack(&values, &weights, 5),
            knapsack(&values, &weights, 5)
        );
    }
}
