use std::fmt;

use log::{debug, trace};

use crate::error::{Error, Result};

/// The cheapest way to multiply a chain of matrices.
///
/// `Display` renders the optimal parenthesization, naming the matrices
/// `A1` through `An` in chain order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainOrder {
    /// Minimum number of scalar multiplications.
    pub cost: u64,
    /// `splits[i][j]` is the split point `k` of the optimal product of
    /// matrices `i..=j`, i.e. `(A_i..A_k)(A_{k+1}..A_j)`.
    splits: Vec<Vec<usize>>,
}

impl ChainOrder {
    /// Number of matrices in the chain, always at least one.
    pub fn matrices(&self) -> usize {
        self.splits.len()
    }

    /// Split point of the optimal product of matrices `i..=j` (zero-based).
    ///
    /// Returns `None` when `i >= j` or `j` is out of range.
    pub fn split(&self, i: usize, j: usize) -> Option<usize> {
        if i < j && j < self.matrices() {
            Some(self.splits[i][j])
        } else {
            None
        }
    }

    fn write_parens(&self, f: &mut fmt::Formatter<'_>, i: usize, j: usize) -> fmt::Result {
        if i == j {
            return write!(f, "A{}", i + 1);
        }
        let k = self.splits[i][j];
        write!(f, "(")?;
        self.write_parens(f, i, k)?;
        self.write_parens(f, k + 1, j)?;
        write!(f, ")")
    }
}

impl fmt::Display for ChainOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_parens(f, 0, self.matrices() - 1)
    }
}

/// Computes the minimum number of scalar multiplications needed to
/// multiply a chain of matrices.
///
/// `dims` is a slice where `dims[i]` is the number of rows of matrix `i`,
/// and `dims[i+1]` is the number of columns of matrix `i`.
/// So for `n` matrices, `dims.len() == n + 1`.
///
/// # Errors
///
/// * `Error::InvalidInput` if fewer than two dimensions are given.
/// * `Error::Overflow` if a cost does not fit in a `u64`.
///
/// # Examples
///
/// ```
/// use dynprog::cs::dynamic::matrix_chain::matrix_chain_cost;
///
/// assert_eq!(matrix_chain_cost(&[40, 20, 30, 10, 30]).unwrap(), 26000);
/// assert!(matrix_chain_cost(&[5]).is_err());
/// ```
pub fn matrix_chain_cost(dims: &[u64]) -> Result<u64> {
    matrix_chain_order(dims).map(|order| order.cost)
}

/// Computes the optimal parenthesization for a chain of matrices based on
/// their dimensions, together with its cost.
///
/// # Examples
///
/// ```
/// use dynprog::cs::dynamic::matrix_chain::matrix_chain_order;
///
/// let order = matrix_chain_order(&[10, 30, 5, 60]).unwrap();
/// assert_eq!(order.cost, 4500);
/// assert_eq!(order.to_string(), "((A1A2)A3)");
/// ```
pub fn matrix_chain_order(dims: &[u64]) -> Result<ChainOrder> {
    if dims.len() < 2 {
        return Err(Error::invalid_input("Invalid dimensions array"));
    }

    let n = dims.len() - 1; // number of matrices
    debug!("matrix chain: {n} matrices");
    trace!("matrix chain: tables are {n} x {n}");

    // None marks a sub-chain whose every parenthesization overflows u64.
    let mut m = vec![vec![Some(0u64); n]; n];
    let mut s = vec![vec![0usize; n]; n];

    // chain_length is the length of the chain of matrices being considered.
    for chain_length in 2..=n {
        for i in 0..=n - chain_length {
            let j = i + chain_length - 1;
            let mut best: Option<(u64, usize)> = None;
            for k in i..j {
                let (Some(left), Some(right)) = (m[i][k], m[k + 1][j]) else {
                    continue;
                };
                let Some(q) = split_cost(left, right, dims[i], dims[k + 1], dims[j + 1]) else {
                    continue;
                };
                if best.map_or(true, |(cost, _)| q < cost) {
                    best = Some((q, k));
                }
            }
            m[i][j] = best.map(|(cost, _)| cost);
            if let Some((_, k)) = best {
                s[i][j] = k;
            }
        }
    }

    let cost = m[0][n - 1]
        .ok_or_else(|| Error::overflow("Minimum multiplication cost does not fit in u64"))?;

    Ok(ChainOrder { cost, splits: s })
}

/// `left + right + p * q * r`, or `None` on overflow.
fn split_cost(left: u64, right: u64, p: u64, q: u64, r: u64) -> Option<u64> {
    p.checked_mul(q)?
        .checked_mul(r)?
        .checked_add(left)?
        .checked_add(right)
}
