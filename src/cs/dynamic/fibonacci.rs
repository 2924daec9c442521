use log::debug;

use crate::error::{Error, Result};

/// Largest `n` for which `F(n)` fits in a `u128`.
pub const MAX_FIBONACCI_INDEX: i64 = 186;

/// Computes the `n`th Fibonacci number, with `F(0) = 0` and `F(1) = 1`.
///
/// Only the last two values are kept while iterating, so this runs in O(n)
/// time and O(1) space.
///
/// # Errors
///
/// * `Error::InvalidInput` if `n` is negative.
/// * `Error::Overflow` if `n > MAX_FIBONACCI_INDEX`.
///
/// # Examples
///
/// ```
/// use dynprog::cs::dynamic::fibonacci::fibonacci;
///
/// assert_eq!(fibonacci(10).unwrap(), 55);
/// assert!(fibonacci(-1).is_err());
/// ```
pub fn fibonacci(n: i64) -> Result<u128> {
    debug!("fibonacci: n = {n}");

    if n < 0 {
        return Err(Error::invalid_input("Input must be a non-negative integer"));
    }
    if n <= 1 {
        return Ok(n as u128);
    }

    let mut prev: u128 = 0;
    let mut curr: u128 = 1;
    for _ in 2..=n {
        let next = prev
            .checked_add(curr)
            .ok_or_else(|| Error::overflow(format!("Fibonacci({n}) does not fit in u128")))?;
        prev = curr;
        curr = next;
    }

    Ok(curr)
}
