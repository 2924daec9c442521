//! Longest common subsequence over strings and arbitrary slices.

use log::{debug, trace};

/// Returns the length of the longest common subsequence (LCS) between `a` and `b`.
///
/// Strings are compared `char` by `char`.
///
/// # Examples
///
/// ```
/// use dynprog::cs::dynamic::longest_common_subsequence::lcs_length;
///
/// assert_eq!(lcs_length("ABCBDAB", "BDCABA"), 4);
/// assert_eq!(lcs_length("", "ABC"), 0);
/// ```
pub fn lcs_length(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    lcs_length_of(&a_chars, &b_chars)
}

/// Returns the LCS length of two slices of any comparable element type.
///
/// # Examples
///
/// ```
/// use dynprog::cs::dynamic::longest_common_subsequence::lcs_length_of;
///
/// assert_eq!(lcs_length_of(&[1, 3, 4, 1], &[3, 4, 1, 2, 1, 3]), 3);
/// ```
pub fn lcs_length_of<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let dp = lcs_table(a, b);
    dp[a.len()][b.len()]
}

/// Reconstructs and returns one LCS between `a` and `b`.
///
/// If there are several subsequences of maximal length, only one of them is
/// returned. Returns an empty string if there is no common subsequence.
///
/// # Examples
///
/// ```
/// use dynprog::cs::dynamic::longest_common_subsequence::lcs_sequence;
///
/// let lcs = lcs_sequence("ABCDGH", "AEDFHR");
/// assert_eq!(lcs, "ADH");
/// ```
pub fn lcs_sequence(a: &str, b: &str) -> String {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    lcs_sequence_of(&a_chars, &b_chars).into_iter().collect()
}

/// Slice version of [`lcs_sequence`].
pub fn lcs_sequence_of<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let dp = lcs_table(a, b);

    let mut i = a.len();
    let mut j = b.len();
    let mut subsequence = Vec::with_capacity(dp[i][j]);

    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            subsequence.push(a[i - 1].clone());
            i -= 1;
            j -= 1;
        } else if dp[i - 1][j] > dp[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    // Built back to front.
    subsequence.reverse();
    subsequence
}

/// `dp[i][j]` holds the LCS length of `a[..i]` and `b[..j]`.
fn lcs_table<T: PartialEq>(a: &[T], b: &[T]) -> Vec<Vec<usize>> {
    let m = a.len();
    let n = b.len();
    debug!("lcs: sequences of length {m} and {n}");
    trace!("lcs: table is {} x {}", m + 1, n + 1);

    let mut dp = vec![vec![0; n + 1]; m + 1];

    for i in 1..=m {
        for j in 1..=n {
            if a[i - 1] == b[j - 1] {
                dp[i][j] = dp[i - 1][j - 1] + 1;
            } else {
                dp[i][j] = dp[i - 1][j].max(dp[i][j - 1]);
            }
        }
    }

    dp
}
