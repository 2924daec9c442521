use log::debug;

/// Computes the minimum number of coins needed to form the target `amount`.
///
/// The coin change problem here is the "unbounded" variant, meaning each coin
/// can be used any number of times. Returns `None` if it's impossible to form
/// the `amount` using the given `coins`.
///
/// # Panics
///
/// Panics if `amount` is `usize::MAX`, since the table needs `amount + 1` cells.
///
/// # Examples
///
/// ```
/// use dynprog::cs::dynamic::coin_change::min_coins_for_change;
///
/// // 5 + 5 + 1
/// assert_eq!(min_coins_for_change(&[1, 2, 5], 11), Some(3));
///
/// // Impossible to form 3 from [2], so returns None
/// assert_eq!(min_coins_for_change(&[2], 3), None);
/// ```
pub fn min_coins_for_change(coins: &[usize], amount: usize) -> Option<usize> {
    debug!("coin change: {} denominations, amount {amount}", coins.len());

    // dp[i] holds the minimum number of coins to form amount i, if reachable.
    let mut dp: Vec<Option<usize>> = vec![None; amount + 1];
    dp[0] = Some(0);

    for curr_amount in 1..=amount {
        dp[curr_amount] = coins
            .iter()
            .filter(|&&coin| coin > 0 && coin <= curr_amount)
            .filter_map(|&coin| dp[curr_amount - coin])
            .min()
            .map(|count| count + 1);
    }

    dp[amount]
}

/// Computes the number of distinct ways to form `amount` using the given `coins`.
///
/// Each coin can be used any number of times, and ways that differ only in
/// the order of the coins count once. Returns `None` if the count overflows
/// `usize`.
///
/// # Panics
///
/// Panics if `amount` is `usize::MAX`.
///
/// # Examples
///
/// ```
/// use dynprog::cs::dynamic::coin_change::count_change_ways;
///
/// // There are 4 ways to make 5 using [1,2,5]:
/// //   1) 1+1+1+1+1
/// //   2) 1+1+1+2
/// //   3) 1+2+2
/// //   4) 5
/// assert_eq!(count_change_ways(&[1, 2, 5], 5), Some(4));
/// ```
pub fn count_change_ways(coins: &[usize], amount: usize) -> Option<usize> {
    debug!("coin ways: {} denominations, amount {amount}", coins.len());

    // dp[i] will be the number of ways to form amount i.
    let mut dp = vec![0_usize; amount + 1];
    dp[0] = 1; // base case: 1 way to form 0 (use no coins)

    // Coins in the outer loop so each multiset is counted once.
    for &coin in coins.iter().filter(|&&coin| coin > 0) {
        for curr_amount in coin..=amount {
            dp[curr_amount] = dp[curr_amount].checked_add(dp[curr_amount - coin])?;
        }
    }

    Some(dp[amount])
}
