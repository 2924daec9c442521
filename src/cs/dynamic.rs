pub mod coin_change;
pub mod fibonacci;
pub mod knapsack;
pub mod longest_common_subsequence;
pub mod matrix_chain;

// Re-export dynamic programming algorithms with descriptive names
pub use coin_change::{count_change_ways, min_coins_for_change};
pub use fibonacci::{fibonacci, MAX_FIBONACCI_INDEX};
pub use knapsack::{knapsack, knapsack_selection, KnapsackSolution};
pub use longest_common_subsequence::{lcs_length, lcs_length_of, lcs_sequence, lcs_sequence_of};
pub use matrix_chain::{matrix_chain_cost, matrix_chain_order, ChainOrder};
