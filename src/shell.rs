//! Interactive menu around the dynamic programming routines.
//!
//! [`run`] drives a read-parse-dispatch-print loop over any `BufRead` /
//! `Write` pair: it prints the menu, reads a choice, prompts for that
//! problem's arguments, and prints either the answer or an error message
//! before returning to the menu. Errors from bad input never end the loop;
//! only `Exit`, end of input, or an I/O failure on the streams do.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use log::{debug, info};
use thiserror::Error;

use crate::cs::dynamic::{
    fibonacci, knapsack, lcs_length, matrix_chain_cost, min_coins_for_change,
};
use crate::error::Error;

/// Prompt shown when asking for a menu choice.
pub const CHOICE_PROMPT: &str = "Enter your choice (1-6): ";

/// Printed for any menu input that is not one of the listed numbers.
pub const INVALID_CHOICE: &str = "Invalid choice. Please select a valid option.";

/// Printed when the loop ends.
pub const GOODBYE: &str = "Exiting program. Goodbye!";

/// One entry of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Fibonacci,
    Knapsack,
    LongestCommonSubsequence,
    MatrixChain,
    CoinChange,
    Exit,
}

impl Menu {
    /// All entries, in menu order.
    pub const ALL: [Menu; 6] = [
        Menu::Fibonacci,
        Menu::Knapsack,
        Menu::LongestCommonSubsequence,
        Menu::MatrixChain,
        Menu::CoinChange,
        Menu::Exit,
    ];

    /// The number the user types to pick this entry.
    pub fn number(self) -> usize {
        match self {
            Menu::Fibonacci => 1,
            Menu::Knapsack => 2,
            Menu::LongestCommonSubsequence => 3,
            Menu::MatrixChain => 4,
            Menu::CoinChange => 5,
            Menu::Exit => 6,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Menu::Fibonacci => "Fibonacci",
            Menu::Knapsack => "0/1 Knapsack",
            Menu::LongestCommonSubsequence => "Longest Common Subsequence",
            Menu::MatrixChain => "Matrix Chain Multiplication",
            Menu::CoinChange => "Coin Change Problem",
            Menu::Exit => "Exit",
        }
    }
}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.title())
    }
}

impl FromStr for Menu {
    type Err = ParseError;

    /// Accepts the menu number, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<usize>()
            .ok()
            .and_then(|num| Menu::ALL.into_iter().find(|entry| entry.number() == num))
            .ok_or_else(|| ParseError::InvalidChoice(trimmed.to_string()))
    }
}

/// Errors from turning user text into arguments.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("'{0}' is not a valid menu choice")]
    InvalidChoice(String),

    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),
}

/// Why a single menu command did not produce an answer.
#[derive(Debug, Error)]
enum CommandError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Algorithm(#[from] Error),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("end of input")]
    EndOfInput,
}

/// Parses a single number, ignoring surrounding whitespace.
///
/// # Examples
///
/// ```
/// use dynprog::shell::parse_number;
///
/// assert_eq!(parse_number::<i64>(" -3 "), Ok(-3));
/// assert!(parse_number::<usize>("-3").is_err());
/// ```
pub fn parse_number<T: FromStr>(text: &str) -> Result<T, ParseError> {
    let trimmed = text.trim();
    trimmed
        .parse()
        .map_err(|_| ParseError::InvalidNumber(trimmed.to_string()))
}

/// Parses a whitespace-separated list of numbers. Blank input is an empty list.
///
/// # Examples
///
/// ```
/// use dynprog::shell::parse_list;
///
/// assert_eq!(parse_list::<u64>("40 20  30"), Ok(vec![40, 20, 30]));
/// assert_eq!(parse_list::<u64>(""), Ok(vec![]));
/// ```
pub fn parse_list<T: FromStr>(text: &str) -> Result<Vec<T>, ParseError> {
    text.split_whitespace().map(parse_number).collect()
}

/// Runs the menu loop until the user picks Exit or `input` is exhausted.
///
/// Only I/O errors on `input` or `output` are returned; everything else is
/// reported on `output` and the loop continues.
pub fn run<R: BufRead, W: Write>(input: R, output: W) -> io::Result<()> {
    let mut shell = Shell { input, output };

    loop {
        shell.print_menu()?;

        let line = match shell.prompt(CHOICE_PROMPT) {
            Ok(line) => line,
            Err(CommandError::Io(err)) => return Err(err),
            Err(_) => break,
        };

        let choice = match line.parse::<Menu>() {
            Ok(choice) => choice,
            Err(err) => {
                info!("{err}");
                writeln!(shell.output, "{INVALID_CHOICE}")?;
                continue;
            }
        };
        debug!("menu choice: {}", choice.title());

        match shell.dispatch(choice) {
            Ok(Some(answer)) => writeln!(shell.output, "{answer}")?,
            Ok(None) | Err(CommandError::EndOfInput) => break,
            Err(CommandError::Io(err)) => return Err(err),
            Err(err) => {
                info!("{} failed: {err}", choice.title());
                writeln!(shell.output, "Error: {err}")?;
            }
        }
    }

    writeln!(shell.output, "{GOODBYE}")?;
    shell.output.flush()
}

struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Select a Dynamic Programming Problem to Solve:")?;
        for entry in Menu::ALL {
            writeln!(self.output, "{entry}")?;
        }
        Ok(())
    }

    /// Prints `message`, then reads one line without its line terminator.
    /// Invalid UTF-8 is replaced rather than rejected.
    fn prompt(&mut self, message: &str) -> Result<String, CommandError> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Err(CommandError::EndOfInput);
        }
        let line = String::from_utf8_lossy(&bytes);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Collects the arguments for `choice`, runs it, and formats the answer.
    /// Returns `None` for `Menu::Exit`.
    fn dispatch(&mut self, choice: Menu) -> Result<Option<String>, CommandError> {
        let answer = match choice {
            Menu::Fibonacci => {
                let n: i64 = parse_number(&self.prompt("Enter n for Fibonacci(n): ")?)?;
                format!("Fibonacci({n}) = {}", fibonacci(n)?)
            }
            Menu::Knapsack => {
                let values: Vec<i64> =
                    parse_list(&self.prompt("Enter values separated by space: ")?)?;
                let weights: Vec<usize> =
                    parse_list(&self.prompt("Enter weights separated by space: ")?)?;
                let capacity: usize = parse_number(&self.prompt("Enter knapsack capacity: ")?)?;
                format!("Maximum value: {}", knapsack(&values, &weights, capacity)?)
            }
            Menu::LongestCommonSubsequence => {
                let first = self.prompt("Enter first string: ")?;
                let second = self.prompt("Enter second string: ")?;
                format!("Length of LCS: {}", lcs_length(&first, &second))
            }
            Menu::MatrixChain => {
                let dims: Vec<u64> = parse_list(
                    &self.prompt("Enter matrix dimensions (e.g., 40 20 30 10 30): ")?,
                )?;
                format!("Minimum multiplication cost: {}", matrix_chain_cost(&dims)?)
            }
            Menu::CoinChange => {
                let coins: Vec<usize> = parse_list(&self.prompt("Enter coin denominations: ")?)?;
                let amount: usize = parse_number(&self.prompt("Enter amount: ")?)?;
                if amount == usize::MAX {
                    return Err(Error::overflow(format!("Amount {amount} is too large")).into());
                }
                match min_coins_for_change(&coins, amount) {
                    Some(count) => format!("Minimum coins required: {count}"),
                    None => "Minimum coins required: -1".to_string(),
                }
            }
            Menu::Exit => return Ok(None),
        };
        Ok(Some(answer))
    }
}
