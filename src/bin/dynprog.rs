//! Interactive menu for the dynamic programming solvers.
//!
//! Usage:
//! ```bash
//! RUST_LOG=debug cargo run --bin dynprog
//! ```

use std::io;

use dynprog::shell;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr, prompts to stdout.
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run(stdin.lock(), stdout.lock())?;

    Ok(())
}
