pub mod cs;
pub mod error;
pub mod shell;

pub use cs::dynamic;
pub use error::{Error, Result};
