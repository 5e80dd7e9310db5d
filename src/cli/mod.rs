//! Command line front end for the `simulate` binary.
mod args;
mod cli;

pub use args::*;
pub use cli::*;
