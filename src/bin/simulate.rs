//! Monty Hall Simulation Binary
//!
//! Plays many games under both strategies and prints the outcome table.
//!
//! Options: --trials, --seed, --sequential, --rows, --json, -v, --log-file

fn main() -> anyhow::Result<()> {
    montyhall::cli::CLI::run()
}
