//! Monte Carlo simulation of the Monty Hall problem.
//!
//! Three doors hide one car and two goats. The contestant picks a door,
//! the host opens a different door that hides a goat, and the contestant
//! either stays with the original pick or switches to the remaining door.
//!
//! ## Layers
//!
//! - [`game`]: doors, prizes, and the per-game rules (deal, reveal, resolve)
//! - [`trial`]: one full game played out under both strategies at once
//! - [`simulation`]: validated trial counts, batch runners, and aggregation
//! - [`api`]: flat, index-based entry points mirroring the classic puzzle API
//! - `cli`: argument parsing and output for the `simulate` binary
//!
//! Every randomized step takes its generator as an explicit `&mut impl Rng`,
//! so seeded runs are reproducible end to end.
pub mod api;
#[cfg(feature = "server")]
pub mod cli;
pub mod error;
pub mod game;
pub mod simulation;
pub mod trial;

pub use error::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Raw 1-based door number as it appears at the API boundary.
pub type DoorIndex = u8;
/// Win rates and row-normalized outcome frequencies.
pub type Probability = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance from the thread-local generator.
    fn random() -> Self;
}

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Number of doors on stage.
pub const DOORS: usize = 3;
/// Trial count used when the caller does not specify one.
pub const DEFAULT_TRIALS: usize = 100;
/// Analytic win rate when always switching.
pub const EXPECTED_SWITCH_WIN: Probability = 2. / 3.;
/// Analytic win rate when always staying.
pub const EXPECTED_STAY_WIN: Probability = 1. / 3.;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging, optionally mirrored to a timestamped file.
/// File output goes to `logs/<unix-seconds>.log` at DEBUG level.
#[cfg(feature = "server")]
pub fn log(level: log::LevelFilter, file: bool) -> anyhow::Result<()> {
    use anyhow::Context;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )];
    if file {
        std::fs::create_dir_all("logs").context("create logs directory")?;
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .context("time moves slow")?
            .as_secs();
        let path = format!("logs/{}.log", time);
        let sink = std::fs::File::create(&path).with_context(|| format!("create {}", path))?;
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config,
            sink,
        ));
    }
    simplelog::CombinedLogger::init(loggers).context("initialize logger")
}
