//! Batch simulation and aggregation.
//!
//! A [`Simulation`] plays a validated number of [`Trials`] and hands back
//! the ordered [`Batch`] of results. The batch can be flattened into
//! per-strategy [`Row`]s or reduced into a [`Summary`] of win and loss
//! proportions.
mod batch;
mod row;
mod simulation;
mod summary;
mod trials;

#[cfg(test)]
mod tests;

pub use batch::*;
pub use row::*;
pub use simulation::*;
pub use summary::*;
pub use trials::*;
