use super::args::Args;
use crate::game::Strategy;
use crate::simulation::Batch;
use crate::simulation::Simulation;
use crate::simulation::Summary;
use clap::Parser;
use colored::Colorize;

pub struct CLI(Args);

impl From<Args> for CLI {
    fn from(args: Args) -> Self {
        Self(args)
    }
}

impl CLI {
    /// Parses the process arguments, sets up logging, and runs one simulation.
    pub fn run() -> anyhow::Result<()> {
        let cli = Self::from(Args::parse());
        crate::log(cli.0.level(), cli.0.log_file)?;
        cli.simulate()
    }

    fn simulate(&self) -> anyhow::Result<()> {
        let simulation = self.simulation();
        log::info!("{:<32}{:<32}", "seed", simulation.seed());
        let batch = match self.0.sequential {
            true => simulation.run(),
            false => simulation.par_run(),
        };
        self.print(&batch)
    }

    fn simulation(&self) -> Simulation {
        match self.0.seed {
            Some(seed) => Simulation::new(self.0.trials, seed),
            None => Simulation::from(self.0.trials),
        }
    }

    fn print(&self, batch: &Batch) -> anyhow::Result<()> {
        if self.0.rows {
            for row in batch.rows() {
                println!("{}", row);
            }
        }
        let summary = batch.summary();
        if self.0.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            print!("{}", summary);
            println!("{}", Self::verdict(&summary));
        }
        Ok(())
    }

    fn verdict(summary: &Summary) -> String {
        let best = summary.best();
        let line = format!(
            "{} wins {:.2}% of {} games",
            best,
            summary.win_rate(best) * 100.,
            summary.trials()
        );
        match best {
            Strategy::Switch => line.green().bold().to_string(),
            Strategy::Stay => line.yellow().bold().to_string(),
        }
    }
}
