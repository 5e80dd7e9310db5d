use crate::simulation::Trials;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Simulate the Monty Hall stay-or-switch game", long_about = None)]
pub struct Args {
    #[arg(
        short = 'n',
        long,
        default_value_t = Trials::default(),
        value_parser = Trials::parse,
        allow_negative_numbers = true,
        help = "Number of games to simulate"
    )]
    pub trials: Trials,
    #[arg(short, long, help = "Seed for reproducible runs (random if omitted)")]
    pub seed: Option<u64>,
    #[arg(long, help = "Play every game on the current thread")]
    pub sequential: bool,
    #[arg(long, help = "Print one row per game and strategy")]
    pub rows: bool,
    #[arg(long, help = "Print the summary as JSON")]
    pub json: bool,
    #[arg(short, long, action = clap::ArgAction::Count, help = "Raise log verbosity (-v debug, -vv trace)")]
    pub verbose: u8,
    #[arg(long, help = "Also write a debug log under logs/")]
    pub log_file: bool,
}

impl Args {
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_TRIALS;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["simulate"]).unwrap();
        assert_eq!(args.trials.get(), DEFAULT_TRIALS);
        assert_eq!(args.seed, None);
        assert_eq!(args.level(), log::LevelFilter::Info);
        assert!(!args.sequential && !args.rows && !args.json);
    }

    #[test]
    fn parses_flags() {
        let args = Args::try_parse_from([
            "simulate", "-n", "100_000", "--seed", "7", "--json", "-vv",
        ])
        .unwrap();
        assert_eq!(args.trials.get(), 100_000);
        assert_eq!(args.seed, Some(7));
        assert!(args.json);
        assert_eq!(args.level(), log::LevelFilter::Trace);
    }

    #[test]
    fn rejects_bad_counts() {
        for n in ["0", "-5", "2.5", "many"] {
            assert!(Args::try_parse_from(["simulate", "-n", n]).is_err(), "{}", n);
        }
    }
}
