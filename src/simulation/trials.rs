use crate::DEFAULT_TRIALS;
use crate::Error;

/// A validated, strictly positive number of games to simulate.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Trials(usize);

impl Trials {
    pub fn get(&self) -> usize {
        self.0
    }
    /// Parser hook for command line arguments.
    pub fn parse(s: &str) -> Result<Self, Error> {
        Self::try_from(s)
    }
}

impl Default for Trials {
    fn default() -> Self {
        Self(DEFAULT_TRIALS)
    }
}

impl TryFrom<i64> for Trials {
    type Error = Error;
    fn try_from(n: i64) -> Result<Self, Self::Error> {
        match usize::try_from(n) {
            Ok(n) if n > 0 => Ok(Self(n)),
            _ => Err(Error::invalid(format!("trial count must be positive, got {}", n))),
        }
    }
}
impl TryFrom<usize> for Trials {
    type Error = Error;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            0 => Err(Error::invalid("trial count must be positive, got 0")),
            n => Ok(Self(n)),
        }
    }
}
/// Accepts plain integers with optional `_` separators, e.g. `100_000`.
impl TryFrom<&str> for Trials {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.trim()
            .replace('_', "")
            .parse::<i64>()
            .map_err(|_| Error::invalid(format!("trial count {:?} is not an integer", s)))
            .and_then(Self::try_from)
    }
}

impl From<Trials> for usize {
    fn from(trials: Trials) -> Self {
        trials.0
    }
}

impl std::fmt::Display for Trials {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}
