use crate::Error;

/// What stands behind a door.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Prize {
    Goat,
    Car,
}

impl Prize {
    pub const fn is_car(&self) -> bool {
        matches!(self, Self::Car)
    }
}

impl std::fmt::Display for Prize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Goat => f.pad("goat"),
            Self::Car => f.pad("car"),
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Prize {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "goat" => Ok(Self::Goat),
            "car" => Ok(Self::Car),
            other => Err(Error::invalid(format!("unknown prize {:?}", other))),
        }
    }
}
