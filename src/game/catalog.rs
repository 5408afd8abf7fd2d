use crate::Fault;

/// Built-in games, resolved by name from the command line.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Catalog {
    Kuhn,
    Rps,
}

impl Catalog {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Kuhn => "kuhn_poker",
            Self::Rps => "rps",
        }
    }
}

impl std::str::FromStr for Catalog {
    type Err = Fault;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kuhn_poker" | "kuhn" => Ok(Self::Kuhn),
            "rps" => Ok(Self::Rps),
            _ => Err(Fault::UnknownGame(s.to_string())),
        }
    }
}

impl std::fmt::Display for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
