use crate::Seat;

/// Whose turn it is to act in the game tree.
///
/// # Variants
///
/// - `Choice(Seat)`: seat must make a decision alone
/// - `Simultaneous`: every seat decides, actions apply jointly
/// - `Chance`: an outcome is drawn from the game's own distribution
/// - `Terminal`: episode is over, read the returns
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Turn {
    Terminal,
    Chance,
    Simultaneous,
    Choice(Seat),
}

impl Turn {
    /// True if some seat has to decide here.
    pub fn is_decision(&self) -> bool {
        matches!(self, Self::Choice(_) | Self::Simultaneous)
    }
    /// True if the episode is complete.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal)
    }
    /// Does this seat act at this node?
    pub fn involves(&self, seat: Seat) -> bool {
        match self {
            Self::Choice(s) => *s == seat,
            Self::Simultaneous => seat < crate::N,
            _ => false,
        }
    }
}

impl From<Seat> for Turn {
    fn from(seat: Seat) -> Self {
        Self::Choice(seat)
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Choice(c) => write!(f, "P{}", c + 1),
            Self::Simultaneous => write!(f, "**"),
            Self::Terminal => write!(f, "-"),
            Self::Chance => write!(f, "?"),
        }
    }
}
