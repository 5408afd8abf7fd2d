use crate::Probability;
use crate::Seat;
use std::path::PathBuf;

/// Domain failures that abort a decode, an episode, or a tournament.
///
/// Carried inside `anyhow::Error`; recover with `downcast_ref::<Fault>()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Fault {
    /// A decision state of the game has no row in the policy table.
    MissingState(String),
    /// The policy table file could not be parsed.
    Malformed { line: usize, reason: String },
    /// A policy puts zero mass on every legal action at a reached state.
    Degenerate { state: String, seat: Seat },
    /// A policy gives weights that cannot be sampled, such as NaN or infinite mass.
    Unsampleable {
        state: String,
        seat: Seat,
        weights: Vec<Probability>,
    },
    /// A team is missing one of its two seat files.
    IncompleteContestant { team: String, seat: Seat },
    /// Discovery found no contestant files at all.
    NoContestants(PathBuf),
    /// The game name does not resolve to a built-in game.
    UnknownGame(String),
}

impl std::fmt::Display for Fault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingState(key) => write!(f, "policy table has no row for state [{}]", key),
            Self::Malformed { line, reason } => write!(f, "malformed table at line {}: {}", line, reason),
            Self::Degenerate { state, seat } => write!(
                f,
                "policy for P{} has no mass on any legal action at [{}]",
                seat + 1,
                state
            ),
            Self::Unsampleable {
                state,
                seat,
                weights,
            } => write!(
                f,
                "policy for P{} has unsampleable weights {:?} at [{}]",
                seat + 1,
                weights,
                state
            ),
            Self::IncompleteContestant { team, seat } => {
                write!(f, "team {} is missing its p{} policy file", team, seat + 1)
            }
            Self::NoContestants(dir) => write!(f, "no contestant files in {}", dir.display()),
            Self::UnknownGame(name) => write!(f, "unknown game {}", name),
        }
    }
}

impl std::error::Error for Fault {}
