use super::*;
use crate::*;

/// A state of a two-seat extensive-form game.
///
/// Implementations own the rules: whose turn it is, which actions are
/// legal for whom, how chance outcomes are distributed, and what the
/// returns are at terminal states. Everything else in the crate (table
/// scaffolds, the codec, episode simulation) walks the tree through
/// this trait alone.
///
/// States are immutable values; `apply` and `apply_joint` return
/// successors rather than mutating in place.
pub trait Game: Clone + std::fmt::Debug + std::fmt::Display {
    /// The initial state of an episode.
    fn root() -> Self;
    /// Number of distinct action ids anywhere in the game.
    fn actions() -> usize;
    /// Node kind of this state.
    fn turn(&self) -> Turn;
    /// Legal actions for this seat here. Empty if the seat does not act.
    fn legal(&self, seat: Seat) -> Vec<Action>;
    /// Outcome distribution at a chance node. Empty elsewhere.
    fn chances(&self) -> Vec<(Action, Probability)>;
    /// Successor after a single action (chance outcome or choice).
    fn apply(&self, action: Action) -> Self;
    /// Successor after every seat's action at a simultaneous node, in seat order.
    fn apply_joint(&self, actions: &[Action]) -> Self;
    /// One return per seat. Only meaningful at terminal states.
    fn returns(&self) -> Vec<Utility>;
    /// Every action and chance outcome applied since the root.
    fn history(&self) -> Vec<Action>;
    /// Human readable name of an action at this state, for traces.
    fn describe(&self, action: Action) -> String {
        format!("{}", action)
    }

    /// History identifier: action ids joined by `SEPARATOR`.
    fn history_str(&self) -> String {
        self.history()
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }
    /// Policy table row identifier for this seat at this state.
    ///
    /// Choice nodes are keyed by history alone. Simultaneous nodes carry
    /// one row per seat, so the seat is appended.
    fn key(&self, seat: Seat) -> String {
        match self.turn() {
            Turn::Simultaneous => format!("{}#{}", self.history_str(), seat),
            _ => self.history_str(),
        }
    }
    /// Information state of this seat: everything it has observed here.
    ///
    /// States that share an information state for a seat must be played
    /// identically by that seat, so they share one policy row. Games of
    /// perfect information can keep the default, which is the row key.
    fn info(&self, seat: Seat) -> String {
        self.key(seat)
    }
}
