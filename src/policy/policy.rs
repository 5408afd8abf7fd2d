use crate::game::*;
use crate::*;
use std::collections::BTreeMap;

/// probability vector over the legal actions at a state
pub type Distribution = BTreeMap<Action, Probability>;

/// Anything that can say how a seat plays at a state.
///
/// The codec and the simulator depend on this capability alone,
/// never on how a distribution is produced.
pub trait Policy<G>
where
    G: Game,
{
    /// Action probabilities for this seat at this state.
    /// Keys are legal actions; values need not be normalized.
    fn distribution(&self, game: &G, seat: Seat) -> Distribution;

    /// Full row over every action id of the game.
    ///
    /// Positive mass on legal actions is kept and scaled to sum to 1;
    /// illegal and unlisted actions read as `ROUNDING`. Rows already within
    /// `TOLERANCE` of 1 are kept as they are, so frozen tables round-trip
    /// exactly. A row with no positive mass stays empty.
    fn row(&self, game: &G, seat: Seat) -> Vec<Probability> {
        let legal = game.legal(seat);
        let distribution = self
            .distribution(game, seat)
            .into_iter()
            .filter(|(a, p)| *p > 0. && legal.contains(a))
            .collect::<Distribution>();
        let mass = distribution.values().sum::<Probability>();
        let scale = match (mass - 1.).abs() <= TOLERANCE || mass <= 0. || !mass.is_finite() {
            true => 1.,
            false => mass,
        };
        (0..G::actions())
            .map(|a| distribution.get(&a).map(|p| p / scale).unwrap_or(ROUNDING))
            .collect()
    }
}
