use super::*;
use crate::game::*;
use crate::*;

/// A policy computed on demand by an arbitrary function.
pub struct Procedural<F>(F);

impl<F> Procedural<F> {
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<G, F> Policy<G> for Procedural<F>
where
    G: Game,
    F: Fn(&G, Seat) -> Distribution,
{
    fn distribution(&self, game: &G, seat: Seat) -> Distribution {
        (self.0)(game, seat)
    }
}

/// uniform random over legal actions
#[derive(Debug, Clone, Copy, Default)]
pub struct Uniform;

impl<G> Policy<G> for Uniform
where
    G: Game,
{
    fn distribution(&self, game: &G, seat: Seat) -> Distribution {
        let legal = game.legal(seat);
        let p = 1. / legal.len().max(1) as Probability;
        legal.into_iter().map(|a| (a, p)).collect()
    }
}
