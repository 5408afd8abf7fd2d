use super::*;
use crate::*;
use std::collections::HashSet;

/// A decision point: a state together with a seat that acts there.
///
/// Spots are the rows of a policy table, one per information state.
/// The state is the first one visited with that information, and its
/// history is the row identifier. Chance and terminal states never
/// produce spots; a simultaneous state produces one per seat.
#[derive(Debug, Clone)]
pub struct Spot<G>
where
    G: Game,
{
    game: G,
    seat: Seat,
    key: String,
    info: String,
}

impl<G> Spot<G>
where
    G: Game,
{
    pub fn game(&self) -> &G {
        &self.game
    }
    pub fn seat(&self) -> Seat {
        self.seat
    }
    pub fn key(&self) -> &str {
        &self.key
    }
    pub fn info(&self) -> &str {
        &self.info
    }
    pub fn legal(&self) -> Vec<Action> {
        self.game.legal(self.seat)
    }

    /// One representative per reachable information state, depth-first
    /// from the root in first-visit order.
    pub fn enumerate() -> Vec<Self> {
        let mut seen = HashSet::new();
        let mut spots = Vec::new();
        let mut todo = vec![G::root()];
        while let Some(game) = todo.pop() {
            for seat in (0..N).filter(|s| game.turn().involves(*s)) {
                let info = game.info(seat);
                if seen.insert(info.clone()) {
                    spots.push(Self {
                        key: game.key(seat),
                        game: game.clone(),
                        seat,
                        info,
                    });
                }
            }
            todo.extend(Self::children(&game).into_iter().rev());
        }
        spots
    }

    fn children(game: &G) -> Vec<G> {
        match game.turn() {
            Turn::Terminal => vec![],
            Turn::Chance => game
                .chances()
                .into_iter()
                .map(|(outcome, _)| game.apply(outcome))
                .collect(),
            Turn::Choice(seat) => game
                .legal(seat)
                .into_iter()
                .map(|action| game.apply(action))
                .collect(),
            Turn::Simultaneous => (0..N)
                .map(|seat| game.legal(seat))
                .fold(vec![vec![]], |joints: Vec<Vec<Action>>, legal| {
                    joints
                        .iter()
                        .flat_map(|joint| {
                            legal.iter().map(move |a| {
                                let mut next = joint.clone();
                                next.push(*a);
                                next
                            })
                        })
                        .collect()
                })
                .into_iter()
                .map(|joint| game.apply_joint(&joint))
                .collect(),
        }
    }
}
