use super::*;
use crate::game::*;
use crate::*;
use rand::Rng;
use std::path::Path;

/// Round-robin league with seat swapping.
///
/// Each round, every unordered pair of teams plays twice: once with the
/// lower-named team in seat 1, once with the seats swapped. Both legs are
/// scored on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tournament {
    rounds: usize,
}

impl Default for Tournament {
    fn default() -> Self {
        Self::new(ROUNDS)
    }
}

impl Tournament {
    pub fn new(rounds: usize) -> Self {
        Self { rounds }
    }
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// `(round, seat 1 team, seat 2 team)` in play order.
    pub fn fixtures(&self, teams: usize) -> Vec<(usize, usize, usize)> {
        (0..self.rounds)
            .flat_map(|round| {
                (0..teams)
                    .flat_map(move |a| (a + 1..teams).map(move |b| (a, b)))
                    .flat_map(move |(a, b)| [(round, a, b), (round, b, a)])
            })
            .collect()
    }

    /// Play every fixture between the loaded contestants.
    pub fn play<G, R>(&self, roster: &Roster<G>, rng: &mut R) -> anyhow::Result<Standings>
    where
        G: Game,
        R: Rng + ?Sized,
    {
        let fixtures = self.fixtures(roster.teams().len());
        log::info!(
            "{} teams, {} rounds, {} matches",
            roster.teams().len(),
            self.rounds,
            fixtures.len()
        );
        let mut standings = Standings::new(roster.teams().iter().cloned());
        for (round, home, away) in fixtures {
            let returns = simulate::<G, R>(roster.policy(home, 0), roster.policy(away, 1), rng)?;
            let record = Record {
                round,
                team1: roster.team(home).to_string(),
                team2: roster.team(away).to_string(),
                score1: returns[0],
                score2: returns[1],
            };
            log::info!("{}", record);
            standings.record(record);
        }
        Ok(standings)
    }

    /// Discover, validate, and load contestants from `dir`, then play.
    pub fn run<G, R>(&self, dir: &Path, rng: &mut R) -> anyhow::Result<Standings>
    where
        G: Game,
        R: Rng + ?Sized,
    {
        let registry = Registry::scan(dir)?;
        let roster = Roster::<G>::load(&registry)?;
        log::info!("loaded {} contestants from {}", roster.teams().len(), registry.dir().display());
        self.play(&roster, rng)
    }
}
