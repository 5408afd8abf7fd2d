use crate::codec::*;
use crate::game::*;
use crate::policy::*;
use crate::*;
use rand::Rng;
use rand::distr::Distribution as _;
use rand::distr::weighted::WeightedIndex;
use std::path::Path;

/// One episode of a game between two seated policies.
///
/// Episode walks the tree from the root until it reaches a terminal:
/// - Chance: draw an outcome from the game's own distribution
/// - Choice: the acting seat samples from its legal-restricted policy
/// - Simultaneous: every seat samples, actions apply as one joint step
///
/// Nothing survives between episodes; all randomness comes from `rng`.
pub struct Episode<'a, G, R>
where
    G: Game,
    R: Rng + ?Sized,
{
    game: G,
    seats: [&'a dyn Policy<G>; N],
    rng: &'a mut R,
}

impl<'a, G, R> Episode<'a, G, R>
where
    G: Game,
    R: Rng + ?Sized,
{
    pub fn new(seats: [&'a dyn Policy<G>; N], rng: &'a mut R) -> Self {
        Self {
            game: G::root(),
            seats,
            rng,
        }
    }

    /// Play to the end and return one utility per seat.
    pub fn run(mut self) -> anyhow::Result<Vec<Utility>> {
        loop {
            match self.game.turn() {
                Turn::Chance => self.next_chance()?,
                Turn::Choice(seat) => self.next_choice(seat)?,
                Turn::Simultaneous => self.next_joint()?,
                Turn::Terminal => return Ok(self.next_returns()),
            }
        }
    }
}

impl<'a, G, R> Episode<'a, G, R>
where
    G: Game,
    R: Rng + ?Sized,
{
    fn next_chance(&mut self) -> anyhow::Result<()> {
        let (outcomes, weights): (Vec<Action>, Vec<Probability>) =
            self.game.chances().into_iter().unzip();
        let i = WeightedIndex::new(&weights)
            .map_err(|e| anyhow::anyhow!("chance node [{}] cannot be sampled: {}", self.game, e))?
            .sample(&mut *self.rng);
        let outcome = outcomes[i];
        log::debug!("{} ? {}", self.game, self.game.describe(outcome));
        self.game = self.game.apply(outcome);
        Ok(())
    }

    fn next_choice(&mut self, seat: Seat) -> anyhow::Result<()> {
        let action = self.sample(seat)?;
        log::debug!("{} P{} {}", self.game, seat + 1, self.game.describe(action));
        self.game = self.game.apply(action);
        Ok(())
    }

    fn next_joint(&mut self) -> anyhow::Result<()> {
        let joint = (0..N)
            .map(|seat| self.sample(seat))
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "{} ** {}",
            self.game,
            joint
                .iter()
                .map(|a| self.game.describe(*a))
                .collect::<Vec<_>>()
                .join(" ")
        );
        self.game = self.game.apply_joint(&joint);
        Ok(())
    }

    fn next_returns(&self) -> Vec<Utility> {
        let returns = self.game.returns();
        log::debug!("{} returns {:?}", self.game, returns);
        returns
    }

    /// Restrict the seat's policy to its legal actions, renormalize, sample.
    fn sample(&mut self, seat: Seat) -> Result<Action, Fault> {
        let legal = self.game.legal(seat);
        let distribution = self.seats[seat].distribution(&self.game, seat);
        let weights = legal
            .iter()
            .map(|a| distribution.get(a).copied().unwrap_or(ROUNDING))
            .map(|p| if p < 0. { ROUNDING } else { p })
            .collect::<Vec<Probability>>();
        if !weights.iter().sum::<Probability>().is_finite() {
            return Err(Fault::Unsampleable {
                state: self.game.key(seat),
                seat,
                weights,
            });
        }
        if !weights.iter().any(|p| *p > 0.) {
            return Err(Fault::Degenerate {
                state: self.game.key(seat),
                seat,
            });
        }
        let i = WeightedIndex::new(&weights)
            .map_err(|_| Fault::Unsampleable {
                state: self.game.key(seat),
                seat,
                weights: weights.clone(),
            })?
            .sample(&mut *self.rng);
        Ok(legal[i])
    }
}

/// Simulate one episode with `home` in seat 1 and `away` in seat 2.
pub fn simulate<G, R>(
    home: &dyn Policy<G>,
    away: &dyn Policy<G>,
    rng: &mut R,
) -> anyhow::Result<Vec<Utility>>
where
    G: Game,
    R: Rng + ?Sized,
{
    Episode::new([home, away], rng).run()
}

/// Decode two policy files and play them against each other once.
pub fn duel<G, R>(home: &Path, away: &Path, rng: &mut R) -> anyhow::Result<Vec<Utility>>
where
    G: Game,
    R: Rng + ?Sized,
{
    let home = decode::<G>(home)?;
    let away = decode::<G>(away)?;
    simulate::<G, R>(&home, &away, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn only(action: Action) -> Procedural<impl Fn(&Rps, Seat) -> Distribution> {
        Procedural::new(move |_: &Rps, _: Seat| Distribution::from([(action, 1.)]))
    }

    #[test]
    fn returns_one_utility_per_seat() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..100 {
            let returns = simulate::<Kuhn, _>(&Uniform, &Uniform, rng).unwrap();
            assert_eq!(returns.len(), N);
            assert_eq!(returns.iter().sum::<Utility>(), 0.);
        }
    }

    #[test]
    fn fixed_throws_decide_rps() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let rock = TabularPolicy::from_policy(&only(0));
        let paper = TabularPolicy::from_policy(&only(1));
        assert_eq!(simulate::<Rps, _>(&rock, &paper, rng).unwrap(), vec![-1., 1.]);
        assert_eq!(simulate::<Rps, _>(&paper, &rock, rng).unwrap(), vec![1., -1.]);
        assert_eq!(simulate::<Rps, _>(&rock, &rock, rng).unwrap(), vec![0., 0.]);
    }

    #[test]
    fn same_seed_same_episodes() {
        let play = |seed| {
            let ref mut rng = SmallRng::seed_from_u64(seed);
            (0..50)
                .map(|_| simulate::<Kuhn, _>(&Uniform, &Uniform, rng).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(play(7), play(7));
    }

    #[test]
    fn zero_mass_is_degenerate() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let nothing = Procedural::new(|_: &Rps, _: Seat| Distribution::new());
        let error = simulate::<Rps, _>(&Uniform, &nothing, rng).unwrap_err();
        assert_eq!(
            error.downcast_ref::<Fault>(),
            Some(&Fault::Degenerate {
                state: "#1".into(),
                seat: 1
            })
        );
    }

    #[test]
    fn unbounded_weights_are_not_degenerate() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        for weight in [Probability::INFINITY, Probability::NAN, Probability::MAX] {
            let wild = Procedural::new(move |_: &Rps, _: Seat| {
                Distribution::from([(0, weight), (1, Probability::MAX)])
            });
            let error = simulate::<Rps, _>(&wild, &Uniform, rng).unwrap_err();
            assert!(
                matches!(
                    error.downcast_ref::<Fault>(),
                    Some(Fault::Unsampleable { seat: 0, .. })
                ),
                "weight {}",
                weight
            );
        }
    }

    #[test]
    fn negative_weights_read_as_zero() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let scissors = Procedural::new(|_: &Rps, _: Seat| {
            Distribution::from([(0, -1.), (2, 1.)])
        });
        let returns = simulate::<Rps, _>(&scissors, &only(1), rng).unwrap();
        assert_eq!(returns, vec![1., -1.]);
    }

    #[test]
    fn zero_row_fails_when_reached() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut table = TabularPolicy::<Kuhn>::new();
        table.assign(0, vec![0., 0.]).unwrap();
        let error = (0..100)
            .map(|_| simulate::<Kuhn, _>(&table, &Uniform, rng))
            .find_map(|result| result.err())
            .unwrap();
        assert!(matches!(
            error.downcast_ref::<Fault>(),
            Some(Fault::Degenerate { seat: 0, .. })
        ));
    }

    #[test]
    fn duel_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let ref home = dir.path().join("home.csv");
        let ref away = dir.path().join("away.csv");
        encode::<Rps, _>(&only(2), home).unwrap();
        encode::<Rps, _>(&only(1), away).unwrap();
        let ref mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(duel::<Rps, _>(home, away, rng).unwrap(), vec![1., -1.]);
    }
}
