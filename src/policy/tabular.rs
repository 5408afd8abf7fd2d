use super::*;
use crate::game::*;
use crate::*;
use std::collections::HashMap;

/// A policy frozen into a table: one row per spot, one column per action id.
///
/// The scaffold always covers every spot of the game, in enumeration order,
/// so two tables of the same game line up row for row. Rows are written and
/// read by their history identifier but consulted during play by information
/// state, so every state a seat cannot tell apart plays from the same row.
#[derive(Debug, Clone)]
pub struct TabularPolicy<G>
where
    G: Game,
{
    spots: Vec<Spot<G>>,
    index: HashMap<String, usize>,
    infos: HashMap<String, usize>,
    array: Vec<Vec<Probability>>,
}

impl<G> TabularPolicy<G>
where
    G: Game,
{
    /// Fresh scaffold, uniform over the legal actions of every spot.
    pub fn new() -> Self {
        Self::from_policy(&Uniform)
    }

    /// Freeze any policy by querying it once at every spot.
    /// Rows are normalized over the legal actions, see `Policy::row`.
    pub fn from_policy<P>(policy: &P) -> Self
    where
        P: Policy<G> + ?Sized,
    {
        let spots = Spot::<G>::enumerate();
        let index = spots
            .iter()
            .enumerate()
            .map(|(i, spot)| (spot.key().to_string(), i))
            .collect::<HashMap<_, _>>();
        let infos = spots
            .iter()
            .enumerate()
            .map(|(i, spot)| (spot.info().to_string(), i))
            .collect::<HashMap<_, _>>();
        let array = spots
            .iter()
            .map(|spot| policy.row(spot.game(), spot.seat()))
            .collect::<Vec<_>>();
        Self {
            spots,
            index,
            infos,
            array,
        }
    }

    pub fn spots(&self) -> &[Spot<G>] {
        &self.spots
    }
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.spots.iter().map(|spot| spot.key())
    }
    pub fn rows(&self) -> impl Iterator<Item = (&Spot<G>, &[Probability])> {
        self.spots
            .iter()
            .zip(self.array.iter().map(|row| row.as_slice()))
    }
    pub fn len(&self) -> usize {
        self.spots.len()
    }
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// Row for a state identifier, if the game has such a spot.
    pub fn lookup(&self, key: &str) -> Option<&[Probability]> {
        self.index.get(key).map(|i| self.array[*i].as_slice())
    }

    /// Row the seat plays from at this state, found by information state.
    pub fn resolve(&self, game: &G, seat: Seat) -> Option<&[Probability]> {
        self.infos
            .get(&game.info(seat))
            .map(|i| self.array[*i].as_slice())
    }

    /// Overwrite the row at `i`. The row must span every action id.
    /// A bad row is reported at the line it would take in an encoded table.
    pub fn assign(&mut self, i: usize, row: Vec<Probability>) -> Result<(), Fault> {
        let line = i + 2;
        if row.len() != G::actions() {
            return Err(Fault::Malformed {
                line,
                reason: format!("{} cells, game has {} actions", row.len(), G::actions()),
            });
        }
        let rows = self.array.len();
        let slot = self.array.get_mut(i).ok_or_else(|| Fault::Malformed {
            line,
            reason: format!("table has {} rows", rows),
        })?;
        *slot = row;
        Ok(())
    }
}

impl<G> Default for TabularPolicy<G>
where
    G: Game,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<G> PartialEq for TabularPolicy<G>
where
    G: Game,
{
    fn eq(&self, other: &Self) -> bool {
        self.keys().eq(other.keys()) && self.array == other.array
    }
}

impl<G> Policy<G> for TabularPolicy<G>
where
    G: Game,
{
    /// Row entries at the legal actions. Empty if the state has no row.
    fn distribution(&self, game: &G, seat: Seat) -> Distribution {
        match self.resolve(game, seat) {
            None => Distribution::new(),
            Some(row) => game
                .legal(seat)
                .into_iter()
                .filter_map(|a| row.get(a).map(|p| (a, *p)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaffold_covers_spots() {
        let table = TabularPolicy::<Kuhn>::new();
        assert_eq!(table.len(), 12);
        assert_eq!(table.lookup("0, 1"), Some(&[0.5, 0.5][..]));
        assert_eq!(table.lookup("0, 2"), None);
        assert_eq!(table.lookup("0, 1, 1, 1"), None);
    }

    #[test]
    fn same_information_same_row() {
        let mut table = TabularPolicy::<Kuhn>::new();
        table.assign(0, vec![1., 0.]).unwrap();
        let queen = Kuhn::root().apply(0).apply(1);
        let king = Kuhn::root().apply(0).apply(2);
        assert_eq!(table.distribution(&queen, 0), Distribution::from([(0, 1.), (1, 0.)]));
        assert_eq!(table.distribution(&king, 0), table.distribution(&queen, 0));
        assert_eq!(table.resolve(&king, 0), table.lookup("0, 1"));
    }

    #[test]
    fn assign_rejects_bad_rows() {
        let mut table = TabularPolicy::<Kuhn>::new();
        assert!(matches!(
            table.assign(3, vec![1.]),
            Err(Fault::Malformed { line: 5, .. })
        ));
        assert!(matches!(
            table.assign(12, vec![1., 0.]),
            Err(Fault::Malformed { line: 14, .. })
        ));
        assert!(table == TabularPolicy::new());
    }

    #[test]
    fn freeze_procedural() {
        let rock = Procedural::new(|_: &Rps, _: Seat| Distribution::from([(0, 1.)]));
        let table = TabularPolicy::from_policy(&rock);
        assert_eq!(table.lookup("#0"), Some(&[1., 0., 0.][..]));
        assert_eq!(table.lookup("#1"), Some(&[1., 0., 0.][..]));
    }

    #[test]
    fn freeze_normalizes_unnormalized_weights() {
        let flat = Procedural::new(|game: &Kuhn, seat: Seat| {
            game.legal(seat).into_iter().map(|a| (a, 1.)).collect::<Distribution>()
        });
        let table = TabularPolicy::from_policy(&flat);
        assert!(table.rows().all(|(_, row)| row == [0.5, 0.5]));
    }

    #[test]
    fn distribution_restricted_to_legal() {
        let mut table = TabularPolicy::<Kuhn>::new();
        table.assign(0, vec![0.25, 0.75]).unwrap();
        let game = Kuhn::root().apply(0).apply(1);
        assert_eq!(
            table.distribution(&game, 0),
            Distribution::from([(0, 0.25), (1, 0.75)])
        );
        assert!(table.distribution(&game, 1).is_empty());
        assert!(table.distribution(&Kuhn::root(), 0).is_empty());
    }
}
