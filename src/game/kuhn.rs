//! Kuhn poker: three cards, one card each, one betting round.
//!
//! Two chance nodes deal a private card to P1 then P2. Each seat antes 1.
//! Actions are `Pass` (check/fold) and `Bet` (bet/call) with a bet size of 1.
//! The higher card wins at showdown.
use super::*;
use crate::*;

const CARDS: usize = 3;
const PASS: Action = 0;
const BET: Action = 1;

#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
enum Move {
    Pass,
    Bet,
}

impl From<Action> for Move {
    fn from(action: Action) -> Self {
        match action {
            PASS => Self::Pass,
            BET => Self::Bet,
            _ => unreachable!("kuhn has two actions"),
        }
    }
}

/// A Kuhn poker state, stored as its full action history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Kuhn(Vec<Action>);

impl Kuhn {
    fn cards(&self) -> &[Action] {
        &self.0[..self.0.len().min(N)]
    }
    fn bets(&self) -> Vec<Move> {
        self.0.iter().skip(N).copied().map(Move::from).collect()
    }
    /// Winner at showdown, if the betting ended there.
    fn showdown(&self) -> Seat {
        match self.cards() {
            [a, b] if a > b => 0,
            _ => 1,
        }
    }
}

impl Game for Kuhn {
    fn root() -> Self {
        Self::default()
    }
    fn actions() -> usize {
        2
    }
    fn turn(&self) -> Turn {
        if self.0.len() < N {
            return Turn::Chance;
        }
        match self.bets().as_slice() {
            [] | [Move::Pass] | [Move::Bet] | [Move::Pass, Move::Bet] => {
                Turn::Choice(self.bets().len() % N)
            }
            _ => Turn::Terminal,
        }
    }
    fn legal(&self, seat: Seat) -> Vec<Action> {
        if self.turn().involves(seat) {
            vec![PASS, BET]
        } else {
            vec![]
        }
    }
    fn chances(&self) -> Vec<(Action, Probability)> {
        match self.turn() {
            Turn::Chance => {
                let dealt = self.cards();
                let remaining = (0..CARDS)
                    .filter(|c| !dealt.contains(c))
                    .collect::<Vec<_>>();
                let p = 1. / remaining.len() as Probability;
                remaining.into_iter().map(|c| (c, p)).collect()
            }
            _ => vec![],
        }
    }
    fn apply(&self, action: Action) -> Self {
        let mut history = self.0.clone();
        history.push(action);
        Self(history)
    }
    fn apply_joint(&self, actions: &[Action]) -> Self {
        actions.iter().fold(self.clone(), |game, a| game.apply(*a))
    }
    fn returns(&self) -> Vec<Utility> {
        let (winner, stake) = match self.bets().as_slice() {
            [Move::Pass, Move::Pass] => (self.showdown(), 1.),
            [Move::Bet, Move::Pass] => (0, 1.),
            [Move::Pass, Move::Bet, Move::Pass] => (1, 1.),
            [Move::Bet, Move::Bet] | [Move::Pass, Move::Bet, Move::Bet] => (self.showdown(), 2.),
            _ => return vec![0.; N],
        };
        (0..N)
            .map(|seat| if seat == winner { stake } else { -stake })
            .collect()
    }
    fn history(&self) -> Vec<Action> {
        self.0.clone()
    }
    /// Own card and the public betting, never the opponent's card.
    fn info(&self, seat: Seat) -> String {
        let card = self.0.get(seat).map(|c| c.to_string()).unwrap_or_default();
        let bets = self
            .0
            .iter()
            .skip(N)
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        format!("{}|{}", card, bets)
    }
    fn describe(&self, action: Action) -> String {
        match self.turn() {
            Turn::Chance => format!("Deal:{}", action),
            _ => format!("{:?}", Move::from(action)),
        }
    }
}

impl std::fmt::Display for Kuhn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cards = self
            .cards()
            .iter()
            .map(|c| ['J', 'Q', 'K'][*c].to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let bets = self
            .bets()
            .iter()
            .map(|m| format!("{:?}", m))
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "[{}] {} ({})", cards, bets, self.turn())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(actions: &[Action]) -> Kuhn {
        actions.iter().fold(Kuhn::root(), |g, a| g.apply(*a))
    }

    #[test]
    fn deals_before_betting() {
        assert_eq!(play(&[]).turn(), Turn::Chance);
        assert_eq!(play(&[2]).turn(), Turn::Chance);
        assert_eq!(play(&[2, 0]).turn(), Turn::Choice(0));
        assert_eq!(play(&[2, 0, PASS]).turn(), Turn::Choice(1));
        assert_eq!(play(&[2, 0, PASS, BET]).turn(), Turn::Choice(0));
    }

    #[test]
    fn second_deal_excludes_first_card() {
        let chances = play(&[1]).chances();
        assert_eq!(chances, vec![(0, 0.5), (2, 0.5)]);
    }

    #[test]
    fn terminal_returns() {
        assert_eq!(play(&[2, 0, PASS, PASS]).returns(), vec![1., -1.]);
        assert_eq!(play(&[0, 2, BET, PASS]).returns(), vec![1., -1.]);
        assert_eq!(play(&[2, 0, PASS, BET, PASS]).returns(), vec![-1., 1.]);
        assert_eq!(play(&[0, 1, BET, BET]).returns(), vec![-2., 2.]);
        assert_eq!(play(&[1, 0, PASS, BET, BET]).returns(), vec![2., -2.]);
        assert!(play(&[1, 0, BET, BET]).turn().is_terminal());
    }

    #[test]
    fn legal_only_for_actor() {
        let game = play(&[1, 2, BET]);
        assert_eq!(game.legal(1), vec![PASS, BET]);
        assert!(game.legal(0).is_empty());
    }

    #[test]
    fn history_identifier() {
        assert_eq!(play(&[1, 2, BET]).history_str(), "1, 2, 1");
        assert_eq!(play(&[1, 2, BET]).key(1), "1, 2, 1");
    }

    #[test]
    fn information_hides_opponent_card() {
        assert_eq!(play(&[0, 1]).info(0), play(&[0, 2]).info(0));
        assert_eq!(play(&[0, 2, PASS]).info(1), "2|0");
        assert_eq!(play(&[0, 2, PASS]).info(1), play(&[1, 2, PASS]).info(1));
        assert_ne!(play(&[0, 2, PASS]).info(1), play(&[0, 2, BET]).info(1));
        assert_ne!(play(&[0, 1]).info(0), play(&[1, 0]).info(0));
    }
}
