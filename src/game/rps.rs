use super::*;
use crate::*;

/// Throws in Rock-Paper-Scissors.
///
/// R beats S, S beats P, P beats R.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
enum Throw {
    R,
    P,
    S,
}

impl From<Action> for Throw {
    fn from(action: Action) -> Self {
        match action {
            0 => Self::R,
            1 => Self::P,
            2 => Self::S,
            _ => unreachable!("rps has three actions"),
        }
    }
}

impl Throw {
    fn beats(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::R, Self::S) | (Self::S, Self::P) | (Self::P, Self::R)
        )
    }
}

/// Rock-Paper-Scissors as a single simultaneous node.
///
/// The root is the only decision; both seats throw at once and the
/// joint transition lands on a terminal state holding both throws.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Rps(Option<(Action, Action)>);

impl Game for Rps {
    fn root() -> Self {
        Self(None)
    }
    fn actions() -> usize {
        3
    }
    fn turn(&self) -> Turn {
        match self.0 {
            None => Turn::Simultaneous,
            Some(_) => Turn::Terminal,
        }
    }
    fn legal(&self, seat: Seat) -> Vec<Action> {
        if self.turn().involves(seat) {
            (0..Self::actions()).collect()
        } else {
            vec![]
        }
    }
    fn chances(&self) -> Vec<(Action, Probability)> {
        vec![]
    }
    fn apply(&self, _: Action) -> Self {
        unreachable!("rps has no single-seat transitions")
    }
    fn apply_joint(&self, actions: &[Action]) -> Self {
        match actions {
            [a, b] => Self(Some((*a, *b))),
            _ => unreachable!("rps takes one throw per seat"),
        }
    }
    fn returns(&self) -> Vec<Utility> {
        match self.0 {
            None => vec![0.; N],
            Some((a, b)) => {
                let (a, b) = (Throw::from(a), Throw::from(b));
                match (a.beats(&b), b.beats(&a)) {
                    (true, _) => vec![1., -1.],
                    (_, true) => vec![-1., 1.],
                    _ => vec![0., 0.],
                }
            }
        }
    }
    fn history(&self) -> Vec<Action> {
        match self.0 {
            None => vec![],
            Some((a, b)) => vec![a, b],
        }
    }
    fn describe(&self, action: Action) -> String {
        format!("{:?}", Throw::from(action))
    }
}

impl std::fmt::Display for Rps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            None => write!(f, "rps ({})", self.turn()),
            Some((a, b)) => write!(f, "rps {:?} v {:?}", Throw::from(a), Throw::from(b)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_simultaneous() {
        assert_eq!(Rps::root().turn(), Turn::Simultaneous);
        assert_eq!(Rps::root().key(0), "#0");
        assert_eq!(Rps::root().key(1), "#1");
        assert_eq!(Rps::root().info(1), "#1");
    }

    #[test]
    fn joint_throw_is_terminal() {
        let game = Rps::root().apply_joint(&[0, 2]);
        assert!(game.turn().is_terminal());
        assert_eq!(game.history_str(), "0, 2");
        assert!(game.legal(0).is_empty());
    }

    #[test]
    fn payoffs() {
        let play = |a, b| Rps::root().apply_joint(&[a, b]).returns();
        assert_eq!(play(0, 2), vec![1., -1.]);
        assert_eq!(play(0, 1), vec![-1., 1.]);
        assert_eq!(play(2, 1), vec![1., -1.]);
        assert_eq!(play(1, 1), vec![0., 0.]);
    }
}
