mod catalog;
mod game;
mod kuhn;
mod rps;
mod spot;
mod turn;

pub use catalog::*;
pub use game::*;
pub use kuhn::*;
pub use rps::*;
pub use spot::*;
pub use turn::*;
