mod episode;
mod registry;
mod standings;
mod tournament;

#[cfg(feature = "cli")]
mod cli;

pub use episode::*;
pub use registry::*;
pub use standings::*;
pub use tournament::*;

#[cfg(feature = "cli")]
pub use cli::*;
