mod policy;
mod procedural;
mod tabular;

pub use policy::*;
pub use procedural::*;
pub use tabular::*;
