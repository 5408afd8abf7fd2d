mod decode;
mod encode;
mod report;
mod sheet;

pub use decode::*;
pub use encode::*;
pub use report::*;
pub use sheet::*;
