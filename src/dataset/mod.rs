mod dataset;
mod market1501;
mod record;
mod stats;

pub use dataset::*;
pub use market1501::*;
pub use record::*;
pub use stats::*;
