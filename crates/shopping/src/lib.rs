mod aggregation;
mod export;

pub use aggregation::*;
pub use export::*;
