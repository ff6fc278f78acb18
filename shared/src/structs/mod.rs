pub mod curve_weights;
pub mod duration_class;
pub mod fees;

pub use curve_weights::*;
pub use duration_class::*;
pub use fees::*;
