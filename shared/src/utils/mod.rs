pub mod math_util;

pub use math_util::*;
