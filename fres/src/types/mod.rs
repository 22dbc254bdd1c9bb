mod ratio;
mod ff;
mod poly;

pub use ratio::*;
pub use ff::*;
pub use poly::*;
