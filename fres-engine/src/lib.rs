mod mono;
mod vector;
mod groebner;
mod syzygy;
mod algorithm;
mod engine;

pub mod raw;

pub use mono::*;
pub use vector::*;
pub use groebner::*;
pub use syzygy::*;
pub use algorithm::*;
pub use engine::*;
