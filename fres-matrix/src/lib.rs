mod mat;

pub use mat::*;
