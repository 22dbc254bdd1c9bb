mod mdeg;
mod mono;
mod poly;
mod poly_ring;

pub use mdeg::*;
pub use mono::*;
pub use poly::*;
pub use poly_ring::*;
