mod elem;
mod ring;

pub use elem::*;
pub use ring::*;
