mod error;
mod degree;
mod config;
mod adapter;
mod decoder;
mod shifts;
mod free_res;
mod graded;
mod kpoly;
mod complex;

pub use error::*;
pub use degree::*;
pub use config::*;
pub use adapter::*;
pub use decoder::*;
pub use shifts::*;
pub use free_res::*;
pub use graded::*;
pub use kpoly::*;
pub use complex::*;

pub use fres_engine::Algorithm;
