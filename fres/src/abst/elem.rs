use std::fmt::{Debug, Display};

/// An element of a coefficient ring or of a polynomial ring over one.
///
/// The bounds include those of `nalgebra::Scalar`, so every `Elem` can be
/// a matrix entry.
pub trait Elem:
    Default +
    PartialEq +
    Eq +
    Clone +
    Send +
    Sync +
    Display +
    Debug +
    'static
{
    /// The name of the ring, used when printing `PolyRing`s such as `Q[x, y]`.
    fn math_symbol() -> String;
}

