use std::fmt::Display;

use derive_more::Debug;
use fres::Mono;
use fres::util::format::subscript;

/// Positive integer weights of the variables. The weighted degree of
/// `x^e` is `Σ wᵢ eᵢ`; a variable without a weight counts as `1`.
#[derive(Clone, PartialEq, Eq, Debug)]
#[debug("{:?}", _0)]
pub struct Weights(Vec<isize>);

impl Weights {
    pub fn new(weights: Vec<isize>) -> Self {
        assert!(weights.iter().all(|&w| w > 0), "weights must be positive.");
        Self(weights)
    }

    pub fn standard(nvars: usize) -> Self {
        Self(vec![1; nvars])
    }

    pub fn nvars(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[isize] {
        &self.0
    }

    pub fn of(&self, m: &Mono) -> isize {
        m.iter().map(|(&i, &e)|
            self.0.get(i).copied().unwrap_or(1) * (e as isize)
        ).sum()
    }
}

/// A monomial `m·e_comp` of a graded free module.
///
/// `deg` is the weighted degree of `m` plus the shift of `e_comp`.
/// Field order gives the module order: degree first, then grevlex on
/// `m`, then the component.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModMono {
    pub(crate) deg: isize,
    pub(crate) mono: Mono,
    pub(crate) comp: usize,
}

impl ModMono {
    pub fn new(mono: Mono, comp: usize, shift: isize, w: &Weights) -> Self {
        let deg = w.of(&mono) + shift;
        Self { deg, mono, comp }
    }

    pub fn deg(&self) -> isize {
        self.deg
    }

    pub fn mono(&self) -> &Mono {
        &self.mono
    }

    pub fn comp(&self) -> usize {
        self.comp
    }

    /// The shift of `e_comp` this monomial was built against.
    pub fn shift(&self, w: &Weights) -> isize {
        self.deg - w.of(&self.mono)
    }

    pub fn mul_mono(&self, m: &Mono, w: &Weights) -> Self {
        Self {
            deg: self.deg + w.of(m),
            mono: &self.mono * m,
            comp: self.comp
        }
    }

    pub fn divides(&self, other: &Self) -> bool {
        self.comp == other.comp && self.mono.divides(&other.mono)
    }
}

impl Display for ModMono {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.mono.is_one() {
            write!(f, "e{}", subscript(self.comp))
        } else {
            write!(f, "{}e{}", self.mono, subscript(self.comp))
        }
    }
}

impl std::fmt::Debug for ModMono {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
