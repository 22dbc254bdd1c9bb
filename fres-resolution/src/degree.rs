use std::fmt::Display;
use std::ops::{Add, AddAssign};

use auto_impl_ops::auto_ops;
use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use fres::Mono;
use fres_engine::Weights;
use crate::error::{ensure, Result};

/// A degree in `Zᵏ`. Scalar degrees are those with `k = 1`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Degree(Vec<isize>);

impl Degree {
    pub fn new(data: Vec<isize>) -> Self {
        Self(data)
    }

    pub fn scalar(d: isize) -> Self {
        Self(vec![d])
    }

    pub fn zero(dim: usize) -> Self {
        Self(vec![0; dim])
    }

    pub fn dim(&self) -> usize {
        self.0.len()
    }

    pub fn is_scalar(&self) -> bool {
        self.dim() == 1
    }

    pub fn as_scalar(&self) -> Option<isize> {
        if self.is_scalar() { Some(self.0[0]) } else { None }
    }

    pub fn as_slice(&self) -> &[isize] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&d| d == 0)
    }

    /// `a·self`.
    pub fn scale(&self, a: isize) -> Self {
        Self(self.0.iter().map(|d| a * d).collect())
    }

    /// The sum of the components.
    pub fn total(&self) -> isize {
        self.0.iter().sum()
    }
}

impl From<isize> for Degree {
    fn from(d: isize) -> Self {
        Self::scalar(d)
    }
}

impl From<Vec<isize>> for Degree {
    fn from(data: Vec<isize>) -> Self {
        Self(data)
    }
}

impl<const N: usize> From<[isize; N]> for Degree {
    fn from(data: [isize; N]) -> Self {
        Self(data.to_vec())
    }
}

impl Display for Degree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.as_scalar() {
            Some(d) => write!(f, "{d}"),
            None => write!(f, "({})", self.0.iter().join(", "))
        }
    }
}

#[auto_ops]
impl AddAssign<&Degree> for Degree {
    fn add_assign(&mut self, rhs: &Degree) {
        assert_eq!(self.dim(), rhs.dim(), "degree dimension mismatch.");
        for (a, b) in self.0.iter_mut().zip(rhs.0.iter()) {
            *a += b;
        }
    }
}

/// Degrees of the variables of a polynomial ring.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grading {
    degrees: Vec<Degree>,
    dim: usize,
}

impl Grading {
    pub fn new(degrees: Vec<Degree>) -> Result<Self> {
        let dim = degrees.first().map(|d| d.dim()).unwrap_or(1);
        ensure!(
            degrees.iter().all(|d| d.dim() == dim),
            Config, "variable degrees must share a dimension."
        );
        Ok(Self { degrees, dim })
    }

    /// Every variable in degree `1`.
    pub fn standard(nvars: usize) -> Self {
        Self { degrees: vec![Degree::scalar(1); nvars], dim: 1 }
    }

    pub fn degrees(&self) -> &[Degree] {
        &self.degrees
    }

    pub fn nvars(&self) -> usize {
        self.degrees.len()
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn zero(&self) -> Degree {
        Degree::zero(self.dim)
    }

    /// `Σ eₖ·deg(xₖ)` for `m = Π xₖ^eₖ`.
    pub fn degree_of(&self, m: &Mono) -> Degree {
        m.iter().fold(self.zero(), |mut res, (&k, &e)| {
            if let Some(d) = self.degrees.get(k) {
                res += d.scale(e as isize);
            }
            res
        })
    }

    fn is_positive(&self) -> bool {
        self.degrees.iter().all(|d| d.total() > 0)
    }

    /// Weights for the engine's monomial order. These are the totals of
    /// the variable degrees when all of them are positive, and the
    /// standard weights otherwise.
    pub fn weights(&self) -> Weights {
        if self.is_positive() {
            Weights::new(self.degrees.iter().map(|d| d.total()).collect())
        } else {
            Weights::standard(self.nvars())
        }
    }

    /// `d` under the functional defining `weights`.
    pub fn weigh(&self, d: &Degree) -> isize {
        if self.is_positive() { d.total() } else { 0 }
    }
}
