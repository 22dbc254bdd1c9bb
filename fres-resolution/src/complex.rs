use std::collections::BTreeMap;
use std::fmt::Display;

use itertools::Itertools;

use fres::{Field, Poly};
use fres_matrix::{Mat, MatType};
use crate::{FreeModule, FreeResolution};

/// The chain complex `0 <- F₀ <- F₁ <- ⋯ <- Fₙ <- 0` underlying a
/// free resolution, with `d(i) : F_i → F_{i-1}` for `1 ≤ i ≤ n`.
#[derive(Clone, Debug)]
pub struct ChainComplex<R>
where R: Field {
    name: String,
    ranks: Vec<usize>,
    d_matrices: BTreeMap<isize, Mat<Poly<R>>>,
}

impl<R> ChainComplex<R>
where R: Field {
    pub fn from_resolution(res: &FreeResolution<R>) -> Self {
        let d_matrices = res.mats().iter().enumerate().map(|(i, a)|
            (i as isize + 1, a.clone())
        ).collect();

        Self {
            name: res.name().to_string(),
            ranks: res.ranks(),
            d_matrices,
        }
    }

    pub fn d_deg(&self) -> isize {
        -1
    }

    pub fn rank(&self, i: isize) -> usize {
        usize::try_from(i).ok().and_then(|i|
            self.ranks.get(i).copied()
        ).unwrap_or(0)
    }

    pub fn support(&self) -> impl Iterator<Item = isize> {
        0..self.ranks.len() as isize
    }

    pub fn d_matrix(&self, i: isize) -> Mat<Poly<R>> {
        match self.d_matrices.get(&i) {
            Some(a) => a.clone(),
            None => Mat::zero((self.rank(i + self.d_deg()), self.rank(i)))
        }
    }

    pub fn check_d_at(&self, i: isize) -> bool {
        let d0 = self.d_matrix(i);
        let d1 = self.d_matrix(i + self.d_deg());
        (d1 * d0).is_zero()
    }

    /// Whether `d ∘ d = 0` everywhere.
    pub fn is_d_zero(&self) -> bool {
        self.support().all(|i| self.check_d_at(i))
    }

    pub fn display_d_at(&self, i: isize) -> String {
        let c = |i| FreeModule::new(&self.name, self.rank(i));
        let (c0, c1) = (c(i), c(i + self.d_deg()));
        let d = self.d_matrix(i);

        if d.is_zero() {
            format!("C[{i}] {c0} -> {c1}; zero.")
        } else {
            format!("C[{i}] {c0} -> {c1}\n{d}.")
        }
    }

    pub fn display_d(&self) -> String {
        self.support().filter(|&i|
            self.rank(i) > 0 && self.rank(i + self.d_deg()) > 0
        ).map(|i| self.display_d_at(i)).join("\n\n")
    }
}

impl<R> Display for ChainComplex<R>
where R: Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.support().map(|i|
            format!("C[{i}]: {}", FreeModule::new(&self.name, self.rank(i)))
        ).join("\n");
        write!(f, "{s}")
    }
}
