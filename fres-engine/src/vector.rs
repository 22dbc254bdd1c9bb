use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Sub, SubAssign, Neg};

use auto_impl_ops::auto_ops;
use itertools::Itertools;
use num_traits::{Zero, One};

use fres::{Field, Mono, Poly};
use crate::{ModMono, Weights};

/// An element `Σ aᵢ mᵢ e_{cᵢ}` of a graded free module `S^r`.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct ModVec<R> {
    data: BTreeMap<ModMono, R>
}

impl<R> ModVec<R> {
    pub fn nterms(&self) -> usize {
        self.data.len()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&ModMono, &R)> {
        self.data.iter()
    }

    pub fn lead(&self) -> Option<(&ModMono, &R)> {
        self.data.iter().next_back()
    }

    pub fn lead_mono(&self) -> Option<&ModMono> {
        self.data.keys().next_back()
    }

    /// The degree of the leading term. For a homogeneous vector this is
    /// the degree of every term.
    pub fn degree(&self) -> Option<isize> {
        self.lead_mono().map(|m| m.deg)
    }

    pub fn components(&self) -> impl Iterator<Item = usize> + '_ {
        self.data.keys().map(|m| m.comp).sorted().dedup()
    }
}

impl<R> ModVec<R>
where R: Field {
    pub fn from_terms<I>(terms: I) -> Self
    where I: IntoIterator<Item = (ModMono, R)> {
        let mut res = Self::zero();
        for (m, r) in terms {
            res.add_term(m, r);
        }
        res
    }

    /// The basis vector `e_comp` of degree `shift`.
    pub fn unit(comp: usize, shift: isize) -> Self {
        let m = ModMono { deg: shift, mono: Mono::one(), comp };
        Self::from_terms([(m, R::one())])
    }

    /// `f·e_comp`.
    pub fn from_poly(f: &Poly<R>, comp: usize, shift: isize, w: &Weights) -> Self {
        Self::from_terms(f.iter().map(|(m, r)|
            (ModMono::new(m.clone(), comp, shift, w), r.clone())
        ))
    }

    /// The vector with entries `polys` in a module with the given shifts.
    pub fn from_polys(polys: &[Poly<R>], shifts: &[isize], w: &Weights) -> Self {
        assert_eq!(polys.len(), shifts.len());
        let mut res = Self::zero();
        for (i, f) in polys.iter().enumerate() {
            res += Self::from_poly(f, i, shifts[i], w);
        }
        res
    }

    pub fn add_term(&mut self, m: ModMono, r: R) {
        if r.is_zero() {
            return
        }
        match self.data.entry(m) {
            Entry::Occupied(mut e) => {
                *e.get_mut() += r;
                if e.get().is_zero() {
                    e.remove();
                }
            },
            Entry::Vacant(e) => {
                e.insert(r);
            }
        }
    }

    pub fn remove_term(&mut self, m: &ModMono) -> Option<R> {
        self.data.remove(m)
    }

    pub fn lead_coeff(&self) -> R {
        self.lead().map(|(_, r)| r.clone()).unwrap_or_else(R::zero)
    }

    /// The `comp`-th entry as a polynomial.
    pub fn component(&self, comp: usize) -> Poly<R> {
        Poly::from_terms(self.data.iter().filter(|(m, _)| m.comp == comp).map(|(m, r)|
            (m.mono.clone(), r.clone())
        ))
    }

    pub fn to_polys(&self, rank: usize) -> Vec<Poly<R>> {
        (0..rank).map(|i| self.component(i)).collect()
    }

    pub fn scale(&self, r: &R) -> Self {
        if r.is_zero() {
            return Self::zero()
        }
        let data = self.data.iter().map(|(m, a)|
            (m.clone(), a.clone() * r)
        ).collect();
        Self { data }
    }

    /// `r·n·self`.
    pub fn mul_term(&self, n: &Mono, r: &R, w: &Weights) -> Self {
        if r.is_zero() {
            return Self::zero()
        }
        let data = self.data.iter().map(|(m, a)|
            (m.mul_mono(n, w), a.clone() * r)
        ).collect();
        Self { data }
    }

    pub fn mul_poly(&self, f: &Poly<R>, w: &Weights) -> Self {
        let mut res = Self::zero();
        for (n, r) in f.iter() {
            res += self.mul_term(n, r, w);
        }
        res
    }

    /// Scales the vector so that its leading coefficient is one.
    /// Returns the original leading coefficient.
    pub fn make_monic(&mut self) -> Option<R> {
        let lc = self.lead().map(|(_, r)| r.clone())?;
        let inv = lc.inv()?;
        if !inv.is_one() {
            *self = self.scale(&inv);
        }
        Some(lc)
    }

    /// Drops the `comp`-th component and renumbers the components above it.
    pub fn remove_component(&self, comp: usize) -> Self {
        let data = self.data.iter().filter(|(m, _)| m.comp != comp).map(|(m, r)| {
            let c = if m.comp > comp { m.comp - 1 } else { m.comp };
            (ModMono { deg: m.deg, mono: m.mono.clone(), comp: c }, r.clone())
        }).collect();
        Self { data }
    }

    pub fn fmt_with<S>(&self, names: &[S]) -> String
    where S: Display {
        let rank = self.data.keys().map(|m| m.comp + 1).max().unwrap_or(0);
        let entries = self.to_polys(rank).iter().map(|f| f.fmt_with(names)).join(", ");
        format!("[{entries}]")
    }
}

impl<R> Zero for ModVec<R>
where R: Field {
    fn zero() -> Self {
        Self { data: BTreeMap::new() }
    }

    fn is_zero(&self) -> bool {
        self.data.is_empty()
    }
}

impl<R> Debug for ModVec<R>
where R: Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = fres::util::format::lc(self.data.iter().rev());
        write!(f, "{s}")
    }
}

impl<R> Neg for ModVec<R>
where R: Field {
    type Output = Self;
    fn neg(self) -> Self::Output {
        let data = self.data.into_iter().map(|(m, r)| (m, -r)).collect();
        Self { data }
    }
}

#[auto_ops]
impl<R> AddAssign<&ModVec<R>> for ModVec<R>
where R: Field {
    fn add_assign(&mut self, rhs: &ModVec<R>) {
        for (m, r) in rhs.data.iter() {
            self.add_term(m.clone(), r.clone());
        }
    }
}

#[auto_ops]
impl<R> SubAssign<&ModVec<R>> for ModVec<R>
where R: Field {
    fn sub_assign(&mut self, rhs: &ModVec<R>) {
        for (m, r) in rhs.data.iter() {
            self.add_term(m.clone(), -r.clone());
        }
    }
}
