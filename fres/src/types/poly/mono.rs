use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::ops::{Mul, MulAssign};

use auto_impl_ops::auto_ops;
use itertools::Itertools;

use crate::util::format::{subscript, superscript};
use super::MultiDeg;

/// A monomial `x₀^{e₀} x₁^{e₁} ⋯`, ordered by grevlex with
/// `x₀ > x₁ > ⋯`.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Mono(MultiDeg<usize>);

impl Mono {
    pub fn one() -> Self {
        Self(MultiDeg::empty())
    }

    pub fn var(i: usize) -> Self {
        Self::from_iter([(i, 1)])
    }

    pub fn is_one(&self) -> bool {
        self.0.ninds() == 0
    }

    pub fn deg(&self, i: usize) -> usize {
        self.0[i]
    }

    pub fn total(&self) -> usize {
        self.0.total()
    }

    pub fn mdeg(&self) -> &MultiDeg<usize> {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (&usize, &usize)> {
        self.0.iter()
    }

    /// The largest variable index appearing in the monomial.
    pub fn max_var(&self) -> Option<usize> {
        self.0.max_index()
    }

    pub fn divides(&self, other: &Self) -> bool {
        self.0.all_leq(&other.0)
    }

    /// `self / other`, if `other` divides `self`.
    pub fn checked_div(&self, other: &Self) -> Option<Self> {
        if other.divides(self) {
            Some(Self(&self.0 - &other.0))
        } else {
            None
        }
    }

    pub fn lcm(&self, other: &Self) -> Self {
        Self(self.0.max(&other.0))
    }

    pub fn gcd(&self, other: &Self) -> Self {
        Self(self.0.min(&other.0))
    }

    pub fn is_coprime(&self, other: &Self) -> bool {
        self.gcd(other).is_one()
    }

    pub fn fmt_with<S>(&self, names: &[S]) -> String
    where S: Display {
        if self.is_one() {
            return String::from("1")
        }
        self.iter().map(|(&i, &e)| {
            let x = names.get(i).map(|s| s.to_string()).unwrap_or_else(|| format!("x{i}"));
            if e == 1 { x } else { format!("{x}^{e}") }
        }).join("*")
    }
}

impl From<MultiDeg<usize>> for Mono {
    fn from(mdeg: MultiDeg<usize>) -> Self {
        Self(mdeg)
    }
}

impl<const N: usize> From<[usize; N]> for Mono {
    fn from(exps: [usize; N]) -> Self {
        Self(MultiDeg::from(exps))
    }
}

impl FromIterator<(usize, usize)> for Mono {
    fn from_iter<T: IntoIterator<Item = (usize, usize)>>(iter: T) -> Self {
        Self(MultiDeg::from_iter(iter))
    }
}

impl Display for Mono {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_one() {
            return write!(f, "1")
        }
        let s = self.iter().map(|(&i, &e)| {
            if e == 1 {
                format!("x{}", subscript(i))
            } else {
                format!("x{}{}", subscript(i), superscript(e))
            }
        }).join("");
        write!(f, "{s}")
    }
}

impl Debug for Mono {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Ord for Mono {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp_grevlex(&other.0)
    }
}

impl PartialOrd for Mono {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[auto_ops]
impl MulAssign<&Mono> for Mono {
    fn mul_assign(&mut self, rhs: &Mono) {
        self.0 += &rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Mono::one().to_string(), "1");
        assert_eq!(Mono::from([1, 0, 2]).to_string(), "x₀x₂²");
        assert_eq!(Mono::from([0, 1, 2]).fmt_with(&["x", "y", "z"]), "y*z^2");
    }

    #[test]
    fn mul_div() {
        let a = Mono::from([1, 0, 2]);
        let b = Mono::from([0, 1, 1]);
        let c = &a * &b;
        assert_eq!(c, Mono::from([1, 1, 3]));
        assert_eq!(c.checked_div(&b), Some(a.clone()));
        assert_eq!(a.checked_div(&b), None);
        assert!(b.divides(&c));
    }

    #[test]
    fn lcm_gcd() {
        let a = Mono::from([2, 0, 1]);
        let b = Mono::from([1, 1, 0]);
        assert_eq!(a.lcm(&b), Mono::from([2, 1, 1]));
        assert_eq!(a.gcd(&b), Mono::from([1, 0, 0]));
        assert!(!a.is_coprime(&b));
        assert!(Mono::var(2).is_coprime(&Mono::var(0)));
    }

    #[test]
    fn ord() {
        let x = Mono::var(0);
        let y = Mono::var(1);
        let z = Mono::var(2);
        assert!(x > y && y > z);
        assert!(&y * &y > &x * &z);
        assert!(Mono::one() < z);
    }
}
