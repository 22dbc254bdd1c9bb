use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Neg};

use auto_impl_ops::auto_ops;
use num_traits::{Zero, One};

use crate::{Elem, Ring};
use crate::util::format::lc;
use super::Mono;

/// A multivariate polynomial `Σ a_m m` over `R`, stored as
/// `{ monomial => coefficient }` with no zero coefficients.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Poly<R> {
    data: BTreeMap<Mono, R>
}

impl<R> Poly<R> {
    pub fn nterms(&self) -> usize {
        self.data.len()
    }

    /// Terms in increasing monomial order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&Mono, &R)> {
        self.data.iter()
    }

    /// The leading term with respect to grevlex.
    pub fn lead_term(&self) -> Option<(&Mono, &R)> {
        self.data.iter().next_back()
    }

    pub fn lead_mono(&self) -> Option<&Mono> {
        self.data.keys().next_back()
    }

    pub fn coeff(&self, m: &Mono) -> Option<&R> {
        self.data.get(m)
    }

    pub fn max_var(&self) -> Option<usize> {
        self.data.keys().filter_map(|m| m.max_var()).max()
    }

    pub fn total_deg(&self) -> Option<usize> {
        self.data.keys().map(|m| m.total()).max()
    }

    pub fn is_homogeneous(&self) -> bool {
        let mut degs = self.data.keys().map(|m| m.total());
        match degs.next() {
            Some(d) => degs.all(|e| e == d),
            None => true
        }
    }
}

impl<R> Poly<R>
where R: Ring {
    pub fn from_terms<I>(terms: I) -> Self
    where I: IntoIterator<Item = (Mono, R)> {
        let mut data = BTreeMap::new();
        for (m, r) in terms {
            Self::add_term_to(&mut data, m, r);
        }
        Self { data }
    }

    pub fn from_const(r: R) -> Self {
        Self::from_terms([(Mono::one(), r)])
    }

    pub fn from_mono(m: Mono) -> Self {
        Self::from_terms([(m, R::one())])
    }

    pub fn variable(i: usize) -> Self {
        Self::from_mono(Mono::var(i))
    }

    fn add_term_to(data: &mut BTreeMap<Mono, R>, m: Mono, r: R) {
        if r.is_zero() {
            return
        }
        match data.entry(m) {
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

    pub fn is_const(&self) -> bool {
        self.data.keys().all(|m| m.is_one())
    }

    pub fn const_term(&self) -> R {
        self.data.get(&Mono::one()).cloned().unwrap_or_else(R::zero)
    }

    pub fn lead_coeff(&self) -> R {
        self.lead_term().map(|(_, r)| r.clone()).unwrap_or_else(R::zero)
    }

    pub fn scale(&self, r: &R) -> Self {
        if r.is_zero() {
            return Self::zero()
        }
        let data = self.data.iter().filter_map(|(m, a)| {
            let b = a.clone() * r;
            if b.is_zero() { None } else { Some((m.clone(), b)) }
        }).collect();
        Self { data }
    }

    /// `r · m · self`.
    pub fn mul_term(&self, m: &Mono, r: &R) -> Self {
        if r.is_zero() {
            return Self::zero()
        }
        let data = self.data.iter().filter_map(|(n, a)| {
            let b = a.clone() * r;
            if b.is_zero() { None } else { Some((n * m, b)) }
        }).collect();
        Self { data }
    }

    pub fn fmt_with<S>(&self, names: &[S]) -> String
    where S: Display {
        if self.is_zero() {
            return String::from("0")
        }

        let mut res = String::new();
        for (k, (m, r)) in self.data.iter().rev().enumerate() {
            let r = r.to_string();
            let (neg, r) = match r.strip_prefix('-') {
                Some(s) => (true, s.to_string()),
                None => (false, r)
            };
            let r = if r.contains(' ') { format!("({r})") } else { r };
            let term = if m.is_one() {
                r
            } else if r == "1" {
                m.fmt_with(names)
            } else {
                format!("{r}*{}", m.fmt_with(names))
            };

            match (k, neg) {
                (0, true)  => res.push_str(&format!("-{term}")),
                (0, false) => res.push_str(&term),
                (_, true)  => res.push_str(&format!(" - {term}")),
                (_, false) => res.push_str(&format!(" + {term}")),
            }
        }
        res
    }
}

impl<R> From<i32> for Poly<R>
where R: Ring {
    fn from(i: i32) -> Self {
        Self::from_const(R::from(i))
    }
}

impl<R> Display for Poly<R>
where R: Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = lc(self.data.iter().rev());
        write!(f, "{s}")
    }
}

impl<R> Debug for Poly<R>
where R: Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl<R> Zero for Poly<R>
where R: Ring {
    fn zero() -> Self {
        Self { data: BTreeMap::new() }
    }

    fn is_zero(&self) -> bool {
        self.data.is_empty()
    }
}

impl<R> One for Poly<R>
where R: Ring {
    fn one() -> Self {
        Self::from_const(R::one())
    }

    fn is_one(&self) -> bool {
        self.nterms() == 1 && self.const_term().is_one()
    }
}

impl<R> Neg for Poly<R>
where R: Ring {
    type Output = Self;
    fn neg(self) -> Self::Output {
        let data = self.data.into_iter().map(|(m, r)| (m, -r)).collect();
        Self { data }
    }
}

impl<R> Neg for &Poly<R>
where R: Ring {
    type Output = Poly<R>;
    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

#[auto_ops]
impl<R> AddAssign<&Poly<R>> for Poly<R>
where R: Ring {
    fn add_assign(&mut self, rhs: &Poly<R>) {
        for (m, r) in rhs.data.iter() {
            Self::add_term_to(&mut self.data, m.clone(), r.clone());
        }
    }
}

#[auto_ops]
impl<R> SubAssign<&Poly<R>> for Poly<R>
where R: Ring {
    fn sub_assign(&mut self, rhs: &Poly<R>) {
        for (m, r) in rhs.data.iter() {
            Self::add_term_to(&mut self.data, m.clone(), -r.clone());
        }
    }
}

#[auto_ops]
impl<R> MulAssign<&Poly<R>> for Poly<R>
where R: Ring {
    fn mul_assign(&mut self, rhs: &Poly<R>) {
        let mut data = BTreeMap::new();
        for (m, a) in self.data.iter() {
            for (n, b) in rhs.data.iter() {
                Self::add_term_to(&mut data, m * n, a.clone() * b);
            }
        }
        self.data = data;
    }
}

impl<R> Elem for Poly<R>
where R: Ring {
    fn math_symbol() -> String {
        format!("{}[x]", R::math_symbol())
    }
}

impl<R> Ring for Poly<R>
where R: Ring {
    fn inv(&self) -> Option<Self> {
        if self.is_const() {
            self.const_term().inv().map(Self::from_const)
        } else {
            None
        }
    }

    fn is_unit(&self) -> bool {
        self.is_const() && self.const_term().is_unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ratio;

    type Q = Ratio<i64>;
    type P = Poly<Q>;

    fn x(i: usize) -> P {
        P::variable(i)
    }

    #[test]
    fn zero_one() {
        assert!(P::zero().is_zero());
        assert!(P::one().is_one());
        assert!(P::one().is_unit());
        assert!(!x(0).is_unit());
        assert_eq!(P::from(3).inv(), Some(P::from_const(Q::new(1, 3))));
    }

    #[test]
    fn add_sub() {
        let f = x(0) + x(1);
        let g = x(1) - x(0);
        assert_eq!(&f + &g, x(1) * P::from(2));
        assert!((&f - &f).is_zero());
    }

    #[test]
    fn mul() {
        let f = x(0) + x(1);
        let g = x(0) - x(1);
        assert_eq!(f * g, &x(0) * &x(0) - &x(1) * &x(1));
    }

    #[test]
    fn lead_term() {
        // grevlex: y^2 > xz
        let f = &x(0) * &x(2) - &x(1) * &x(1);
        let (m, r) = f.lead_term().unwrap();
        assert_eq!(m, &Mono::from([0, 2, 0]));
        assert_eq!(r, &Q::from(-1));
        assert!(f.is_homogeneous());
        assert!(!(f + x(0)).is_homogeneous());
    }

    #[test]
    fn scale_mul_term() {
        let f = x(0) + P::one();
        let g = f.mul_term(&Mono::var(1), &Q::from(2));
        assert_eq!(g, (&x(0) * &x(1) + x(1)) * P::from(2));
        assert!(f.scale(&Q::zero()).is_zero());
    }

    #[test]
    fn display() {
        let f = &x(1) * &x(1) - &x(0) * &x(2) + P::from(2);
        assert_eq!(f.to_string(), "x₁² - x₀x₂ + 2");
        assert_eq!(f.fmt_with(&["x", "y", "z"]), "y^2 - x*z + 2");
        assert_eq!(P::zero().to_string(), "0");
        assert_eq!((-x(0)).fmt_with(&["x"]), "-x");
    }
}
