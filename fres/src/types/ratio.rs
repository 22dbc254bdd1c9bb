use std::fmt::{Display, Debug};
use std::hash::Hash;
use std::str::FromStr;
use std::ops::{Add, Sub, Mul, Div, Neg, AddAssign, SubAssign, MulAssign, DivAssign};
use num_bigint::BigInt;
use num_traits::{Zero, One, Signed};
use auto_impl_ops::auto_ops;
use crate::{Elem, Ring, Field};

/// Integer types a [`Ratio`] can be built over.
pub trait Integer:
    num_integer::Integer +
    Signed +
    Clone +
    Hash +
    Default +
    Display +
    Debug +
    FromStr +
    From<i32> +
    Send +
    Sync +
    'static
{}

impl<T> Integer for T where T:
    num_integer::Integer +
    Signed +
    Clone +
    Hash +
    Default +
    Display +
    Debug +
    FromStr +
    From<i32> +
    Send +
    Sync +
    'static
{}

/// Rationals with arbitrary precision. Use these for general input:
/// coefficients grow quickly during reduction, and a fixed width `T`
/// such as `i64` panics on overflow.
pub type Rational = Ratio<BigInt>;

/// The fraction `numer / denom` in lowest terms with `denom > 0`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Ratio<T> {
    numer: T,
    denom: T,
}

impl<T> Ratio<T> {
    #[inline]
    const fn new_raw(numer: T, denom: T) -> Ratio<T> {
        Ratio { numer, denom }
    }

    #[inline]
    pub const fn numer(&self) -> &T {
        &self.numer
    }

    #[inline]
    pub const fn denom(&self) -> &T {
        &self.denom
    }
}

impl<T> Ratio<T>
where T: Integer {
    #[inline]
    pub fn new(numer: T, denom: T) -> Ratio<T> {
        assert!(!denom.is_zero());

        let mut ret = Ratio::new_raw(numer, denom);
        ret.reduce();
        ret
    }

    pub fn from_numer(a: T) -> Self {
        Self::new_raw(a, T::one())
    }

    // keeps gcd(numer, denom) = 1 and denom > 0.
    fn reduce(&mut self) {
        if self.numer.is_zero() {
            self.denom = T::one();
            return;
        }

        if self.denom.is_negative() {
            self.numer = -self.numer.clone();
            self.denom = -self.denom.clone();
        }

        if self.denom.is_one() {
            return
        }

        let g = self.numer.gcd(&self.denom);

        if !g.is_one() {
            self.numer = self.numer.div_floor(&g);
            self.denom = self.denom.div_floor(&g);
        }
    }
}

impl<T> From<i32> for Ratio<T>
where T: Integer {
    fn from(i: i32) -> Self {
        Self::from_numer(T::from(i))
    }
}

impl<T> From<(T, T)> for Ratio<T>
where T: Integer {
    fn from(pair: (T, T)) -> Self {
        let (p, q) = pair;
        Self::new(p, q)
    }
}

impl<T> FromStr for Ratio<T>
where T: Integer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(a) = s.parse::<T>() {
            return Ok(Self::from_numer(a))
        }

        let r = regex::Regex::new(r"^\s*(-?\d+)\s*/\s*(\d+)\s*$").map_err(|e| e.to_string())?;
        if let Some(c) = r.captures(s) {
            let (s1, s2) = (&c[1], &c[2]);
            if let (Ok(a), Ok(b)) = (s1.parse::<T>(), s2.parse::<T>()) {
                if !b.is_zero() {
                    return Ok(Self::new(a, b))
                }
            }
        }

        Err(format!("cannot parse string: '{s}'"))
    }
}

impl<T> Default for Ratio<T>
where T: Integer {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T> Display for Ratio<T>
where T: Display + One + PartialEq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.denom.is_one() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl<T> Debug for Ratio<T>
where T: Display + One + PartialEq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl<T> Zero for Ratio<T>
where T: Integer {
    fn zero() -> Self {
        Self::from_numer(T::zero())
    }

    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl<T> One for Ratio<T>
where T: Integer {
    fn one() -> Self {
        Self::from_numer(T::one())
    }

    fn is_one(&self) -> bool {
        self.numer == self.denom
    }
}

macro_rules! impl_add_assign_op {
    ($trait:ident, $method:ident, $op:tt) => {
        #[auto_ops]
        impl<T> $trait<&Ratio<T>> for Ratio<T>
        where T: Integer {
            fn $method(&mut self, rhs: &Ratio<T>) {
                let (a, b) = (&self.numer, &self.denom);
                let (c, d) = ( &rhs.numer,  &rhs.denom);

                if rhs.is_zero() {
                    // nothing to do
                } else if b == d {
                    self.numer = a.clone() $op c.clone();
                    self.reduce()
                } else {
                    let l = b.lcm(d);                 // l = xb = yd
                    let x = l.div_floor(b);
                    let y = l.div_floor(d);
                    self.numer = a.clone() * x $op c.clone() * y;
                    self.denom = l;
                    self.reduce()
                }
            }
        }
    };
}

impl_add_assign_op!(AddAssign, add_assign, +);
impl_add_assign_op!(SubAssign, sub_assign, -);

impl<T> Neg for Ratio<T>
where T: Integer {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Ratio::new_raw(-self.numer, self.denom)
    }
}

impl<T> Neg for &Ratio<T>
where T: Integer {
    type Output = Ratio<T>;
    fn neg(self) -> Self::Output {
        Ratio::new_raw(-self.numer.clone(), self.denom.clone())
    }
}

#[auto_ops]
impl<T> MulAssign<&Ratio<T>> for Ratio<T>
where T: Integer {
    fn mul_assign(&mut self, rhs: &Ratio<T>) {
        if self.is_zero() || rhs.is_one() {
            return
        }

        // cross-cancel before multiplying to keep the entries small.
        let k = self.numer.gcd(&rhs.denom);
        let l = self.denom.gcd(&rhs.numer);

        self.numer = self.numer.div_floor(&k) * rhs.numer.div_floor(&l);
        self.denom = self.denom.div_floor(&l) * rhs.denom.div_floor(&k);
        self.reduce()
    }
}

#[auto_ops]
impl<T> DivAssign<&Ratio<T>> for Ratio<T>
where T: Integer {
    fn div_assign(&mut self, rhs: &Ratio<T>) {
        assert!(!rhs.is_zero(), "division by zero");
        let inv = Ratio::new(rhs.denom.clone(), rhs.numer.clone());
        *self *= inv
    }
}

impl<T> Elem for Ratio<T>
where T: Integer {
    fn math_symbol() -> String {
        String::from("Q")
    }
}

impl<T> Ring for Ratio<T>
where T: Integer {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            let inv = Self::new(self.denom.clone(), self.numer.clone());
            Some(inv)
        }
    }

    fn is_unit(&self) -> bool {
        !self.is_zero()
    }
}

impl<T> Field for Ratio<T>
where T: Integer {}
