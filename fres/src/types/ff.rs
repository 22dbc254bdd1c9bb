#![allow(non_upper_case_globals)]

use std::ops::{Add, Neg, Sub, Mul, Div, AddAssign, SubAssign, MulAssign, DivAssign};
use std::str::FromStr;
use derive_more::{Display, Debug};
use num_integer::Integer;
use num_traits::{Zero, One};
use auto_impl_ops::auto_ops;

use crate::{Elem, Ring, Field};

type I = i64;

/// The prime field `F_p`. `p` is assumed to be prime.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Display, Debug)]
#[display("{}", _0)]
#[debug("{}", _0)]
pub struct FF<const p: I>(I);

impl<const p: I> FF<p> {
    pub fn new(a: I) -> Self {
        assert!(p > 1);
        Self(a.rem_euclid(p))
    }
}

impl<const p: I> From<i32> for FF<p> {
    fn from(a: i32) -> Self {
        Self::new(a as I)
    }
}

impl<const p: I> FromStr for FF<p> {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let a = s.trim().parse::<I>().map_err(|e| e.to_string())?;
        Ok(Self::new(a))
    }
}

impl<const p: I> Zero for FF<p> {
    fn zero() -> Self {
        Self(0)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<const p: I> One for FF<p> {
    fn one() -> Self {
        Self(1)
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }
}

impl<const p: I> Neg for FF<p> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.0)
    }
}

impl<'a, const p: I> Neg for &'a FF<p> {
    type Output = FF<p>;
    fn neg(self) -> Self::Output {
        FF::new(-self.0)
    }
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident) => {
        #[auto_ops]
        impl<'a, 'b, const p: I> $trait<&'b FF<p>> for &'a FF<p> {
            type Output = FF<p>;
            fn $method(self, rhs: &'b FF<p>) -> Self::Output {
                FF::new(self.0.$method(&rhs.0) % p)
            }
        }
    }
}

impl_binop!(Add, add);
impl_binop!(Sub, sub);
impl_binop!(Mul, mul);

#[auto_ops]
impl<'a, 'b, const p: I> Div<&'b FF<p>> for &'a FF<p> {
    type Output = FF<p>;
    fn div(self, rhs: &'b FF<p>) -> Self::Output {
        match rhs.inv() {
            Some(inv) => self * inv,
            None => panic!("division by zero")
        }
    }
}

impl<const p: I> Elem for FF<p> {
    fn math_symbol() -> String {
        use crate::util::format::subscript;
        format!("F{}", subscript(p))
    }
}

impl<const p: I> Ring for FF<p> {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            // 1 = ax + py  ->  ax = 1 mod p.
            let e = self.0.extended_gcd(&p);
            if e.gcd.is_one() {
                Some(Self::new(e.x))
            } else {
                None
            }
        }
    }

    fn is_unit(&self) -> bool {
        !self.is_zero()
    }
}

impl<const p: I> Field for FF<p> {}
