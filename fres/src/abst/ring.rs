use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_bigint::BigInt;
use num_traits::{One, Zero};
use crate::{Elem, Sign};

// Rings

pub trait RingOps<T = Self>:
    Sized +
    Add<T, Output = T> +
    Sub<T, Output = T> +
    Mul<T, Output = T> +
    Neg<Output = T> +
    for<'a> Add<&'a T, Output = T> +
    for<'a> Sub<&'a T, Output = T> +
    for<'a> Mul<&'a T, Output = T>
{}

impl<T> RingOps for T where T:
    Sized +
    Add<T, Output = T> +
    Sub<T, Output = T> +
    Mul<T, Output = T> +
    Neg<Output = T> +
    for<'a> Add<&'a T, Output = T> +
    for<'a> Sub<&'a T, Output = T> +
    for<'a> Mul<&'a T, Output = T>
{}

pub trait Ring:
    Elem +
    RingOps +
    AddAssign +
    SubAssign +
    MulAssign +
    for<'a> AddAssign<&'a Self> +
    for<'a> SubAssign<&'a Self> +
    for<'a> MulAssign<&'a Self> +
    Zero +
    One +
    From<i32>
{
    fn inv(&self) -> Option<Self>;
    fn is_unit(&self) -> bool;

    fn is_pm_one(&self) -> bool {
        self.is_one() || (-self.clone()).is_one()
    }

    fn from_sign(s: Sign) -> Self {
        Self::from(i32::from(s))
    }
}

// Fields

pub trait FieldOps<T = Self>:
    RingOps<T> +
    Div<T, Output = T> +
    for<'a> Div<&'a T, Output = T>
{}

impl<T> FieldOps for T where T:
    RingOps<T> +
    Div<T, Output = T> +
    for<'a> Div<&'a T, Output = T>
{}

pub trait Field:
    Ring +
    FieldOps +
    DivAssign +
    for<'a> DivAssign<&'a Self>
{}

macro_rules! impl_ring_for_int {
    ($t:ty) => {
        impl Elem for $t {
            fn math_symbol() -> String {
                String::from("Z")
            }
        }

        impl Ring for $t {
            fn inv(&self) -> Option<Self> {
                if self.is_pm_one() {
                    Some(self.clone())
                } else {
                    None
                }
            }

            fn is_unit(&self) -> bool {
                self.is_pm_one()
            }
        }
    };
}

impl_ring_for_int!(i32);
impl_ring_for_int!(i64);
impl_ring_for_int!(i128);
impl_ring_for_int!(BigInt);
