use std::ops::{Mul, Neg};
use derive_more::{Display, Debug};
use is_even::IsEven;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Display, Debug)]
#[cfg_attr(feature = "serde", derive(serde_repr::Serialize_repr, serde_repr::Deserialize_repr))]
#[repr(i8)]
pub enum Sign { 
    #[default]
    #[display("+")]
    #[debug("+")]
    Pos = 1,

    #[display("-")]
    #[debug("-")]
    Neg = -1
}

impl Sign { 
    pub fn is_positive(&self) -> bool { 
        self == &Sign::Pos
    }

    pub fn is_negative(&self) -> bool { 
        !self.is_positive()
    }

    /// The sign `(-1)^i` of the `i`-th step of an alternating sum.
    pub fn from_parity<I: IsEven>(val: I) -> Self { 
        if val.is_even() { 
            Sign::Pos
        } else { 
            Sign::Neg
        }
    }
}

macro_rules! impl_int_conversion {
    ($t:ty) => {
        impl From<Sign> for $t {
            fn from(value: Sign) -> Self {
                match value { 
                    Sign::Pos =>  1,
                    Sign::Neg => -1
                }
            }
        }                
    };
}

impl_int_conversion!(i32);
impl_int_conversion!(i64);
impl_int_conversion!(isize);

impl Neg for Sign {
    type Output = Self;
    fn neg(self) -> Self {
        match self { 
            Sign::Neg => Sign::Pos,
            Sign::Pos => Sign::Neg
        }
    }
}

impl Mul for Sign {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        if self == rhs { 
            Sign::Pos
        } else { 
            Sign::Neg
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parity() {
        assert_eq!(Sign::from_parity(0_i64), Sign::Pos);
        assert_eq!(Sign::from_parity(3_i64), Sign::Neg);
        assert_eq!(Sign::from_parity(-2_i32), Sign::Pos);
    }

    #[test]
    fn mul() { 
        assert_eq!(Sign::Neg * Sign::Neg, Sign::Pos);
        assert_eq!(Sign::Pos * Sign::Neg, Sign::Neg);
        assert_eq!(-Sign::Pos, Sign::Neg);
    }

    #[test]
    fn to_int() { 
        assert_eq!(isize::from(Sign::Neg), -1);
        assert_eq!(i32::from(Sign::Pos), 1);
    }

    #[test]
    fn to_string() { 
        assert_eq!(&Sign::Neg.to_string(), "-");
        assert_eq!(&Sign::Pos.to_string(), "+");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialize() { 
        let ser = serde_json::to_string(&Sign::Neg).unwrap();
        assert_eq!(ser, "-1");

        let des: Sign = serde_json::from_str(&ser).unwrap();
        assert_eq!(des, Sign::Neg);
    }
}
