use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::ops::{Add, AddAssign, SubAssign, Sub, Index};
use std::hash::Hash;

use auto_impl_ops::auto_ops;
use delegate::delegate;
use derive_more::{Display, Debug};
use num_traits::Zero;

/// A sparse exponent vector `{ index => degree }`. Zero entries are
/// never stored, so equal vectors compare and hash equally.
#[derive(Clone, Default, PartialEq, Eq, Hash, Display, Debug)]
#[display("{:?}", data)]
#[debug("{:?}", data)]
pub struct MultiDeg<I> {
    data: BTreeMap<usize, I>,
    _zero: I
}

impl<I> MultiDeg<I>
where I: Zero {
    fn new_reduced(data: BTreeMap<usize, I>) -> Self {
        Self { data, _zero: I::zero() }
    }

    fn reduce(&mut self) {
        self.data.retain(|_, i| !i.is_zero())
    }

    pub fn empty() -> Self {
        Self::new_reduced(BTreeMap::new())
    }
}

impl<I> MultiDeg<I> {
    delegate! {
        to self.data {
            #[call(len)]
            pub fn ninds(&self) -> usize;
            pub fn iter(&self) -> impl Iterator<Item = (&usize, &I)>;
        }
    }

    pub fn max_index(&self) -> Option<usize> {
        self.data.keys().next_back().cloned()
    }
}

impl<I> MultiDeg<I>
where I: Zero + Ord + Clone {
    pub fn all_leq(&self, other: &Self) -> bool {
        self.iter().all(|(&i0, d0)| {
            d0 <= &other[i0]
        }) &&
        other.iter().all(|(&i1, d1)|
            &self[i1] <= d1
        )
    }

    pub fn all_geq(&self, other: &Self) -> bool {
        other.all_leq(self)
    }

    /// Entrywise maximum.
    pub fn max(&self, other: &Self) -> Self {
        let mut data = self.data.clone();
        for (&i, d) in other.iter() {
            let e = data.entry(i).or_insert_with(I::zero);
            if &*e < d {
                *e = d.clone();
            }
        }
        let mut res = Self::new_reduced(data);
        res.reduce();
        res
    }

    /// Entrywise minimum.
    pub fn min(&self, other: &Self) -> Self {
        let data = self.iter().filter_map(|(&i, d)| {
            let e = std::cmp::min(d, &other[i]).clone();
            if e.is_zero() { None } else { Some((i, e)) }
        }).collect();
        let mut res = Self::new_reduced(data);
        res.reduce();
        res
    }
}

impl<I> MultiDeg<I>
where I: Zero + for<'x> Add<&'x I, Output = I> {
    pub fn total(&self) -> I {
        self.iter().map(|(_, d)| d).fold(I::zero(), |res, d| res + d)
    }
}

impl<I> MultiDeg<I>
where I: Zero + Ord + for<'x> Add<&'x I, Output = I> {
    /// Graded reverse lexicographic comparison: the total degree decides
    /// first, then the smaller exponent at the last differing index wins.
    pub fn cmp_grevlex(&self, other: &Self) -> Ordering {
        I::cmp(&self.total(), &other.total()).then_with(|| {
            let i1 = usize::max(self.max_index().unwrap_or(0), other.max_index().unwrap_or(0));
            (0..=i1).rev().map(|i|
                I::cmp(&self[i], &other[i]).reverse()
            ).find(|c| c.is_ne()).unwrap_or(Ordering::Equal)
        })
    }
}

impl<I, const N: usize> From<[I; N]> for MultiDeg<I>
where I: Zero + for<'x> AddAssign<&'x I> {
    fn from(degrees: [I; N]) -> Self {
        Self::from_iter(degrees.into_iter().enumerate())
    }
}

impl<I> FromIterator<(usize, I)> for MultiDeg<I>
where I: Zero + for<'x> AddAssign<&'x I> {
    fn from_iter<T: IntoIterator<Item = (usize, I)>>(iter: T) -> Self {
        let mut data: BTreeMap<usize, I> = BTreeMap::new();
        for (i, d) in iter {
            data.entry(i).or_insert_with(I::zero).add_assign(&d);
        }
        let mut res = Self::new_reduced(data);
        res.reduce();
        res
    }
}

impl<I> Index<usize> for MultiDeg<I> {
    type Output = I;

    fn index(&self, i: usize) -> &Self::Output {
        self.data.get(&i).unwrap_or(&self._zero)
    }
}

impl<I> Zero for MultiDeg<I>
where I: Zero + for<'x> AddAssign<&'x I> + Clone {
    fn zero() -> Self {
        Self::empty()
    }

    fn is_zero(&self) -> bool {
        self.data.is_empty()
    }
}

#[auto_ops]
impl<I> AddAssign<&MultiDeg<I>> for MultiDeg<I>
where I: Zero + for<'x> AddAssign<&'x I> + Clone {
    fn add_assign(&mut self, rhs: &MultiDeg<I>) {
        for (i, d) in rhs.iter() {
            self.data.entry(*i).or_insert_with(I::zero).add_assign(d);
        }
        self.reduce()
    }
}

#[auto_ops]
impl<I> SubAssign<&MultiDeg<I>> for MultiDeg<I>
where I: Zero + for<'x> SubAssign<&'x I> + Clone {
    fn sub_assign(&mut self, rhs: &MultiDeg<I>) {
        for (i, d) in rhs.iter() {
            self.data.entry(*i).or_insert_with(I::zero).sub_assign(d);
        }
        self.reduce()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce() {
        let data = BTreeMap::from_iter([(1, 0), (0, 1), (7, 0), (2, 3)]);
        let mut d0 = MultiDeg{ data, _zero: 0 };

        d0.reduce();

        assert_eq!(d0.data, BTreeMap::from_iter([(0, 1), (2, 3)]));
    }

    #[test]
    fn index() {
        let mdeg = MultiDeg::from_iter([(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert_eq!(mdeg[1], 2);
        assert_eq!(mdeg[4], 0);
        assert_eq!(mdeg.ninds(), 3);
    }

    #[test]
    fn eq() {
        let d1 = MultiDeg::from_iter([(2, 3), (1, 2), (3, 0), (0, 1)]);
        let d2 = MultiDeg::from_iter([(0, 1), (1, 2), (2, 3)]);
        let d3 = MultiDeg::from_iter([(0, 1), (1, 2), (2, 3), (3, 1)]);
        assert_eq!(d1, d2);
        assert_ne!(d1, d3);
    }

    #[test]
    fn total() {
        let mdeg = MultiDeg::from([1usize, 0, 3, 2]);
        assert_eq!(mdeg.total(), 6);
    }

    #[test]
    fn all_leq() {
        let d1 = MultiDeg::from([1usize, 0, 2]);
        let d2 = MultiDeg::from([1usize, 1, 2]);
        assert!(d1.all_leq(&d2));
        assert!(!d2.all_leq(&d1));
        assert!(d2.all_geq(&d1));
    }

    #[test]
    fn max_min() {
        let d1 = MultiDeg::from([2usize, 0, 1]);
        let d2 = MultiDeg::from([1usize, 3, 0]);
        assert_eq!(d1.max(&d2), MultiDeg::from([2, 3, 1]));
        assert_eq!(d1.min(&d2), MultiDeg::from([1, 0, 0]));
    }

    #[test]
    fn cmp_grevlex() {
        // x0 x2 < x1^2 in grevlex with x0 > x1 > x2
        let d1 = MultiDeg::from([1usize, 0, 1]);
        let d2 = MultiDeg::from([0usize, 2, 0]);
        let d3 = MultiDeg::from([2usize, 0, 0]);
        let d4 = MultiDeg::from([0usize, 0, 3]);

        assert!(d1.cmp_grevlex(&d2).is_lt());
        assert!(d2.cmp_grevlex(&d3).is_lt());
        assert!(d3.cmp_grevlex(&d4).is_lt());
        assert!(d1.cmp_grevlex(&d1).is_eq());
    }

    #[test]
    fn add_sub() {
        let d1 = MultiDeg::from([1usize, 2, 3]);
        let d2 = MultiDeg::from([0usize, 2, 1]);
        assert_eq!(&d1 + &d2, MultiDeg::from([1, 4, 4]));
        assert_eq!(d1 - d2, MultiDeg::from([1, 0, 2]));
    }

    #[test]
    #[should_panic]
    fn sub_usize_panic() {
        let d1 = MultiDeg::<usize>::from([1, 2, 3]);
        let d2 = MultiDeg::<usize>::from([0, 3, 1]);
        let _ = d1 - d2;
    }
}
