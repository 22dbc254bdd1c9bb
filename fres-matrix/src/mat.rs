use std::fmt::Display;
use std::ops::{Mul, MulAssign, Index};

use auto_impl_ops::auto_ops;
use delegate::delegate;
use itertools::Itertools;
use nalgebra::{DMatrix, Scalar};
use num_traits::{Zero, One};

use fres::Ring;

pub trait MatType {
    fn shape(&self) -> (usize, usize);
    fn rows(&self) -> usize { self.shape().0 }
    fn cols(&self) -> usize { self.shape().1 }
    fn is_square(&self) -> bool {
        let (m, n) = self.shape();
        m == n
    }
}

/// A dense `m × n` matrix. Column `j` is read as the image of the
/// `j`-th basis vector, so a map `Rⁿ → Rᵐ` is an `m × n` matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mat<R>
where R: Scalar {
    inner: DMatrix<R>
}

impl<R> MatType for Mat<R>
where R: Scalar {
    fn shape(&self) -> (usize, usize) {
        (self.inner.nrows(), self.inner.ncols())
    }
}

impl<R> Mat<R>
where R: Scalar {
    pub fn from_fn<F>(shape: (usize, usize), f: F) -> Self
    where F: FnMut(usize, usize) -> R {
        DMatrix::from_fn(shape.0, shape.1, f).into()
    }

    /// Builds an `nrows × cols.len()` matrix from its columns.
    pub fn from_cols(nrows: usize, cols: Vec<Vec<R>>) -> Self {
        assert!(cols.iter().all(|c| c.len() == nrows), "column length mismatch.");
        let ncols = cols.len();
        DMatrix::from_iterator(nrows, ncols, cols.into_iter().flatten()).into()
    }

    /// Entries `(i, j, a)` in column-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &R)> {
        let m = self.rows();
        self.inner.iter().enumerate().map(move |(k, a)|
            (k % m, k / m, a)
        )
    }

    pub fn col(&self, j: usize) -> impl Iterator<Item = &R> {
        let m = self.rows();
        (0..m).map(move |i| &self.inner[(i, j)])
    }

    pub fn row(&self, i: usize) -> impl Iterator<Item = &R> {
        let n = self.cols();
        (0..n).map(move |j| &self.inner[(i, j)])
    }

    pub fn cols_vec(&self) -> Vec<Vec<R>> {
        (0..self.cols()).map(|j| self.col(j).cloned().collect()).collect()
    }

    /// Renders the matrix row by row, formatting entries with `f`.
    pub fn fmt_with<F>(&self, f: F) -> String
    where F: Fn(&R) -> String {
        let (m, n) = self.shape();
        if m == 0 || n == 0 {
            return format!("[{m}×{n}]")
        }

        let cells = (0..m).map(|i|
            self.row(i).map(&f).collect_vec()
        ).collect_vec();

        let widths = (0..n).map(|j|
            cells.iter().map(|r| r[j].chars().count()).max().unwrap_or(0)
        ).collect_vec();

        cells.iter().map(|r| {
            let line = r.iter().zip(widths.iter()).map(|(s, w)|
                format!("{s:>w$}", w = w)
            ).join(", ");
            format!("[{line}]")
        }).join("\n")
    }
}

impl<R> Mat<R>
where R: Scalar + Zero {
    pub fn zero(shape: (usize, usize)) -> Self {
        Self::from_fn(shape, |_, _| R::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.inner.iter().all(|a| a.is_zero())
    }
}

impl<R> Mat<R>
where R: Scalar + Zero + One {
    pub fn id(size: usize) -> Self {
        Self::from_fn((size, size), |i, j|
            if i == j { R::one() } else { R::zero() }
        )
    }

    pub fn is_id(&self) -> bool
    where R: PartialEq {
        self.is_square() && self.iter().all(|(i, j, a)|
            i == j && a.is_one() ||
            i != j && a.is_zero()
        )
    }
}

impl<R> From<DMatrix<R>> for Mat<R>
where R: Scalar {
    fn from(inner: DMatrix<R>) -> Self {
        Self { inner }
    }
}

impl<R> Index<(usize, usize)> for Mat<R>
where R: Scalar {
    type Output = R;
    delegate! {
        to self.inner {
            fn index(&self, index: (usize, usize)) -> &R;
        }
    }
}

impl<R> Display for Mat<R>
where R: Scalar + Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.fmt_with(|a| a.to_string()))
    }
}

#[auto_ops]
impl<'a, 'b, R> Mul<&'b Mat<R>> for &'a Mat<R>
where R: Ring {
    type Output = Mat<R>;
    fn mul(self, rhs: &'b Mat<R>) -> Self::Output {
        assert_eq!(self.cols(), rhs.rows());

        let (m, k, n) = (self.rows(), self.cols(), rhs.cols());
        Mat::from_fn((m, n), |i, j|
            (0..k).fold(R::zero(), |mut res, l| {
                let (a, b) = (&self[(i, l)], &rhs[(l, j)]);
                if !a.is_zero() && !b.is_zero() {
                    res += a.clone() * b;
                }
                res
            })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mat<const N: usize>(rows: [[i32; N]; 2]) -> Mat<i32> {
        Mat::from_fn((2, N), |i, j| rows[i][j])
    }

    #[test]
    fn from_cols() {
        let a = Mat::from_cols(2, vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
        assert_eq!(a, mat([[1, 2, 3], [4, 5, 6]]));
        assert_eq!(a.shape(), (2, 3));
        assert_eq!(a[(1, 0)], 4);
        assert_eq!(a.col(1).cloned().collect_vec(), vec![2, 5]);
        assert_eq!(a.row(0).cloned().collect_vec(), vec![1, 2, 3]);
        assert_eq!(a.cols_vec()[2], vec![3, 6]);
    }

    #[test]
    fn iter() {
        let a = mat([[1, 2], [3, 4]]);
        let entries = a.iter().map(|(i, j, a)| (i, j, *a)).collect_vec();
        assert_eq!(entries, vec![(0, 0, 1), (1, 0, 3), (0, 1, 2), (1, 1, 4)]);
    }

    #[test]
    fn zero_id() {
        let z = Mat::<i32>::zero((2, 0));
        assert!(z.is_zero());
        assert_eq!(z.shape(), (2, 0));
        assert!(Mat::<i32>::id(3).is_id());
        assert!(!mat([[1, 1], [0, 1]]).is_id());
    }

    #[test]
    fn mul() {
        let a = mat([[1, 2, 3], [4, 5, 6]]);
        let b = Mat::from_cols(3, vec![vec![1, 0, -1]]);
        assert_eq!(&a * &b, Mat::from_cols(2, vec![vec![-2, -2]]));

        let e = Mat::<i32>::zero((2, 0));
        let f = Mat::<i32>::zero((0, 3));
        assert_eq!(&e * &f, Mat::zero((2, 3)));
    }

    #[test]
    fn display() {
        let a = mat([[1, -20], [300, 4]]);
        assert_eq!(a.to_string(), "[  1, -20]\n[300,   4]");
        assert_eq!(Mat::<i32>::zero((0, 2)).to_string(), "[0×2]");
    }
}
