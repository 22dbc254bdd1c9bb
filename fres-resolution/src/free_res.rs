use std::fmt::Display;

use itertools::Itertools;
use log::info;

use fres::{Field, Poly, PolyRing};
use fres_matrix::{Mat, MatType};
use crate::{ChainComplex, EngineAdapter, ResolutionConfig, ResolutionInput};
use crate::error::{Error, Result};

/// The free module `S^rank`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FreeModule {
    name: String,
    rank: usize,
}

impl FreeModule {
    pub fn new(name: &str, rank: usize) -> Self {
        Self { name: name.to_string(), rank }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn is_zero(&self) -> bool {
        self.rank == 0
    }
}

impl Display for FreeModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            write!(f, "0")
        } else {
            write!(f, "{}^{}", self.name, self.rank)
        }
    }
}

/// A map of free modules, given by its matrix: column `j` is the image
/// of the `j`-th basis vector of the source.
#[derive(Clone, Debug)]
pub struct FreeHom<R>
where R: Field {
    source: FreeModule,
    target: FreeModule,
    matrix: Mat<Poly<R>>,
}

impl<R> FreeHom<R>
where R: Field {
    pub fn new(source: FreeModule, target: FreeModule, matrix: Mat<Poly<R>>) -> Self {
        assert_eq!(matrix.shape(), (target.rank(), source.rank()));
        Self { source, target, matrix }
    }

    pub fn source(&self) -> &FreeModule {
        &self.source
    }

    pub fn target(&self) -> &FreeModule {
        &self.target
    }

    pub fn matrix(&self) -> &Mat<Poly<R>> {
        &self.matrix
    }

    pub fn into_matrix(self) -> Mat<Poly<R>> {
        self.matrix
    }

    pub fn is_zero(&self) -> bool {
        self.matrix.is_zero()
    }

    /// The image of `v = Σ vⱼ eⱼ`.
    pub fn apply(&self, v: &[Poly<R>]) -> Vec<Poly<R>> {
        assert_eq!(v.len(), self.source.rank());
        let v = Mat::from_cols(v.len(), vec![v.to_vec()]);
        (&self.matrix * &v).col(0).cloned().collect()
    }
}

impl<R> Display for FreeHom<R>
where R: Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <- {}\n{}", self.target, self.source, self.matrix)
    }
}

/// A free resolution
///
/// ```text
/// F₀ <- F₁ <- ⋯ <- Fₙ <- 0
/// ```
///
/// of `S^r/N`, where `F₀ = S^r` and `d(i) = M_i : F_i → F_{i-1}`.
/// Indices past `n` give the zero module, and `d(0)` is the quotient map
/// `F₀ → S^r/N`, represented by the identity on `S^r`.
#[derive(Clone, Debug)]
pub struct FreeResolution<R>
where R: Field {
    ring: PolyRing<R>,
    name: String,
    target_rank: usize,
    mats: Vec<Mat<Poly<R>>>,
}

impl<R> FreeResolution<R>
where R: Field {
    pub fn new(input: ResolutionInput<R>, config: ResolutionConfig) -> Result<Self> {
        let handle = EngineAdapter::invoke(&input, config.algorithm)?;
        let ring = handle.ring().clone();
        let rank = handle.target_rank();
        let decoded = handle.decode(None)?;

        let res = Self::from_parts(ring, &config.name, rank, decoded.mats);
        info!("resolution: {res}");

        Ok(res)
    }

    pub(crate) fn from_parts(ring: PolyRing<R>, name: &str, target_rank: usize, mats: Vec<Mat<Poly<R>>>) -> Self {
        debug_assert!(mats.iter().enumerate().all(|(i, a)|
            a.rows() == if i == 0 { target_rank } else { mats[i - 1].cols() }
        ));
        Self { ring, name: name.to_string(), target_rank, mats }
    }

    pub fn ring(&self) -> &PolyRing<R> {
        &self.ring
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The index of the last nonzero module.
    pub fn len(&self) -> usize {
        self.mats.len()
    }

    pub fn length(&self) -> usize {
        self.len()
    }

    /// Whether the target is free, i.e. `N = 0`.
    pub fn is_empty(&self) -> bool {
        self.mats.is_empty()
    }

    /// `S^r`, of which the resolved module is a quotient.
    pub fn target(&self) -> FreeModule {
        FreeModule::new(&self.name, self.target_rank)
    }

    pub(crate) fn rank_at(&self, i: usize) -> usize {
        match i {
            0 => self.target_rank,
            i if i <= self.len() => self.mats[i - 1].cols(),
            _ => 0
        }
    }

    fn check_index(i: isize) -> Result<usize> {
        usize::try_from(i).map_err(|_| Error::InvalidIndex(i))
    }

    pub fn module(&self, i: isize) -> Result<FreeModule> {
        let i = Self::check_index(i)?;
        Ok(FreeModule::new(&self.name, self.rank_at(i)))
    }

    /// `[rank(F₀), …, rank(Fₙ)]`.
    pub fn ranks(&self) -> Vec<usize> {
        (0..=self.len()).map(|i| self.rank_at(i)).collect()
    }

    pub fn matrix(&self, i: isize) -> Result<Mat<Poly<R>>> {
        let i = Self::check_index(i)?;
        let n = self.len();
        let a = match i {
            0 => Mat::id(self.target_rank),
            i if i <= n => self.mats[i - 1].clone(),
            i if i == n + 1 => Mat::zero((self.rank_at(n), 0)),
            _ => Mat::zero((0, 0))
        };
        Ok(a)
    }

    pub fn d(&self, i: isize) -> Result<FreeHom<R>> {
        let a = self.matrix(i)?;
        let source = self.module(i)?;
        let target = if i == 0 {
            self.target()
        } else {
            self.module(i - 1)?
        };
        Ok(FreeHom::new(source, target, a))
    }

    pub fn differential(&self, i: isize) -> Result<FreeHom<R>> {
        self.d(i)
    }

    pub fn chain_complex(&self) -> ChainComplex<R> {
        ChainComplex::from_resolution(self)
    }

    /// Whether `M_i · M_{i+1} = 0` for all `i`.
    pub fn check_d(&self) -> bool {
        self.mats.iter().tuple_windows().all(|(a, b)|
            (a * b).is_zero()
        )
    }

    pub(crate) fn mats(&self) -> &[Mat<Poly<R>>] {
        &self.mats
    }
}

impl<R> Display for FreeResolution<R>
where R: Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.ranks().into_iter().map(|r|
            FreeModule::new(&self.name, r).to_string()
        ).chain(["0".to_string()]).join(" <-- ");
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fres::Ratio;
    use fres_engine::Algorithm;
    use num_traits::{Zero, One};

    type Q = Ratio<i64>;

    fn koszul(n: usize) -> FreeResolution<Q> {
        let r = PolyRing::<Q>::with_nvars(n);
        let input = ResolutionInput::ideal(&r, r.vars());
        FreeResolution::new(input, ResolutionConfig::default()).unwrap()
    }

    #[test]
    fn ranks() {
        let res = koszul(3);
        assert_eq!(res.len(), 3);
        assert_eq!(res.ranks(), vec![1, 3, 3, 1]);
        assert!(res.check_d());
        assert_eq!(res.to_string(), "S^1 <-- S^3 <-- S^3 <-- S^1 <-- 0");
    }

    #[test]
    fn boundary() {
        let res = koszul(2);
        assert_eq!(res.len(), 2);

        assert!(res.matrix(0).unwrap().is_id());
        assert_eq!(res.matrix(0).unwrap().shape(), (1, 1));
        assert_eq!(res.matrix(1).unwrap().shape(), (1, 2));
        assert_eq!(res.matrix(2).unwrap().shape(), (2, 1));
        assert_eq!(res.matrix(3).unwrap().shape(), (1, 0));
        assert_eq!(res.matrix(4).unwrap().shape(), (0, 0));
        assert_eq!(res.module(5).unwrap().rank(), 0);

        assert_eq!(res.matrix(-1), Err(Error::InvalidIndex(-1)));
        assert!(matches!(res.module(-2), Err(Error::InvalidIndex(-2))));
        assert!(res.d(-1).is_err());
    }

    #[test]
    fn differential() {
        let res = koszul(2);

        let d0 = res.d(0).unwrap();
        assert_eq!(d0.source(), &res.module(0).unwrap());
        assert_eq!(d0.target(), &res.target());

        let d2 = res.differential(2).unwrap();
        assert_eq!(d2.source().rank(), 1);
        assert_eq!(d2.target().rank(), 2);

        let d1 = res.d(1).unwrap();
        let v = d2.apply(&[Poly::one()]);
        assert!(d1.apply(&v).iter().all(|f| f.is_zero()));

        let d3 = res.d(3).unwrap();
        assert!(d3.is_zero());
        assert!(d3.source().is_zero());
    }

    #[test]
    fn free_target() {
        let r = PolyRing::<Q>::new(["x"]);
        let input = ResolutionInput::ideal(&r, vec![Poly::zero()]);
        let res = FreeResolution::new(input, ResolutionConfig::default()).unwrap();

        assert!(res.is_empty());
        assert_eq!(res.length(), 0);
        assert_eq!(res.ranks(), vec![1]);
        assert_eq!(res.matrix(1).unwrap().shape(), (1, 0));
        assert_eq!(res.to_string(), "S^1 <-- 0");
    }

    #[test]
    fn name() {
        let r = PolyRing::<Q>::new(["x"]);
        let input = ResolutionInput::ideal(&r, r.vars());
        let config = ResolutionConfig::default()
            .with_name("R")
            .with_algorithm(Algorithm::Standard);
        let res = FreeResolution::new(input, config).unwrap();
        assert_eq!(res.to_string(), "R^1 <-- R^1 <-- 0");
    }
}
