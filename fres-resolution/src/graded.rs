use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;

use delegate::delegate;
use itertools::Itertools;
use log::info;

use fres::{Field, Poly, PolyRing, Sign};
use fres_matrix::Mat;
use crate::{graded_shifts, ChainComplex, Degree, EngineAdapter, FreeHom, FreeModule, FreeResolution, GradedConfig, Grading, KPolynomial, ResolutionInput};
use crate::error::{Error, Result};

/// The graded free module `⊕ S(-dᵢ)`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GradedFreeModule {
    name: String,
    shifts: Vec<Degree>,
}

impl GradedFreeModule {
    pub fn new(name: &str, shifts: Vec<Degree>) -> Self {
        Self { name: name.to_string(), shifts }
    }

    pub fn rank(&self) -> usize {
        self.shifts.len()
    }

    pub fn shifts(&self) -> &[Degree] {
        &self.shifts
    }

    pub fn is_zero(&self) -> bool {
        self.shifts.is_empty()
    }
}

impl Display for GradedFreeModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0")
        }
        let s = self.shifts.iter().map(|d| {
            let name = &self.name;
            match d.as_scalar() {
                _ if d.is_zero() => format!("{name}(0)"),
                Some(e) => format!("{name}({})", -e),
                None    => format!("{name}(-{d})"),
            }
        }).join("⊕");
        write!(f, "{s}")
    }
}

/// A free resolution together with the degrees of the generators of
/// each `F_i`, so that every `M_i` is homogeneous of degree zero.
#[derive(Clone, Debug)]
pub struct GradedFreeResolution<R>
where R: Field {
    res: FreeResolution<R>,
    grading: Grading,
    shifts: Vec<Vec<Degree>>,
}

impl<R> GradedFreeResolution<R>
where R: Field {
    pub fn new(input: ResolutionInput<R>, config: GradedConfig) -> Result<Self> {
        let grading = config.grading(input.ring().nvars())?;
        let init = config.init_shifts(&grading, input.target_rank())?;

        let handle = EngineAdapter::invoke_graded(&input, config.algorithm, &grading, &init)?;
        let ring = handle.ring().clone();
        let rank = handle.target_rank();
        let decoded = handle.decode(Some(&grading))?;

        let tables = decoded.degrees.unwrap_or_default();
        let shifts = graded_shifts(&tables, init)?;

        let res = FreeResolution::from_parts(ring, &config.name, rank, decoded.mats);
        let res = Self { res, grading, shifts };

        info!("graded resolution: {res}");

        Ok(res)
    }

    delegate! {
        to self.res {
            pub fn ring(&self) -> &PolyRing<R>;
            pub fn name(&self) -> &str;
            pub fn len(&self) -> usize;
            pub fn length(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn target(&self) -> FreeModule;
            pub fn ranks(&self) -> Vec<usize>;
            pub fn matrix(&self, i: isize) -> Result<Mat<Poly<R>>>;
            pub fn d(&self, i: isize) -> Result<FreeHom<R>>;
            pub fn differential(&self, i: isize) -> Result<FreeHom<R>>;
            pub fn chain_complex(&self) -> ChainComplex<R>;
            pub fn check_d(&self) -> bool;
        }
    }

    pub fn free_resolution(&self) -> &FreeResolution<R> {
        &self.res
    }

    pub fn into_free_resolution(self) -> FreeResolution<R> {
        self.res
    }

    pub fn grading(&self) -> &Grading {
        &self.grading
    }

    /// Degrees of the generators of `F_i`.
    pub fn shifts(&self, i: isize) -> Result<&[Degree]> {
        let i = usize::try_from(i).map_err(|_| Error::InvalidIndex(i))?;
        Ok(self.shifts.get(i).map(|s| s.as_slice()).unwrap_or(&[]))
    }

    pub fn module(&self, i: isize) -> Result<GradedFreeModule> {
        let shifts = self.shifts(i)?.to_vec();
        Ok(GradedFreeModule::new(self.name(), shifts))
    }

    /// `{ d => β_{i,d} }`, the number of generators of `F_i` in degree `d`.
    pub fn betti(&self, i: isize) -> Result<BTreeMap<Degree, usize>> {
        let shifts = self.shifts(i)?;
        Ok(shifts.iter().cloned().counts().into_iter().collect())
    }

    pub fn betti_at(&self, i: isize, d: &Degree) -> Result<usize> {
        let shifts = self.shifts(i)?;
        Ok(shifts.iter().filter(|e| e == &d).count())
    }

    /// `K(t) = Σ_i (-1)^i Σ_{d ∈ shifts(i)} t^d`.
    pub fn k_polynomial(&self) -> KPolynomial {
        let mut k = KPolynomial::new();
        for (i, shifts) in self.shifts.iter().enumerate() {
            let e = i64::from(Sign::from_parity(i as i64));
            for d in shifts {
                k.add_term(d.clone(), e);
            }
        }
        k
    }

    /// The Betti table. With a scalar grading, the entry in row `r` and
    /// column `i` is `β_{i,i+r}`. Otherwise rows are the degrees.
    pub fn betti_table(&self) -> String {
        use fres::util::format::table;

        let scalar = self.grading.dim() == 1;
        let key = |i: usize, d: &Degree| match d.as_scalar() {
            Some(e) if scalar => Degree::scalar(e - i as isize),
            _ => d.clone()
        };

        let keys = self.shifts.iter().enumerate().flat_map(|(i, s)|
            s.iter().map(move |d| key(i, d))
        ).collect::<BTreeSet<_>>();

        let rows = std::iter::once(BettiRow::Total).chain(
            keys.into_iter().map(BettiRow::Deg)
        );
        let cols = 0..self.shifts.len();

        table("", rows, cols, |row, &i| {
            let n = match row {
                BettiRow::Total => self.shifts[i].len(),
                BettiRow::Deg(k) => self.shifts[i].iter().filter(|d| &key(i, d) == k).count()
            };
            if n > 0 { n.to_string() } else { String::from(".") }
        })
    }
}

enum BettiRow {
    Total,
    Deg(Degree),
}

impl Display for BettiRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BettiRow::Total => write!(f, "total:"),
            BettiRow::Deg(d) => write!(f, "{d}:"),
        }
    }
}

impl<R> Display for GradedFreeResolution<R>
where R: Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.shifts.iter().map(|s|
            GradedFreeModule::new(self.name(), s.clone()).to_string()
        ).chain(["0".to_string()]).join(" <-- ");
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fres::Ratio;

    type Q = Ratio<i64>;

    fn twisted_cubic() -> GradedFreeResolution<Q> {
        let r = PolyRing::<Q>::new(["x", "y", "z", "w"]);
        let input = ResolutionInput::parse_ideal(&r, &["y*w - z^2", "-x*w + y*z", "x*z - y^2"]).unwrap();
        GradedFreeResolution::new(input, GradedConfig::default()).unwrap()
    }

    fn tokens(s: &str) -> Vec<Vec<String>> {
        s.lines().map(|l|
            l.split_whitespace().map(|t| t.to_string()).collect_vec()
        ).filter(|l| !l.is_empty()).collect()
    }

    #[test]
    fn shifts() {
        let res = twisted_cubic();
        assert_eq!(res.len(), 2);
        assert_eq!(res.shifts(0).unwrap(), &[Degree::scalar(0)]);
        assert_eq!(res.shifts(1).unwrap(), &[Degree::scalar(2); 3]);
        assert_eq!(res.shifts(2).unwrap(), &[Degree::scalar(3); 2]);
        assert!(res.shifts(3).unwrap().is_empty());
        assert!(res.shifts(-1).is_err());
    }

    #[test]
    fn betti() {
        let res = twisted_cubic();
        let b = res.betti(1).unwrap();
        assert_eq!(b, BTreeMap::from([(Degree::scalar(2), 3)]));
        assert_eq!(res.betti_at(2, &Degree::scalar(3)).unwrap(), 2);
        assert_eq!(res.betti_at(2, &Degree::scalar(2)).unwrap(), 0);
        assert!(res.betti(5).unwrap().is_empty());
    }

    #[test]
    fn k_polynomial() {
        let res = twisted_cubic();
        assert_eq!(res.k_polynomial().to_string(), "1 - 3t² + 2t³");
    }

    #[test]
    fn display() {
        let res = twisted_cubic();
        assert_eq!(res.to_string(), "S(0) <-- S(-2)⊕S(-2)⊕S(-2) <-- S(-3)⊕S(-3) <-- 0");
        assert_eq!(res.module(3).unwrap().to_string(), "0");
    }

    #[test]
    fn betti_table() {
        let res = twisted_cubic();
        let t = tokens(&res.betti_table());
        assert_eq!(t, vec![
            vec!["0", "1", "2"],
            vec!["total:", "1", "3", "2"],
            vec!["0:", "1", ".", "."],
            vec!["1:", ".", "3", "2"],
        ]);
    }

    #[test]
    fn module_display() {
        let m = GradedFreeModule::new("S", vec![Degree::from([1, 2]), Degree::from([0, 0])]);
        assert_eq!(m.to_string(), "S(-(1, 2))⊕S(0)");
        let m = GradedFreeModule::new("S", vec![Degree::scalar(-1)]);
        assert_eq!(m.to_string(), "S(1)");
    }
}
