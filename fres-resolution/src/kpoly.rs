use std::collections::BTreeMap;
use std::fmt::Display;

use itertools::Itertools;

use fres::Sign;
use fres::util::format::{lc, subscript, superscript};
use crate::Degree;

/// A Laurent polynomial `Σ c_d t^d` with exponents `d` in a degree group.
/// Multigraded exponents `(d₀, d₁, …)` stand for `t₀^d₀ t₁^d₁ ⋯`.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct KPolynomial {
    data: BTreeMap<Degree, i64>
}

impl KPolynomial {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_term(&mut self, d: Degree, c: i64) {
        let e = self.data.entry(d.clone()).or_insert(0);
        *e += c;
        if *e == 0 {
            self.data.remove(&d);
        }
    }

    pub fn coeff(&self, d: &Degree) -> i64 {
        self.data.get(d).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Degree, &i64)> {
        self.data.iter()
    }

    pub fn nterms(&self) -> usize {
        self.data.len()
    }

    pub fn is_zero(&self) -> bool {
        self.data.is_empty()
    }

    /// `K(t)` at an integer `t`, for scalar exponents. `None` if some
    /// exponent is not a nonnegative scalar.
    pub fn eval_scalar(&self, t: i64) -> Option<i64> {
        self.data.iter().try_fold(0, |res, (d, c)| {
            let e = u32::try_from(d.as_scalar()?).ok()?;
            Some(res + c * t.pow(e))
        })
    }

    /// The first `upto + 1` coefficients of `K(t) / (1 - t)ⁿ`, which is
    /// the Hilbert series of the resolved module when the variables have
    /// degree `1`. `None` unless the exponents are nonnegative scalars.
    pub fn hilbert_series(&self, n: usize, upto: usize) -> Option<Vec<i64>> {
        let terms = self.data.iter().map(|(d, &c)| {
            let e = usize::try_from(d.as_scalar()?).ok()?;
            Some((e, c))
        }).collect::<Option<Vec<_>>>()?;

        // (1 - t)⁻ⁿ = Σ_k C(k + n - 1, n - 1) tᵏ
        let binom = |k: usize| -> i64 {
            if n == 0 {
                return if k == 0 { 1 } else { 0 }
            }
            (1..n).fold(1_i64, |b, i| b * (k + i) as i64 / i as i64)
        };

        let res = (0..=upto).map(|k|
            terms.iter().filter(|(e, _)| *e <= k).map(|(e, c)|
                c * binom(k - e)
            ).sum::<i64>()
        ).collect();

        Some(res)
    }

    /// `K(1 - t)`, substituting `tₖ ↦ 1 - tₖ` in every coordinate. For
    /// `S/I` under the standard grading, the lowest term is `e·tᶜ` where
    /// `c` is the codimension and `e` the degree of `I`. `None` if some
    /// exponent is negative.
    pub fn substitute_one_minus(&self) -> Option<KPolynomial> {
        let mut res = KPolynomial::new();

        for (d, &c) in self.data.iter() {
            let exps = d.as_slice().iter().map(|&e|
                usize::try_from(e).ok()
            ).collect::<Option<Vec<_>>>()?;

            // Π_k (1 - tₖ)^eₖ = Σ_{j ≤ e} Π_k (-1)^jₖ C(eₖ, jₖ) tₖ^jₖ
            for j in exps.iter().map(|&e| 0..=e).multi_cartesian_product() {
                let sign = Sign::from_parity(j.iter().sum::<usize>() as i64);
                let b = exps.iter().zip(j.iter()).map(|(&e, &k)|
                    binom(e, k)
                ).product::<i64>();
                let t = Degree::new(j.into_iter().map(|k| k as isize).collect());
                res.add_term(t, i64::from(sign) * c * b);
            }
        }

        Some(res)
    }

    fn fmt_mono(d: &Degree) -> String {
        if d.is_zero() {
            return String::from("1")
        }
        let pow = |x: String, e: isize| if e == 1 { x } else { format!("{x}{}", superscript(e)) };

        match d.as_scalar() {
            Some(e) => pow(String::from("t"), e),
            None => d.as_slice().iter().enumerate().filter(|(_, e)| **e != 0).map(|(k, &e)|
                pow(format!("t{}", subscript(k)), e)
            ).join("")
        }
    }
}

fn binom(n: usize, k: usize) -> i64 {
    (0..k).fold(1_i64, |b, i| b * (n - i) as i64 / (i + 1) as i64)
}

impl Display for KPolynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = lc(self.data.iter().map(|(d, c)| (Self::fmt_mono(d), c)));
        write!(f, "{s}")
    }
}
