#![allow(unused)]

use fres::{Mono, PolyRing, Rational};
use fres_resolution::{Algorithm, ResolutionInput};

pub type Q = Rational;

pub fn init_logger() {
    use fres::util::log::init_simple_logger;
    let _ = init_simple_logger(log::LevelFilter::Info);
}

pub fn ring(names: &[&str]) -> PolyRing<Q> {
    PolyRing::new(names.iter().copied())
}

pub fn ideal(names: &[&str], gens: &[&str]) -> ResolutionInput<Q> {
    let r = ring(names);
    ResolutionInput::parse_ideal(&r, gens).unwrap()
}

pub fn twisted_cubic() -> ResolutionInput<Q> {
    ideal(&["x", "y", "z", "w"], &["y*w - z^2", "-x*w + y*z", "x*z - y^2"])
}

/// All monomials of total degree `k` in `n` variables.
pub fn monomials(n: usize, k: usize) -> Vec<Mono> {
    fn rec(n: usize, k: usize, i: usize, cur: &mut Vec<usize>, res: &mut Vec<Mono>) {
        if i == n - 1 {
            cur.push(k);
            res.push(cur.iter().copied().enumerate().collect());
            cur.pop();
            return
        }
        for e in 0..=k {
            cur.push(e);
            rec(n, k - e, i + 1, cur, res);
            cur.pop();
        }
    }

    let mut res = vec![];
    if n > 0 {
        rec(n, k, 0, &mut vec![], &mut res);
    }
    res
}

macro_rules! test_all_algorithms {
    ($test:ident, $body:expr) => {
        mod $test {
            use super::*;

            #[test]
            fn minimal() { ($body)(fres_resolution::Algorithm::Minimal) }

            #[test]
            fn shreyer() { ($body)(fres_resolution::Algorithm::Shreyer) }

            #[test]
            fn standard() { ($body)(fres_resolution::Algorithm::Standard) }

            #[test]
            fn heuristic() { ($body)(fres_resolution::Algorithm::Heuristic) }
        }
    };
}

pub(crate) use test_all_algorithms;
