mod common;
use common::*;

use itertools::Itertools;

use fres::Mono;
use fres_engine::{degrees, GroebnerBasis, ModVec, Weights};
use fres_resolution::*;

const UPTO: usize = 6;

/// `dim (S/I)_k` for `k ≤ UPTO`, counting monomials outside the initial ideal.
fn count_standard(names: &[&str], gens: &[&str]) -> Vec<i64> {
    let n = names.len();
    let r = ring(names);
    let w = Weights::standard(n);

    let polys = r.parse_all(gens).unwrap();
    let vecs = polys.iter().map(|f|
        ModVec::from_polys(&[f.clone()], &[0], &w)
    ).collect_vec();
    let gb = GroebnerBasis::new(&vecs, &degrees(&vecs), &w);

    let leads: Vec<Mono> = gb.elems().iter().filter_map(|g|
        g.lead_mono().map(|m| m.mono().clone())
    ).collect();

    (0..=UPTO).map(|k|
        monomials(n, k).iter().filter(|m|
            !leads.iter().any(|l| l.divides(m))
        ).count() as i64
    ).collect()
}

fn check(names: &[&str], gens: &[&str]) {
    let expected = count_standard(names, gens);
    for a in Algorithm::ALL {
        let config = GradedConfig::default().with_algorithm(a);
        let res = GradedFreeResolution::new(ideal(names, gens), config).unwrap();
        let h = res.k_polynomial().hilbert_series(names.len(), UPTO).unwrap();
        assert_eq!(h, expected, "{a}: {}", res.k_polynomial());
    }
}

#[test]
fn twisted_cubic() {
    let names = ["x", "y", "z", "w"];
    check(&names, &["y*w - z^2", "-x*w + y*z", "x*z - y^2"]);
    assert_eq!(count_standard(&names, &["y*w - z^2", "-x*w + y*z", "x*z - y^2"]), vec![1, 4, 7, 10, 13, 16, 19]);
}

#[test]
fn squares() {
    check(&["x", "y", "z"], &["x^2", "y^2"]);
}

#[test]
fn coordinate_axes() {
    check(&["x", "y", "z"], &["x*y", "y*z", "x*z"]);
}

#[test]
fn four_cycle() {
    check(&["x", "y", "z", "w"], &["x*y", "y*z", "z*w", "w*x"]);
}

#[test]
fn space_curve() {
    check(&["x", "y", "z"], &["x^3 - y*z^2", "x*y - z^2"]);
}

#[test]
fn artinian() {
    let names = ["x", "y"];
    check(&names, &["x^2", "x*y", "y^3"]);
    let res = GradedFreeResolution::new(ideal(&names, &["x^2", "x*y", "y^3"]), GradedConfig::default()).unwrap();
    let h = res.k_polynomial().hilbert_series(2, UPTO).unwrap();
    assert_eq!(h, vec![1, 2, 1, 0, 0, 0, 0]);
}
