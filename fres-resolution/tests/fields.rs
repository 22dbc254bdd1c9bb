mod common;
use common::*;

use fres::{Field, PolyRing, Ratio, FF};
use fres_resolution::*;

fn resolve<R>(names: &[&str], gens: &[&str]) -> GradedFreeResolution<R>
where R: Field + std::str::FromStr {
    let r = PolyRing::<R>::new(names.iter().copied());
    let input = ResolutionInput::parse_ideal(&r, gens).unwrap();
    GradedFreeResolution::new(input, GradedConfig::default()).unwrap()
}

const CUBIC: [&str; 3] = ["y*w - z^2", "-x*w + y*z", "x*z - y^2"];

#[test]
fn prime_field() {
    let res = resolve::<FF<32003>>(&["x", "y", "z", "w"], &CUBIC);
    assert_eq!(res.ranks(), vec![1, 3, 2]);
    assert_eq!(res.k_polynomial().to_string(), "1 - 3t² + 2t³");
    assert!(res.check_d());
}

#[test]
fn small_rationals() {
    let res = resolve::<Ratio<i64>>(&["x", "y", "z", "w"], &CUBIC);
    assert_eq!(res.ranks(), vec![1, 3, 2]);
    assert!(res.check_d());
}

#[test]
fn characteristic() {
    // x^2 + y^2 = (x + y)^2 in characteristic 2.
    let gens = ["x^2 + y^2", "x*y"];

    let q = resolve::<Q>(&["x", "y"], &gens);
    assert_eq!(q.ranks(), vec![1, 2, 1]);
    assert_eq!(q.shifts(2).unwrap(), &[Degree::scalar(4)]);

    let f2 = resolve::<FF<2>>(&["x", "y"], &gens);
    assert_eq!(f2.ranks(), vec![1, 2, 1]);
    assert_eq!(f2.k_polynomial(), q.k_polynomial());
}
