mod common;
use common::*;

use itertools::Itertools;
use num_traits::Zero;

use fres_matrix::MatType;
use fres_resolution::*;

fn bigraded_cubic(a: Algorithm) -> GradedFreeResolution<Q> {
    let config = GradedConfig::default()
        .with_degrees([[1_isize, 0], [1, 1], [1, 2], [1, 3]])
        .with_algorithm(a);
    GradedFreeResolution::new(twisted_cubic(), config).unwrap()
}

fn sorted(shifts: &[Degree]) -> Vec<Degree> {
    shifts.iter().cloned().sorted().collect()
}

test_all_algorithms!(shifts, |a| {
    let res = bigraded_cubic(a);

    assert_eq!(res.len(), 2);
    assert_eq!(res.shifts(0).unwrap(), &[Degree::from([0_isize, 0])]);
    assert_eq!(sorted(res.shifts(1).unwrap()), vec![
        Degree::from([2_isize, 2]),
        Degree::from([2_isize, 3]),
        Degree::from([2_isize, 4]),
    ]);
    assert_eq!(sorted(res.shifts(2).unwrap()), vec![
        Degree::from([3_isize, 4]),
        Degree::from([3_isize, 5]),
    ]);
});

test_all_algorithms!(homogeneous, |a| {
    // every nonzero entry of M_i has degree shifts(i)[j] - shifts(i-1)[r].
    let res = bigraded_cubic(a);
    let grading = res.grading().clone();

    for i in 1..=res.len() as isize {
        let m = res.matrix(i).unwrap();
        let src = res.shifts(i).unwrap();
        let tgt = res.shifts(i - 1).unwrap();
        assert_eq!(m.shape(), (tgt.len(), src.len()));

        for (j, s) in src.iter().enumerate() {
            let col = m.col(j).collect_vec();
            assert!(col.iter().any(|f| !f.is_zero()));

            for (r, f) in col.into_iter().enumerate() {
                for (x, _) in f.iter() {
                    let mut d = grading.degree_of(x);
                    d += &tgt[r];
                    assert_eq!(&d, s);
                }
            }
        }
    }
});

#[test]
fn k_polynomial() {
    let res = bigraded_cubic(Algorithm::default());
    assert_eq!(
        res.k_polynomial().to_string(),
        "1 - t₀²t₁² - t₀²t₁³ - t₀²t₁⁴ + t₀³t₁⁴ + t₀³t₁⁵"
    );
}

#[test]
fn betti() {
    let res = bigraded_cubic(Algorithm::default());
    assert_eq!(res.betti_at(1, &Degree::from([2_isize, 3])).unwrap(), 1);
    assert_eq!(res.betti_at(2, &Degree::from([3_isize, 3])).unwrap(), 0);
    assert_eq!(res.betti(2).unwrap().len(), 2);

    let table = res.betti_table();
    assert!(table.contains("(2, 4):"));
    assert!(table.contains("total:"));
}

#[test]
fn init_shifts() {
    let config = GradedConfig::default()
        .with_degrees([[1_isize, 0], [1, 1], [1, 2], [1, 3]])
        .with_shifts([[1_isize, 1]]);
    let res = GradedFreeResolution::new(twisted_cubic(), config).unwrap();

    assert_eq!(res.shifts(0).unwrap(), &[Degree::from([1_isize, 1])]);
    assert_eq!(sorted(res.shifts(2).unwrap()), vec![
        Degree::from([4_isize, 5]),
        Degree::from([4_isize, 6]),
    ]);
    assert_eq!(res.module(0).unwrap().to_string(), "S(-(1, 1))");
}

#[test]
fn scalar_shifts() {
    let config = GradedConfig::default().with_shifts([5_isize]);
    let res = GradedFreeResolution::new(twisted_cubic(), config).unwrap();
    assert_eq!(res.shifts(1).unwrap(), &[Degree::scalar(7); 3]);
    assert_eq!(res.shifts(2).unwrap(), &[Degree::scalar(8); 2]);
}

#[test]
fn weighted() {
    // x*y - z^3 with deg(x) = 1, deg(y) = 2, deg(z) = 1.
    let config = GradedConfig::default().with_degrees([1_isize, 2, 1]);
    let input = ideal(&["x", "y", "z"], &["x*y - z^3", "y^2 - x^2*z^2"]);
    let res = GradedFreeResolution::new(input, config).unwrap();

    assert_eq!(sorted(res.shifts(1).unwrap()), vec![Degree::scalar(3), Degree::scalar(4)]);
    assert!(res.check_d());
}

#[test]
fn config_errors() {
    let config = GradedConfig::default().with_degrees([[1_isize, 0], [0, 1]]);
    let res = GradedFreeResolution::new(twisted_cubic(), config);
    assert!(matches!(res, Err(Error::Config(_))));

    let config = GradedConfig::default().with_degrees([
        Degree::from([1_isize, 0]),
        Degree::scalar(1),
        Degree::scalar(1),
        Degree::scalar(1),
    ]);
    let res = GradedFreeResolution::new(twisted_cubic(), config);
    assert!(matches!(res, Err(Error::Config(_))));

    let config = GradedConfig::default().with_shifts([0_isize, 0]);
    let res = GradedFreeResolution::new(twisted_cubic(), config);
    assert!(matches!(res, Err(Error::Config(_))));

    let config = GradedConfig::default().with_shifts([[0_isize, 0]]);
    let res = GradedFreeResolution::new(twisted_cubic(), config);
    assert!(matches!(res, Err(Error::Config(_))));
}

#[test]
fn k_polynomial_at_one_minus() {
    let res = bigraded_cubic(Algorithm::default());
    let k = res.k_polynomial().substitute_one_minus().unwrap();

    assert_eq!(k.nterms(), 21);
    assert_eq!(k.coeff(&Degree::from([0_isize, 0])), 0);
    assert_eq!(k.coeff(&Degree::from([2_isize, 0])), 3);
    assert_eq!(k.coeff(&Degree::from([1_isize, 1])), 9);
    assert_eq!(k.coeff(&Degree::from([0_isize, 2])), 6);
    assert_eq!(k.coeff(&Degree::from([3_isize, 5])), 1);

    // the coefficients sum to K(0, 0) = 1.
    assert_eq!(k.iter().map(|(_, c)| c).sum::<i64>(), 1);
}
