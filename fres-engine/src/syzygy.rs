use itertools::Itertools;
use log::debug;
use num_traits::Zero;

use fres::{Field, Ring};
use crate::{GroebnerBasis, ModVec, Weights};

/// Degrees of `gens`, read off their leading terms. Zero vectors get `0`.
pub fn degrees<R>(gens: &[ModVec<R>]) -> Vec<isize>
where R: Field {
    gens.iter().map(|v| v.degree().unwrap_or(0)).collect()
}

/// Generators of the syzygy module of `gens`, as vectors in the free
/// module with basis `e_j ↦ gens[j]` graded by `degrees(gens)`.
///
/// These are the Schreyer syzygies of a Gröbner basis pushed through its
/// cofactors, together with `e_j - Σ_k q_{jk} c_k` from reducing each
/// generator to zero.
pub fn syzygies<R>(gens: &[ModVec<R>], w: &Weights) -> Vec<ModVec<R>>
where R: Field {
    let shifts = degrees(gens);
    let gb = GroebnerBasis::new(gens, &shifts, w);

    let mut res = vec![];

    for s in gb.pair_syzygies() {
        let v = gb.lift(&s);
        if !v.is_zero() {
            res.push(v);
        }
    }

    for (j, f) in gens.iter().enumerate() {
        let (r, q) = gb.reduce(f);
        debug_assert!(r.is_zero());

        let mut v = ModVec::unit(j, shifts[j]);
        for (k, q_k) in q.iter().enumerate() {
            if !q_k.is_zero() {
                v -= gb.cofactors()[k].mul_poly(q_k, w);
            }
        }
        if !v.is_zero() {
            res.push(v);
        }
    }

    debug!("syzygies: {} generators -> {} syzygies.", gens.len(), res.len());

    res
}

/// Extracts a minimal generating set: generators are visited in order of
/// degree and kept only if they are not in the span of those already kept.
/// Minimality holds for homogeneous input.
pub fn minimize<R>(gens: &[ModVec<R>], w: &Weights) -> Vec<ModVec<R>>
where R: Field {
    let order = (0..gens.len())
        .filter(|&j| !gens[j].is_zero())
        .sorted_by_key(|&j| gens[j].degree())
        .collect_vec();

    let mut kept: Vec<ModVec<R>> = vec![];
    let mut gb: Option<GroebnerBasis<R>> = None;

    for j in order {
        let g = &gens[j];
        let redundant = gb.as_ref().map(|gb| gb.contains(g)).unwrap_or(false);

        if !redundant {
            kept.push(g.clone());
            gb = Some(GroebnerBasis::new(&kept, &degrees(&kept), w));
        }
    }

    debug!("minimize: {} generators -> {}.", gens.len(), kept.len());

    kept
}

/// Cancels unit entries of the matrix `next` whose columns generate the
/// syzygies of the columns of `prev`.
///
/// For a unit `u` at row `r` of column `c` of `next`, every other column
/// `v` is replaced by `v - (v_r / u)·next[c]`; then column `c` and row `r`
/// of `next` are dropped together with column `r` of `prev` and `shifts[r]`.
/// Returns the number of cancellations.
pub fn prune<R>(prev: &mut Vec<ModVec<R>>, next: &mut Vec<ModVec<R>>, shifts: &mut Vec<isize>, w: &Weights) -> usize
where R: Field {
    assert_eq!(prev.len(), shifts.len());

    let mut count = 0;

    while let Some((c, r, u)) = find_unit(next) {
        let pivot = next.remove(c);
        let Some(u_inv) = u.inv() else {
            break
        };

        for v in next.iter_mut() {
            let a = v.component(r);
            if !a.is_zero() {
                *v -= pivot.mul_poly(&a.scale(&u_inv), w);
            }
        }

        for v in next.iter_mut() {
            *v = v.remove_component(r);
        }

        prev.remove(r);
        shifts.remove(r);
        count += 1;
    }

    next.retain(|v| !v.is_zero());

    if count > 0 {
        debug!("prune: {count} cancellations, {} generators left.", prev.len());
    }

    count
}

fn find_unit<R>(cols: &[ModVec<R>]) -> Option<(usize, usize, R)>
where R: Field {
    cols.iter().enumerate().find_map(|(c, v)|
        v.components().find_map(|r| {
            let a = v.component(r);
            if a.is_unit() {
                Some((c, r, a.const_term()))
            } else {
                None
            }
        })
    )
}
