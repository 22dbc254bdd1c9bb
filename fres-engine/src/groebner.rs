use ahash::AHashSet;
use log::{debug, trace};
use num_traits::Zero;

use fres::{Field, Mono, Poly};
use crate::{ModMono, ModVec, Weights};

/// A Gröbner basis of a submodule `N = ⟨f₀, …, f_{s-1}⟩ ⊂ S^r`, with
/// cofactors: every basis element `g_k` is stored together with the
/// vector `c_k` in the free module on the `f_j` satisfying
/// `g_k = Σ_j (c_k)_j f_j`.
///
/// Basis elements are kept monic.
#[derive(Clone, Debug)]
pub struct GroebnerBasis<R>
where R: Field {
    weights: Weights,
    gen_shifts: Vec<isize>,
    elems: Vec<ModVec<R>>,
    leads: Vec<ModMono>,
    cofactors: Vec<ModVec<R>>,
}

impl<R> GroebnerBasis<R>
where R: Field {
    /// Runs Buchberger's algorithm on `gens`. `gen_shifts[j]` is the
    /// degree of `f_j`, used to grade the cofactor module.
    pub fn new(gens: &[ModVec<R>], gen_shifts: &[isize], w: &Weights) -> Self {
        assert_eq!(gens.len(), gen_shifts.len());

        let mut gb = Self {
            weights: w.clone(),
            gen_shifts: gen_shifts.to_vec(),
            elems: vec![],
            leads: vec![],
            cofactors: vec![],
        };

        let mut pending = AHashSet::new();

        for (j, f) in gens.iter().enumerate() {
            if f.is_zero() {
                continue
            }
            let c = ModVec::unit(j, gen_shifts[j]);
            gb.push(f.clone(), c, &mut pending);
        }

        while let Some((k, l)) = gb.select_pair(&pending) {
            pending.remove(&(k, l));

            if gb.chain_criterion(k, l, &pending) {
                trace!("skip pair ({k}, {l}).");
                continue
            }

            let (s, c) = gb.s_vector(k, l);
            let (r, q) = gb.reduce(&s);

            if r.is_zero() {
                trace!("pair ({k}, {l}) reduces to zero.");
                continue
            }

            let c = gb.lift_quot(c, &q);

            trace!("pair ({k}, {l}) adds a new element: {:?}", r.lead_mono());
            gb.push(r, c, &mut pending);
        }

        debug!("gröbner basis: {} generators -> {} elements.", gens.len(), gb.elems.len());

        gb
    }

    pub fn elems(&self) -> &[ModVec<R>] {
        &self.elems
    }

    pub fn cofactors(&self) -> &[ModVec<R>] {
        &self.cofactors
    }

    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn gen_shifts(&self) -> &[isize] {
        &self.gen_shifts
    }

    /// Degrees of the basis elements.
    pub fn shifts(&self) -> Vec<isize> {
        self.elems.iter().map(|g| g.degree().unwrap_or(0)).collect()
    }

    fn push(&mut self, mut g: ModVec<R>, mut c: ModVec<R>, pending: &mut AHashSet<(usize, usize)>) {
        let Some(lc) = g.make_monic() else {
            return
        };
        let Some(lead) = g.lead_mono().cloned() else {
            return
        };
        if let Some(inv) = lc.inv() {
            c = c.scale(&inv);
        }

        let l = self.elems.len();

        for (k, m) in self.leads.iter().enumerate() {
            if m.comp == lead.comp {
                pending.insert((k, l));
            }
        }

        self.elems.push(g);
        self.leads.push(lead);
        self.cofactors.push(c);
    }

    fn lead(&self, k: usize) -> &ModMono {
        &self.leads[k]
    }

    fn lcm(&self, k: usize, l: usize) -> ModMono {
        let (a, b) = (self.lead(k), self.lead(l));
        let m = a.mono.lcm(&b.mono);
        let shift = a.shift(&self.weights);
        ModMono::new(m, a.comp, shift, &self.weights)
    }

    // normal selection: the pair with the smallest lcm.
    fn select_pair(&self, pending: &AHashSet<(usize, usize)>) -> Option<(usize, usize)> {
        pending.iter().min_by(|p, q| {
            let a = self.lcm(p.0, p.1);
            let b = self.lcm(q.0, q.1);
            a.cmp(&b).then_with(|| p.cmp(q))
        }).cloned()
    }

    // Buchberger's second criterion.
    fn chain_criterion(&self, k: usize, l: usize, pending: &AHashSet<(usize, usize)>) -> bool {
        let m = self.lcm(k, l);
        let sorted = |a: usize, b: usize| if a < b { (a, b) } else { (b, a) };

        (0..self.elems.len()).any(|i| {
            i != k && i != l &&
            self.lead(i).divides(&m) &&
            !pending.contains(&sorted(i, k)) &&
            !pending.contains(&sorted(i, l))
        })
    }

    // (m/lm_k)·g_k - (m/lm_l)·g_l and its cofactor.
    fn s_vector(&self, k: usize, l: usize) -> (ModVec<R>, ModVec<R>) {
        let (a, b) = self.s_multipliers(k, l);
        let w = &self.weights;
        let one = R::one();

        let s = self.elems[k].mul_term(&a, &one, w) - self.elems[l].mul_term(&b, &one, w);
        let c = self.cofactors[k].mul_term(&a, &one, w) - self.cofactors[l].mul_term(&b, &one, w);

        (s, c)
    }

    pub(crate) fn s_multipliers(&self, k: usize, l: usize) -> (Mono, Mono) {
        let m = self.lcm(k, l);
        let a = m.mono.checked_div(&self.lead(k).mono).unwrap_or_default();
        let b = m.mono.checked_div(&self.lead(l).mono).unwrap_or_default();
        (a, b)
    }

    /// Pairs `(k, l)`, `k < l`, whose leading terms share a component.
    pub fn pairs(&self) -> Vec<(usize, usize)> {
        let n = self.elems.len();
        let mut res = vec![];
        for l in 0..n {
            for k in 0..l {
                if self.lead(k).comp == self.lead(l).comp {
                    res.push((k, l));
                }
            }
        }
        res
    }

    // c - Σ_u q_u c_u
    fn lift_quot(&self, mut c: ModVec<R>, q: &[Poly<R>]) -> ModVec<R> {
        for (u, q_u) in q.iter().enumerate() {
            if !q_u.is_zero() {
                c -= self.cofactors[u].mul_poly(q_u, &self.weights);
            }
        }
        c
    }

    /// Full reduction of `v`. Returns the remainder `r` and quotients
    /// `q` with `v = Σ_k q_k g_k + r`, where no term of `r` is divisible
    /// by a leading term of the basis.
    pub fn reduce(&self, v: &ModVec<R>) -> (ModVec<R>, Vec<Poly<R>>) {
        let w = &self.weights;
        let mut p = v.clone();
        let mut rem = ModVec::zero();
        let mut quot = vec![Poly::zero(); self.elems.len()];

        while let Some((m, a)) = p.lead().map(|(m, a)| (m.clone(), a.clone())) {
            let found = self.leads.iter().enumerate().find_map(|(k, lm)| {
                if lm.comp == m.comp {
                    m.mono.checked_div(&lm.mono).map(|n| (k, n))
                } else {
                    None
                }
            });

            match found {
                Some((k, n)) => {
                    p -= self.elems[k].mul_term(&n, &a, w);
                    quot[k] += Poly::from_terms([(n, a)]);
                },
                None => {
                    p.remove_term(&m);
                    rem.add_term(m, a);
                }
            }
        }

        (rem, quot)
    }

    pub fn contains(&self, v: &ModVec<R>) -> bool {
        self.reduce(v).0.is_zero()
    }

    /// Expresses `s = Σ_k s_k e_k`, a vector over the basis elements,
    /// in terms of the generators: `Σ_k s_k c_k`.
    pub fn lift(&self, s: &ModVec<R>) -> ModVec<R> {
        let mut res = ModVec::zero();
        for (m, a) in s.iter() {
            res += self.cofactors[m.comp].mul_term(&m.mono, a, &self.weights);
        }
        res
    }

    /// Schreyer's generators of the syzygies of the basis elements:
    /// for each pair, `(m/lm_k) e_k - (m/lm_l) e_l - Σ_u q_u e_u` where
    /// `q` comes from reducing the s-vector to zero.
    pub fn pair_syzygies(&self) -> Vec<ModVec<R>> {
        let w = &self.weights;
        let shifts = self.shifts();
        let one = R::one();

        self.pairs().into_iter().filter_map(|(k, l)| {
            let (s, _) = self.s_vector(k, l);
            let (r, q) = self.reduce(&s);
            debug_assert!(r.is_zero(), "s-vector ({k}, {l}) does not reduce to zero.");

            let (a, b) = self.s_multipliers(k, l);
            let mut syz = ModVec::unit(k, shifts[k]).mul_term(&a, &one, w)
                        - ModVec::unit(l, shifts[l]).mul_term(&b, &one, w);

            for (u, q_u) in q.iter().enumerate() {
                if !q_u.is_zero() {
                    syz -= ModVec::from_poly(q_u, u, shifts[u], w);
                }
            }

            if syz.is_zero() { None } else { Some(syz) }
        }).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fres::{PolyRing, Ratio};

    type Q = Ratio<i64>;

    fn twisted_cubic() -> (PolyRing<Q>, Vec<ModVec<Q>>, Weights) {
        let r = PolyRing::<Q>::new(["x", "y", "z", "w"]);
        let w = Weights::standard(4);
        let gens = ["y*w - z^2", "-x*w + y*z", "x*z - y^2"].iter().map(|s| {
            let f = r.parse(s).unwrap();
            ModVec::from_polys(&[f], &[0], &w)
        }).collect();
        (r, gens, w)
    }

    #[test]
    fn reduce_gens() {
        let (_, gens, w) = twisted_cubic();
        let gb = GroebnerBasis::new(&gens, &[2, 2, 2], &w);

        assert!(gb.len() >= 3);
        for f in gens.iter() {
            assert!(gb.contains(f));
        }
    }

    #[test]
    fn cofactors() {
        let (_, gens, w) = twisted_cubic();
        let gb = GroebnerBasis::new(&gens, &[2, 2, 2], &w);

        for (g, c) in gb.elems().iter().zip(gb.cofactors()) {
            let mut h = ModVec::zero();
            for (j, f) in gens.iter().enumerate() {
                h += f.mul_poly(&c.component(j), &w);
            }
            assert_eq!(&h, g);
        }
    }

    #[test]
    fn quotients() {
        let (r, gens, w) = twisted_cubic();
        let gb = GroebnerBasis::new(&gens, &[2, 2, 2], &w);

        let f = r.parse("x^2*y*w - x^2*z^2 + x*y + 1").unwrap();
        let v = ModVec::from_polys(&[f], &[0], &w);
        let (rem, quot) = gb.reduce(&v);

        let mut h = rem.clone();
        for (g, q) in gb.elems().iter().zip(quot.iter()) {
            h += g.mul_poly(q, &w);
        }
        assert_eq!(h, v);
        assert_eq!(rem.to_polys(1)[0], r.parse("x*y + 1").unwrap());
    }

    #[test]
    fn pair_syzygies() {
        let (_, gens, w) = twisted_cubic();
        let gb = GroebnerBasis::new(&gens, &[2, 2, 2], &w);
        let n = gb.len();

        let syz = gb.pair_syzygies();
        assert!(!syz.is_empty());

        for s in syz.iter() {
            let mut h = ModVec::zero();
            for k in 0..n {
                h += gb.elems()[k].mul_poly(&s.component(k), &w);
            }
            assert!(h.is_zero());
            assert!(matches!(s.degree(), Some(3) | Some(4)));
        }
    }

    #[test]
    fn zero_gens() {
        let w = Weights::standard(2);
        let gens = vec![ModVec::<Q>::zero(), ModVec::zero()];
        let gb = GroebnerBasis::new(&gens, &[0, 0], &w);
        assert!(gb.is_empty());
        assert!(gb.pair_syzygies().is_empty());
    }
}
