use log::{debug, info, warn};
use num_traits::Zero;

use fres::{Field, Poly};
use crate::raw::{RawList, RawModule, RawResolution, RawVector};
use crate::algorithm::Strategy;
use crate::{degrees, minimize, prune, syzygies, Algorithm, GroebnerBasis, ModVec, Weights};

/// A submodule `N ⊂ S^rank` given by generators, to be resolved.
///
/// Each generator is a vector of `rank` polynomials. `shifts` grades the
/// basis of `S^rank` with respect to `weights`.
#[derive(Clone, Debug)]
pub struct Presentation<R>
where R: Field {
    pub nvars: usize,
    pub rank: usize,
    pub gens: Vec<Vec<Poly<R>>>,
    pub weights: Weights,
    pub shifts: Vec<isize>,
}

impl<R> Presentation<R>
where R: Field {
    /// Standard grading, no shifts.
    pub fn new(nvars: usize, rank: usize, gens: Vec<Vec<Poly<R>>>) -> Self {
        Self {
            nvars,
            rank,
            gens,
            weights: Weights::standard(nvars),
            shifts: vec![0; rank],
        }
    }

    pub fn ideal(nvars: usize, gens: Vec<Poly<R>>) -> Self {
        Self::new(nvars, 1, gens.into_iter().map(|f| vec![f]).collect())
    }

    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_shifts(mut self, shifts: Vec<isize>) -> Self {
        assert_eq!(shifts.len(), self.rank);
        self.shifts = shifts;
        self
    }
}

/// Computes minimal free resolutions.
///
/// `resolve` returns the steps `M_1, M_2, …` of the resolution of
/// `S^rank / N` in the raw tagged format, followed by one all-zero step.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    algorithm: Algorithm
}

impl Engine {
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn resolve<R>(&self, p: &Presentation<R>) -> RawResolution<R>
    where R: Field {
        let w = &p.weights;
        let max_steps = p.nvars + 1;

        info!("resolve: rank {}, {} generators, algorithm: {}.", p.rank, p.gens.len(), self.algorithm);

        let mut rank = p.rank;
        let mut cur = p.gens.iter().map(|f|
            ModVec::from_polys(f, &p.shifts, w)
        ).filter(|v| !v.is_zero()).collect::<Vec<_>>();

        let mut steps = vec![];

        while !cur.is_empty() {
            if steps.len() >= max_steps {
                warn!("resolve: stopped after {max_steps} steps.");
                break
            }

            let i = steps.len() + 1;
            let strategy = self.algorithm.strategy(cur.len(), p.nvars);

            debug!("step {i}: {strategy:?}");

            let next = match strategy {
                Strategy::Interleaved => {
                    cur = minimize(&cur, w);
                    syzygies(&cur, w)
                },
                Strategy::Prune { schreyer } => {
                    let mut next = if schreyer {
                        let gb = GroebnerBasis::new(&cur, &degrees(&cur), w);
                        let next = gb.pair_syzygies();
                        cur = gb.elems().to_vec();
                        next
                    } else {
                        syzygies(&cur, w)
                    };
                    let mut shifts = degrees(&cur);
                    prune(&mut cur, &mut next, &mut shifts, w);
                    next
                }
            };

            info!("step {i}: S^{rank} <- S^{}", cur.len());

            steps.push(RawModule::from_vecs(rank, &cur));

            rank = cur.len();
            cur = next;
        }

        // the trailing zero step.
        steps.push(RawModule::new(rank, vec![RawVector::zero()]));

        let len = steps.len();
        let entries = steps.into_iter().map(Some).collect();

        RawResolution::new(Some(RawList::new(len, entries)), None)
    }
}
