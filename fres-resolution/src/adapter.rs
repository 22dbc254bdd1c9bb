use log::info;

use fres::{Field, Poly, PolyRing};
use fres_engine::{Algorithm, Engine, Presentation, Weights};
use fres_engine::raw::RawResolution;
use fres_matrix::{Mat, MatType};
use crate::{decode, Decoded, Degree, Grading};
use crate::error::{ensure, Result};

/// What to resolve: `S/I` for an ideal `I`, or `S^r/N` for a submodule
/// `N ⊂ S^r` given by generators or by the columns of a matrix.
#[derive(Clone, Debug)]
pub enum ResolutionInput<R>
where R: Field {
    FromIdeal { ring: PolyRing<R>, gens: Vec<Poly<R>> },
    FromSubmodule { ring: PolyRing<R>, rank: usize, gens: Vec<Vec<Poly<R>>> },
    FromMatrix { ring: PolyRing<R>, matrix: Mat<Poly<R>> },
}

impl<R> ResolutionInput<R>
where R: Field {
    pub fn ideal(ring: &PolyRing<R>, gens: Vec<Poly<R>>) -> Self {
        Self::FromIdeal { ring: ring.clone(), gens }
    }

    pub fn submodule(ring: &PolyRing<R>, rank: usize, gens: Vec<Vec<Poly<R>>>) -> Self {
        Self::FromSubmodule { ring: ring.clone(), rank, gens }
    }

    pub fn matrix(ring: &PolyRing<R>, matrix: Mat<Poly<R>>) -> Self {
        Self::FromMatrix { ring: ring.clone(), matrix }
    }

    /// The ideal generated by the parsed polynomials.
    pub fn parse_ideal<S>(ring: &PolyRing<R>, gens: &[S]) -> Result<Self>
    where R: std::str::FromStr, S: AsRef<str> {
        let gens = ring.parse_all(gens).map_err(crate::Error::Config)?;
        Ok(Self::ideal(ring, gens))
    }

    pub fn ring(&self) -> &PolyRing<R> {
        match self {
            Self::FromIdeal { ring, .. } |
            Self::FromSubmodule { ring, .. } |
            Self::FromMatrix { ring, .. } => ring
        }
    }

    /// The rank of `F₀`.
    pub fn target_rank(&self) -> usize {
        match self {
            Self::FromIdeal { .. } => 1,
            Self::FromSubmodule { rank, .. } => *rank,
            Self::FromMatrix { matrix, .. } => matrix.rows(),
        }
    }

    /// The ring, the generators as vectors of length `target_rank`, and
    /// `target_rank`.
    pub fn presentation(&self) -> (&PolyRing<R>, Vec<Vec<Poly<R>>>, usize) {
        let gens = match self {
            Self::FromIdeal { gens, .. } =>
                gens.iter().map(|f| vec![f.clone()]).collect(),
            Self::FromSubmodule { gens, .. } =>
                gens.clone(),
            Self::FromMatrix { matrix, .. } =>
                matrix.cols_vec(),
        };
        (self.ring(), gens, self.target_rank())
    }

    fn validate(&self) -> Result<()> {
        let (ring, gens, rank) = self.presentation();

        ensure!(ring.nvars() > 0, Config, "the ring {ring} has no variables.");

        for (j, g) in gens.iter().enumerate() {
            ensure!(
                g.len() == rank,
                Config, "length mismatch: generator {j} has {} entries, expected {rank}.", g.len()
            );
            for f in g.iter() {
                ensure!(
                    ring.contains(f),
                    Config, "{f} is not an element of {ring}."
                );
            }
        }

        Ok(())
    }
}

/// Runs the engine on a [`ResolutionInput`].
pub struct EngineAdapter;

impl EngineAdapter {
    /// Resolves `input` under the standard grading.
    pub fn invoke<R>(input: &ResolutionInput<R>, algorithm: Algorithm) -> Result<ResolutionHandle<R>>
    where R: Field {
        let nvars = input.ring().nvars();
        let rank = input.target_rank();
        Self::run(input, algorithm, Weights::standard(nvars), vec![0; rank])
    }

    /// Resolves `input`, ordering monomials compatibly with `grading` and
    /// the degrees `shifts` of the basis of `F₀`.
    pub fn invoke_graded<R>(input: &ResolutionInput<R>, algorithm: Algorithm, grading: &Grading, shifts: &[Degree]) -> Result<ResolutionHandle<R>>
    where R: Field {
        let weights = grading.weights();
        let shifts = shifts.iter().map(|d| grading.weigh(d)).collect();
        Self::run(input, algorithm, weights, shifts)
    }

    fn run<R>(input: &ResolutionInput<R>, algorithm: Algorithm, weights: Weights, shifts: Vec<isize>) -> Result<ResolutionHandle<R>>
    where R: Field {
        input.validate()?;

        let (ring, gens, rank) = input.presentation();

        info!("invoke engine: {ring}, rank {rank}, {} generators.", gens.len());

        let p = Presentation::new(ring.nvars(), rank, gens)
            .with_weights(weights)
            .with_shifts(shifts);

        let raw = Engine::new(algorithm).resolve(&p);

        Ok(ResolutionHandle::new(ring.clone(), rank, raw))
    }
}

/// The engine's output for one input, consumed by decoding.
#[derive(Debug)]
pub struct ResolutionHandle<R>
where R: Field {
    ring: PolyRing<R>,
    rank: usize,
    raw: RawResolution<R>,
}

impl<R> ResolutionHandle<R>
where R: Field {
    pub fn new(ring: PolyRing<R>, rank: usize, raw: RawResolution<R>) -> Self {
        Self { ring, rank, raw }
    }

    pub fn ring(&self) -> &PolyRing<R> {
        &self.ring
    }

    pub fn target_rank(&self) -> usize {
        self.rank
    }

    pub fn decode(self, grading: Option<&Grading>) -> Result<Decoded<R>> {
        decode(self.raw, grading)
    }
}
