//! The engine's native output.
//!
//! Vectors are lists of terms tagged with a 1-based component index.
//! Lists carry a declared length that may run past the modules actually
//! computed, and entries may be absent.

use fres::{Field, Mono};
use crate::ModVec;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RawTerm<R> {
    pub tag: usize,
    pub mono: Mono,
    pub coeff: R,
}

impl<R> RawTerm<R> {
    pub fn new(tag: usize, mono: Mono, coeff: R) -> Self {
        Self { tag, mono, coeff }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RawVector<R> {
    terms: Vec<RawTerm<R>>
}

impl<R> RawVector<R> {
    pub fn new(terms: Vec<RawTerm<R>>) -> Self {
        Self { terms }
    }

    pub fn zero() -> Self {
        Self { terms: vec![] }
    }

    pub fn terms(&self) -> &[RawTerm<R>] {
        &self.terms
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<R> From<&ModVec<R>> for RawVector<R>
where R: Field {
    fn from(v: &ModVec<R>) -> Self {
        let terms = v.iter().rev().map(|(m, r)|
            RawTerm::new(m.comp() + 1, m.mono().clone(), r.clone())
        ).collect();
        Self { terms }
    }
}

/// Generators of a submodule of `S^rank`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RawModule<R> {
    rank: usize,
    gens: Vec<RawVector<R>>,
}

impl<R> RawModule<R> {
    pub fn new(rank: usize, gens: Vec<RawVector<R>>) -> Self {
        Self { rank, gens }
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn gens(&self) -> &[RawVector<R>] {
        &self.gens
    }
}

impl<R> RawModule<R>
where R: Field {
    pub fn from_vecs(rank: usize, vecs: &[ModVec<R>]) -> Self {
        let gens = vecs.iter().map(RawVector::from).collect();
        Self { rank, gens }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RawList<R> {
    declared_len: usize,
    entries: Vec<Option<RawModule<R>>>,
}

impl<R> RawList<R> {
    pub fn new(declared_len: usize, entries: Vec<Option<RawModule<R>>>) -> Self {
        Self { declared_len, entries }
    }

    pub fn declared_len(&self) -> usize {
        self.declared_len
    }

    pub fn entries(&self) -> &[Option<RawModule<R>>] {
        &self.entries
    }
}

/// The result of a run: the minimal resolution, the full (possibly
/// non-minimal) one, or both. Either may be missing.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RawResolution<R> {
    minimal: Option<RawList<R>>,
    full: Option<RawList<R>>,
}

impl<R> RawResolution<R> {
    pub fn new(minimal: Option<RawList<R>>, full: Option<RawList<R>>) -> Self {
        Self { minimal, full }
    }

    pub fn minimal(&self) -> Option<&RawList<R>> {
        self.minimal.as_ref()
    }

    pub fn full(&self) -> Option<&RawList<R>> {
        self.full.as_ref()
    }

    pub fn into_parts(self) -> (Option<RawList<R>>, Option<RawList<R>>) {
        (self.minimal, self.full)
    }
}
