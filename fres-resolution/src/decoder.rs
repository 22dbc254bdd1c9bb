use itertools::Itertools;
use log::debug;

use fres::{Field, Mono, Poly};
use fres_engine::raw::{RawModule, RawResolution};
use fres_matrix::{Mat, MatType};
use crate::{Degree, Grading};
use crate::error::{err, ensure, Result};

/// Degrees of the entries of one matrix, indexed `[column][row]`.
/// `None` marks a zero entry, whose degree is undefined.
pub type DegreeTable = Vec<Vec<Option<Degree>>>;

/// The matrices `M₁, …, Mₙ` of a resolution, and their degree tables when
/// decoded with a grading.
#[derive(Clone, Debug)]
pub struct Decoded<R>
where R: Field {
    pub mats: Vec<Mat<Poly<R>>>,
    pub degrees: Option<Vec<DegreeTable>>,
}

/// Converts the engine's tagged vectors into matrices.
///
/// Reads the minimal list if present, else the full one. Stops at the
/// first missing entry, at the declared length, or at the first matrix
/// with no nonzero entry.
pub fn decode<R>(raw: RawResolution<R>, grading: Option<&Grading>) -> Result<Decoded<R>>
where R: Field {
    let list = match raw.into_parts() {
        (Some(list), _) => list,
        (None, Some(list)) => {
            debug!("no minimal resolution, decoding the full one.");
            list
        },
        (None, None) => {
            return err!(UnusableResolution, "the engine returned no resolution.")
        }
    };

    let n = list.declared_len().min(list.entries().len());
    let mut mats = vec![];

    for (i, entry) in list.entries().iter().take(n).enumerate() {
        let Some(module) = entry else {
            debug!("step {}: null entry.", i + 1);
            break
        };

        let mat = decode_module(module)?;

        if mat.is_zero() {
            debug!("step {}: zero matrix.", i + 1);
            break
        }

        debug!("step {}: {} x {}", i + 1, mat.rows(), mat.cols());
        mats.push(mat);
    }

    let degrees = grading.map(|g|
        mats.iter().map(|a| degree_table(a, g)).collect()
    );

    Ok(Decoded { mats, degrees })
}

fn decode_module<R>(module: &RawModule<R>) -> Result<Mat<Poly<R>>>
where R: Field {
    let rank = module.rank();
    let cols = module.gens().iter().map(|v| -> Result<Vec<Poly<R>>> {
        let mut rows = vec![vec![]; rank];

        for t in v.terms() {
            ensure!(
                1 <= t.tag && t.tag <= rank,
                UnusableResolution, "component {} out of range 1..={rank}.", t.tag
            );
            rows[t.tag - 1].push((t.mono.clone(), t.coeff.clone()));
        }

        Ok(rows.into_iter().map(Poly::from_terms).collect_vec())
    }).collect::<Result<Vec<_>>>()?;

    Ok(Mat::from_cols(rank, cols))
}

/// The degree of each entry, read off one of its monomials.
pub fn degree_table<R>(a: &Mat<Poly<R>>, grading: &Grading) -> DegreeTable
where R: Field {
    let (m, n) = a.shape();
    (0..n).map(|j|
        (0..m).map(|i|
            a[(i, j)].lead_mono().map(|x: &Mono| grading.degree_of(x))
        ).collect()
    ).collect()
}
