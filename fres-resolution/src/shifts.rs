use log::warn;

use crate::{Degree, DegreeTable};
use crate::error::{err, Result};

/// Shifts of `F_i` from the degree table of `M_i` and the shifts of
/// `F_{i-1}`: for each column, `e + prev[r]` where `r` is the first row
/// with an entry of defined degree `e`.
pub fn next_shifts(table: &DegreeTable, prev: &[Degree]) -> Result<Vec<Degree>> {
    table.iter().enumerate().map(|(j, col)| -> Result<Degree> {
        let found = col.iter().enumerate().find_map(|(r, e)|
            e.as_ref().map(|e| (r, e))
        );
        let Some((r, e)) = found else {
            return err!(UnusableResolution, "column {j} has no nonzero entry.")
        };
        let Some(s) = prev.get(r) else {
            return err!(UnusableResolution, "row {r} out of range for {} shifts.", prev.len())
        };
        let d = e + s;

        let disagree = col.iter().zip(prev).any(|(e, s)|
            e.as_ref().is_some_and(|e| e + s != d)
        );
        if disagree {
            warn!("column {j}: entries of inhomogeneous degrees, using row {r}.");
        }

        Ok(d)
    }).collect()
}

/// `[init, shifts(F₁), …, shifts(Fₙ)]`.
pub fn graded_shifts(tables: &[DegreeTable], init: Vec<Degree>) -> Result<Vec<Vec<Degree>>> {
    let mut res = vec![init];
    for t in tables {
        let prev = res.last().map(|v| v.as_slice()).unwrap_or(&[]);
        let next = next_shifts(t, prev)?;
        res.push(next);
    }
    Ok(res)
}
