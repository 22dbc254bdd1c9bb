use fres_engine::Algorithm;
use crate::{Degree, Grading};
use crate::error::{ensure, Error, Result};

fn parse_algorithm(name: &str) -> Result<Algorithm> {
    name.parse::<Algorithm>().map_err(Error::Config)
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ResolutionConfig {
    pub algorithm: Algorithm,
    pub name: String,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            name: String::from("S"),
        }
    }
}

impl ResolutionConfig {
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_algorithm_name(mut self, name: &str) -> Result<Self> {
        self.algorithm = parse_algorithm(name)?;
        Ok(self)
    }

    pub fn with_name<S>(mut self, name: S) -> Self
    where S: ToString {
        self.name = name.to_string();
        self
    }
}

/// Options for a graded resolution.
///
/// `degrees` defaults to every variable in degree `1`, and `shifts` to
/// every basis element of the target in degree zero.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GradedConfig {
    pub degrees: Option<Vec<Degree>>,
    pub shifts: Option<Vec<Degree>>,
    pub algorithm: Algorithm,
    pub name: String,
}

impl Default for GradedConfig {
    fn default() -> Self {
        Self {
            degrees: None,
            shifts: None,
            algorithm: Algorithm::default(),
            name: String::from("S"),
        }
    }
}

impl GradedConfig {
    pub fn with_degrees<I, D>(mut self, degrees: I) -> Self
    where I: IntoIterator<Item = D>, D: Into<Degree> {
        self.degrees = Some(degrees.into_iter().map(|d| d.into()).collect());
        self
    }

    pub fn with_shifts<I, D>(mut self, shifts: I) -> Self
    where I: IntoIterator<Item = D>, D: Into<Degree> {
        self.shifts = Some(shifts.into_iter().map(|d| d.into()).collect());
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_algorithm_name(mut self, name: &str) -> Result<Self> {
        self.algorithm = parse_algorithm(name)?;
        Ok(self)
    }

    pub fn with_name<S>(mut self, name: S) -> Self
    where S: ToString {
        self.name = name.to_string();
        self
    }

    pub fn grading(&self, nvars: usize) -> Result<Grading> {
        let Some(degrees) = &self.degrees else {
            return Ok(Grading::standard(nvars))
        };
        ensure!(
            degrees.len() == nvars,
            Config, "length mismatch: {} degrees for {nvars} variables.", degrees.len()
        );
        Grading::new(degrees.clone())
    }

    /// Degrees of the basis of the target free module `F₀`.
    pub fn init_shifts(&self, grading: &Grading, rank: usize) -> Result<Vec<Degree>> {
        let Some(shifts) = &self.shifts else {
            return Ok(vec![grading.zero(); rank])
        };
        ensure!(
            shifts.len() == rank,
            Config, "length mismatch: {} shifts for rank {rank}.", shifts.len()
        );
        ensure!(
            shifts.iter().all(|d| d.dim() == grading.dim()),
            Config, "shifts must have dimension {}.", grading.dim()
        );
        Ok(shifts.clone())
    }
}
