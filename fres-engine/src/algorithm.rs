use std::str::FromStr;

use derive_more::Display;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the engine builds the resolution.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Minimizes the generators at every step before taking syzygies.
    #[display("minimal")]
    Minimal,

    /// Works with Gröbner bases and their Schreyer syzygies, cancelling
    /// units between consecutive steps.
    #[default]
    #[display("shreyer")]
    Shreyer,

    /// Takes a full set of syzygies at every step and cancels units.
    #[display("standard")]
    Standard,

    /// Picks one of the above from the size of the input.
    #[display("heuristic")]
    Heuristic,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Minimal,
        Algorithm::Shreyer,
        Algorithm::Standard,
        Algorithm::Heuristic,
    ];

    pub(crate) fn strategy(&self, ngens: usize, nvars: usize) -> Strategy {
        match self {
            Algorithm::Minimal  => Strategy::Interleaved,
            Algorithm::Shreyer  => Strategy::Prune { schreyer: true },
            Algorithm::Standard => Strategy::Prune { schreyer: false },
            Algorithm::Heuristic => if ngens <= nvars + 1 {
                Strategy::Interleaved
            } else {
                Strategy::Prune { schreyer: true }
            }
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "minimal"   => Ok(Algorithm::Minimal),
            "shreyer" | "schreyer" => Ok(Algorithm::Shreyer),
            "standard"  => Ok(Algorithm::Standard),
            "heuristic" => Ok(Algorithm::Heuristic),
            _ => Err(format!("unknown algorithm: {s}"))
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Strategy {
    Interleaved,
    Prune { schreyer: bool },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        for a in Algorithm::ALL {
            assert_eq!(a.to_string().parse::<Algorithm>(), Ok(a));
        }
        assert_eq!("Schreyer".parse::<Algorithm>(), Ok(Algorithm::Shreyer));
        assert_eq!(" MINIMAL ".parse::<Algorithm>(), Ok(Algorithm::Minimal));
        assert!("fastest".parse::<Algorithm>().is_err());
    }

    #[test]
    fn default() {
        assert_eq!(Algorithm::default(), Algorithm::Shreyer);
    }

    #[test]
    fn heuristic() {
        let a = Algorithm::Heuristic;
        assert_eq!(a.strategy(3, 4), Strategy::Interleaved);
        assert_eq!(a.strategy(5, 4), Strategy::Interleaved);
        assert_eq!(a.strategy(6, 4), Strategy::Prune { schreyer: true });
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serialize() {
        let ser = serde_json::to_string(&Algorithm::Heuristic).unwrap();
        assert_eq!(ser, "\"heuristic\"");

        let des: Algorithm = serde_json::from_str("\"standard\"").unwrap();
        assert_eq!(des, Algorithm::Standard);
    }
}
