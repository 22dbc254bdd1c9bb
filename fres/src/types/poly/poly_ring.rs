use std::fmt::Display;
use std::marker::PhantomData;
use std::str::FromStr;

use itertools::Itertools;
use regex::Regex;

use crate::Ring;
use super::{Mono, Poly};

/// The polynomial ring `R[x₀, …, x_{n-1}]` with named variables.
/// Variable `i` is `x_i` in [`Poly`], ordered `x₀ > x₁ > ⋯`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolyRing<R> {
    names: Vec<String>,
    _base: PhantomData<R>
}

impl<R> PolyRing<R>
where R: Ring {
    pub fn new<I, S>(names: I) -> Self
    where I: IntoIterator<Item = S>, S: ToString {
        let names = names.into_iter().map(|s| s.to_string()).collect();
        Self { names, _base: PhantomData }
    }

    pub fn with_nvars(n: usize) -> Self {
        Self::new((0..n).map(|i| format!("x{i}")))
    }

    pub fn nvars(&self) -> usize {
        self.names.len()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|x| x == name)
    }

    pub fn var(&self, i: usize) -> Poly<R> {
        assert!(i < self.nvars(), "variable index {i} out of range.");
        Poly::variable(i)
    }

    pub fn vars(&self) -> Vec<Poly<R>> {
        (0..self.nvars()).map(Poly::variable).collect()
    }

    /// Whether `f` only involves variables of this ring.
    pub fn contains(&self, f: &Poly<R>) -> bool {
        f.max_var().map(|i| i < self.nvars()).unwrap_or(true)
    }

    pub fn format(&self, f: &Poly<R>) -> String {
        f.fmt_with(&self.names)
    }

    /// Parses strings like `"y*w - z^2"` or `"3/2*x^2*y + 1"`.
    pub fn parse(&self, s: &str) -> Result<Poly<R>, String>
    where R: FromStr {
        let s = s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
        if s.is_empty() {
            return Err(String::from("empty expression"))
        }

        let var = Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)(?:\^(\d+))?$").map_err(|e| e.to_string())?;
        let terms = Self::split_terms(&s);
        let terms = terms.into_iter().map(|t|
            self.parse_term(&var, t)
        ).collect::<Result<Vec<_>, _>>()?;

        Ok(Poly::from_terms(terms))
    }

    pub fn parse_all<S>(&self, list: &[S]) -> Result<Vec<Poly<R>>, String>
    where R: FromStr, S: AsRef<str> {
        list.iter().map(|s| self.parse(s.as_ref())).collect()
    }

    // splits at top-level '+' / '-', keeping the sign with its term.
    fn split_terms(s: &str) -> Vec<&str> {
        let mut res = vec![];
        let mut start = 0;
        let mut prev = None;

        for (i, c) in s.char_indices() {
            if (c == '+' || c == '-') && i > 0 && !matches!(prev, Some('*' | '^' | '/')) {
                res.push(&s[start..i]);
                start = i;
            }
            prev = Some(c);
        }
        res.push(&s[start..]);
        res
    }

    fn parse_term(&self, var: &Regex, t: &str) -> Result<(Mono, R), String>
    where R: FromStr {
        let (neg, body) = if let Some(b) = t.strip_prefix('-') {
            (true, b)
        } else if let Some(b) = t.strip_prefix('+') {
            (false, b)
        } else {
            (false, t)
        };

        if body.is_empty() {
            return Err(format!("missing term in '{t}'"))
        }

        let mut mono = Mono::one();
        let mut coeff = if neg { -R::one() } else { R::one() };

        for f in body.split('*') {
            if let Some(c) = var.captures(f) {
                let name = &c[1];
                let Some(i) = self.index_of(name) else {
                    return Err(format!("unknown variable: '{name}'"))
                };
                let e = match c.get(2) {
                    Some(e) => e.as_str().parse::<usize>().map_err(|e| e.to_string())?,
                    None => 1
                };
                mono *= Mono::from_iter([(i, e)]);
            } else {
                let a = f.parse::<R>().map_err(|_| format!("cannot parse factor: '{f}'"))?;
                coeff *= a;
            }
        }

        Ok((mono, coeff))
    }
}

impl<R> Display for PolyRing<R>
where R: Ring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]", R::math_symbol(), self.names.iter().join(", "))
    }
}
