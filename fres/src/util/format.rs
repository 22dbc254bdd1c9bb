use std::fmt::Display;
use itertools::Itertools;
use num_traits::ToPrimitive;

pub fn paren_expr<S>(s: S) -> String
where S: Display {
    let s = s.to_string();
    if s.contains(' ') {
        format!("({s})")
    } else {
        s
    }
}

/// Formats a linear combination `r₀x₀ + r₁x₁ + ...`, folding
/// unit coefficients and leading signs.
pub fn lc<X, R, S>(mut terms: S) -> String
where
    X: Display,
    R: Display,
    S: Iterator<Item = (X, R)>
{
    let mut res: Vec<String> = vec![];

    if let Some((x, r)) = terms.next() {
        let r = paren_expr(r);
        let x = x.to_string();

        let term = if r == "1" {
            x
        } else if r == "-1" && x != "1" {
            format!("-{x}")
        } else if x == "1" {
            r
        } else {
            format!("{r}{x}")
        };

        res.push(term)
    };

    for (x, r) in terms {
        let r = paren_expr(r);
        let x = x.to_string();

        let (op, r) = match r.strip_prefix('-') {
            Some(r) => ("-", r.to_owned()),
            None    => ("+", r)
        };

        let term = if r == "1" {
            x
        } else if x == "1" {
            r
        } else {
            format!("{r}{x}")
        };

        res.push(op.to_string());
        res.push(term);
    }

    if res.is_empty() {
        String::from("0")
    } else {
        res.join(" ")
    }
}

fn script<I, F>(i: I, minus: char, digit: F) -> String
where I: ToPrimitive, F: Fn(u32) -> char {
    let i = i.to_i128().unwrap_or_default();
    let init = if i < 0 { minus.to_string() } else { String::new() };

    i.unsigned_abs().to_string().chars().fold(init, |mut res, c| {
        let d = c.to_digit(10).unwrap_or_default();
        res.push(digit(d));
        res
    })
}

pub fn subscript<I>(i: I) -> String
where I: ToPrimitive {
    script(i, '\u{208B}', |d|
        char::from_u32(('\u{2080}' as u32) + d).unwrap_or('?')
    )
}

pub fn superscript<I>(i: I) -> String
where I: ToPrimitive {
    script(i, '\u{207B}', |d| match d {
        1 => '\u{00B9}',
        2 => '\u{00B2}',
        3 => '\u{00B3}',
        _ => char::from_u32(('\u{2070}' as u32) + d).unwrap_or('?')
    })
}

pub fn table<S, I, J, I1, I2, D, F>(head: S, rows: I1, cols: I2, entry: F) -> String
where
    S: Display,
    I: Display,
    J: Display,
    I1: Iterator<Item = I>,
    I2: Iterator<Item = J>,
    D: Display,
    F: Fn(&I, &J) -> D
{
    use prettytable::*;

    let rows = rows.collect_vec();
    let cols = cols.collect_vec();

    fn row<I>(head: String, cols: I) -> Row
    where I: Iterator<Item = String> {
        let mut cells = vec![Cell::new(head.as_str())];
        cells.extend(cols.map(|str| Cell::new(str.as_str())));
        Row::new(cells)
    }

    let mut table = Table::new();

    table.set_format(*format::consts::FORMAT_CLEAN);
    table.set_titles(row(
        head.to_string(),
        cols.iter().map(|j| j.to_string() )
    ));

    for i in rows.iter() {
        table.add_row(row(
            i.to_string(),
            cols.iter().map(|j| entry(i, j).to_string())
        ));
    }

    table.to_string()
}
