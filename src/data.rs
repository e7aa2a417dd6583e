use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::debug;

use crate::{
    error::{Result, SvmErr},
    problem::Problem,
    sparse::{Feature, SparseVector},
};

/// Reads a problem in the sparse `label index:value index:value ...` text format.
///
/// One example per line, blank lines are skipped. Feature indices start at 1 and must
/// be strictly increasing within a line. The dimensionality is the largest index seen
/// and the divisors are the per-feature occurrence counts.
///
/// # Arguments
/// * `input` - The source to read from.
///
/// # Returns
/// The problem, or a `MalformedNumber` error pointing at the offending line.
pub fn read_problem<R: BufRead>(input: R) -> Result<Problem> {
    let mut ys = Vec::new();
    let mut xs = Vec::new();
    let mut dim = 0;

    for (k, line) in input.lines().enumerate() {
        let line = line?;
        let line_no = k + 1;

        let mut tokens = line.split_whitespace();
        let Some(label) = tokens.next() else {
            continue;
        };

        ys.push(parse(label, "label", line_no)?);

        let mut features = Vec::new();
        for token in tokens {
            let feat = parse_feature(token, line_no)?;

            if features.last().is_some_and(|prev: &Feature| feat.index <= prev.index) {
                return Err(SvmErr::MalformedNumber {
                    what: "feature index",
                    token: token.to_string(),
                    line: line_no,
                });
            }

            features.push(feat);
        }

        let x = SparseVector::new(features);
        dim = dim.max(x.max_index());
        xs.push(x);
    }

    debug!(examples = xs.len(), dim = dim; "problem read");
    Problem::with_occurrence_counts(dim, ys, xs)
}

/// Reads a problem from the file at `path`, see `read_problem`.
pub fn load_problem<P: AsRef<Path>>(path: P) -> Result<Problem> {
    let file = File::open(path)?;
    read_problem(BufReader::new(file))
}

fn parse_feature(token: &str, line_no: usize) -> Result<Feature> {
    let (index, value) = token.split_once(':').ok_or_else(|| SvmErr::MalformedNumber {
        what: "feature",
        token: token.to_string(),
        line: line_no,
    })?;

    let index: usize = parse(index, "feature index", line_no)?;
    if index == 0 {
        return Err(SvmErr::MalformedNumber {
            what: "feature index",
            token: token.to_string(),
            line: line_no,
        });
    }

    let value = parse(value, "feature value", line_no)?;
    Ok(Feature::new(index, value))
}

fn parse<T: std::str::FromStr>(token: &str, what: &'static str, line_no: usize) -> Result<T> {
    token.parse().map_err(|_| SvmErr::MalformedNumber {
        what,
        token: token.to_string(),
        line: line_no,
    })
}
