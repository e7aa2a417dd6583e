use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use log::{debug, warn};

use crate::{
    error::{Result, SvmErr},
    model::Model,
    parameter::Parameter,
};

/// Whitespace separated tokens read line by line into an owned, growing buffer.
struct Tokens<R> {
    input: R,
    line: String,
    pos: usize,
    line_no: usize,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            line: String::new(),
            pos: 0,
            line_no: 0,
        }
    }

    /// Returns the next token, `None` at the end of the input.
    fn next_token(&mut self) -> Result<Option<&str>> {
        loop {
            let rest = &self.line[self.pos..];
            if let Some(offset) = rest.find(|c: char| !c.is_whitespace()) {
                let start = self.pos + offset;
                let len = self.line[start..]
                    .find(char::is_whitespace)
                    .unwrap_or(self.line.len() - start);

                self.pos = start + len;
                return Ok(Some(&self.line[start..self.pos]));
            }

            self.line.clear();
            self.pos = 0;
            if self.input.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.line_no += 1;
        }
    }

    fn expect(&mut self, what: &'static str) -> Result<&str> {
        self.next_token()?.ok_or(SvmErr::MissingToken { what })
    }

    fn parse<T: FromStr>(&mut self, what: &'static str) -> Result<T> {
        let token = self.expect(what)?;

        match token.parse() {
            Ok(value) => Ok(value),
            Err(_) => {
                let token = token.to_string();
                Err(SvmErr::MalformedNumber {
                    what,
                    token,
                    line: self.line_no,
                })
            }
        }
    }
}

/// Reads a model written by `write_model`.
///
/// Directives may come in any order but `w` must be the last one: its `dim` values
/// have to be followed by the end of the input. Fields that aren't persisted keep
/// their `Parameter::default` values.
///
/// # Arguments
/// * `input` - The source to read from.
///
/// # Returns
/// The model, or an error on unknown directives or names, missing or malformed
/// numbers, data after the `w` record and I/O failures.
pub fn read_model<R: BufRead>(input: R) -> Result<Model> {
    let mut tokens = Tokens::new(input);
    let mut param = Parameter::default();
    let mut dim = 0;

    loop {
        let cmd = tokens.expect("w record")?.to_owned();

        match cmd.as_str() {
            "svm_type" => param.svm_type = tokens.expect("svm type")?.parse()?,
            "kernel_type" => param.kernel_type = tokens.expect("kernel type")?.parse()?,
            "degree" => param.degree = tokens.parse("degree")?,
            "gamma" => param.gamma = tokens.parse("gamma")?,
            "coef0" => param.coef0 = tokens.parse("coef0")?,
            "dim" => dim = tokens.parse("dim")?,
            "w" => break,
            _ => return Err(SvmErr::UnknownKeyword(cmd)),
        }
    }

    let w = (0..dim)
        .map(|_| tokens.parse("weight"))
        .collect::<Result<Vec<f64>>>()?;

    if tokens.next_token()?.is_some() {
        return Err(SvmErr::TrailingTokens {
            line: tokens.line_no,
        });
    }

    Ok(Model { param, dim, w })
}

/// Loads a model from the file at `path`.
///
/// # Arguments
/// * `path` - The model file.
///
/// # Returns
/// The model, see `read_model` for the possible errors.
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<Model> {
    let path = path.as_ref();

    let model = File::open(path)
        .map_err(SvmErr::from)
        .and_then(|file| read_model(BufReader::new(file)));

    match &model {
        Ok(model) => debug!(dim = model.dim; "model loaded from {}", path.display()),
        Err(e) => warn!("failed to load model from {}: {e}", path.display()),
    }

    model
}
