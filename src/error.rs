use std::{error::Error, fmt, io};

use crate::parameter::InvalidParameter;

/// The crate's result type.
pub type Result<T> = std::result::Result<T, SvmErr>;

/// Failures surfaced by training, persistence, prediction and data loading.
#[derive(Debug)]
pub enum SvmErr {
    /// An underlying I/O error while reading or writing a file.
    Io(io::Error),

    /// A structural invariant was violated (e.g. mismatched lengths).
    ShapeMismatch {
        /// Human-readable context for the mismatch (e.g. "labels", "divisors").
        what: &'static str,
        /// Observed value.
        got: usize,
        /// Expected value.
        expected: usize,
    },

    /// A model file contained a directive that isn't part of the format.
    UnknownKeyword(String),
    UnknownSvmType(String),
    UnknownKernelType(String),

    /// A token that should have been a number couldn't be parsed as one.
    MalformedNumber {
        what: &'static str,
        token: String,
        line: usize,
    },

    /// The input ended while a value was still expected.
    MissingToken { what: &'static str },

    /// The model file kept going after the final `w` record.
    TrailingTokens { line: usize },

    /// A parameter set failed validation.
    InvalidParameter(InvalidParameter),

    /// The classification worker pool couldn't be built.
    ThreadPool(rayon::ThreadPoolBuildError),

    /// Probability estimates aren't implemented for this linear solver.
    ProbabilityUnsupported,

    /// The binary's configuration is incomplete or inconsistent.
    InvalidConfig(String),

    /// A JSON parameter file couldn't be decoded.
    Json(serde_json::Error),
}

impl fmt::Display for SvmErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SvmErr::Io(e) => write!(f, "io error: {e}"),
            SvmErr::ShapeMismatch {
                what,
                got,
                expected,
            } => write!(f, "shape mismatch for {what}: got {got}, expected {expected}"),
            SvmErr::UnknownKeyword(cmd) => write!(f, "unknown text in model file: [{cmd}]"),
            SvmErr::UnknownSvmType(name) => write!(f, "unknown svm type: {name}"),
            SvmErr::UnknownKernelType(name) => write!(f, "unknown kernel type: {name}"),
            SvmErr::MalformedNumber { what, token, line } => {
                write!(f, "malformed {what} at line {line}: [{token}]")
            }
            SvmErr::MissingToken { what } => write!(f, "unexpected end of input, expected {what}"),
            SvmErr::TrailingTokens { line } => {
                write!(f, "unexpected data after the w record at line {line}")
            }
            SvmErr::InvalidParameter(e) => write!(f, "invalid parameter: {e}"),
            SvmErr::ThreadPool(e) => write!(f, "failed to build worker pool: {e}"),
            SvmErr::ProbabilityUnsupported => {
                f.write_str("probability estimates are not supported by this model")
            }
            SvmErr::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            SvmErr::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl Error for SvmErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SvmErr::Io(e) => Some(e),
            SvmErr::InvalidParameter(e) => Some(e),
            SvmErr::ThreadPool(e) => Some(e),
            SvmErr::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SvmErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<InvalidParameter> for SvmErr {
    fn from(value: InvalidParameter) -> Self {
        Self::InvalidParameter(value)
    }
}

impl From<rayon::ThreadPoolBuildError> for SvmErr {
    fn from(value: rayon::ThreadPoolBuildError) -> Self {
        Self::ThreadPool(value)
    }
}

impl From<serde_json::Error> for SvmErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Boundary conversion for binaries / I/O APIs.
impl From<SvmErr> for io::Error {
    fn from(value: SvmErr) -> Self {
        match value {
            SvmErr::Io(e) => e,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}
