//! Text-format reader
//!
//! See the [module documentation](crate::input) for the file format.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use crate::system::{LinearSystem, SystemError};

// =================================================================================================
// Errors
// =================================================================================================

/// Errors while reading a system file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read at all.
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file ended before the expected token.
    #[error("input ended early: expected {expected}")]
    UnexpectedEnd { expected: String },

    /// A token is not parseable as the expected kind of value.
    #[error("cannot parse {token:?} as {expected}")]
    InvalidToken { expected: String, token: String },

    /// Tokens remain after the last expected one.
    #[error("unexpected trailing data starting at {first:?}")]
    TrailingData { first: String },

    /// The token stream parsed, but the resulting system is structurally
    /// invalid (zero diagonal, bad tolerance, ...).
    #[error(transparent)]
    Invalid(#[from] SystemError),
}

// =================================================================================================
// Loading
// =================================================================================================

/// Read and parse a system file.
///
/// # Example
///
/// ```rust,ignore
/// use jacobi_rs::input::load_system;
///
/// let system = load_system("systems/10.txt".as_ref())?;
/// println!("{} unknowns, tolerance {}", system.unknowns(), system.tolerance());
/// ```
pub fn load_system(path: &Path) -> Result<LinearSystem, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_system(&contents)
}

/// Parse a system from already-loaded text.
///
/// Split out from [`load_system`] so the format can be tested without
/// touching the filesystem.
pub fn parse_system(contents: &str) -> Result<LinearSystem, LoadError> {
    let mut tokens = contents.split_whitespace();

    let n: usize = take(&mut tokens, "unknown count")?;
    let tolerance: f64 = take(&mut tokens, "tolerance")?;

    let mut initial_guess = Vec::with_capacity(n);
    for i in 0..n {
        initial_guess.push(take(&mut tokens, &format!("initial guess x[{}]", i))?);
    }

    let mut rows = Vec::with_capacity(n);
    let mut constants = Vec::with_capacity(n);
    for i in 0..n {
        let mut row = Vec::with_capacity(n);
        for j in 0..n {
            row.push(take(&mut tokens, &format!("coefficient ({},{})", i, j))?);
        }
        rows.push(row);
        constants.push(take(&mut tokens, &format!("constant b[{}]", i))?);
    }

    if let Some(extra) = tokens.next() {
        return Err(LoadError::TrailingData {
            first: extra.to_string(),
        });
    }

    Ok(LinearSystem::from_rows(rows, constants, initial_guess, tolerance)?)
}

/// Pull one token and parse it, naming the expected value on failure.
fn take<'a, T: FromStr>(
    tokens: &mut impl Iterator<Item = &'a str>,
    expected: &str,
) -> Result<T, LoadError> {
    let token = tokens.next().ok_or_else(|| LoadError::UnexpectedEnd {
        expected: expected.to_string(),
    })?;

    token.parse().map_err(|_| LoadError::InvalidToken {
        expected: expected.to_string(),
        token: token.to_string(),
    })
}

// =================================================================================================
// Tests
// =================================================================================================
