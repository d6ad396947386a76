//! Error type shared by all fallible operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CombError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("not a rooted tree: {0}")]
    InvalidTree(String),
}

pub type Result<T> = std::result::Result<T, CombError>;

/// Fails with [`CombError::InvalidArgument`] unless `k <= n`.
pub(crate) fn check_at_most(k: usize, n: usize) -> Result<()> {
    if k > n {
        return Err(CombError::InvalidArgument(format!("k = {} exceeds n = {}", k, n)));
    }
    Ok(())
}

/// Fails with [`CombError::InvalidArgument`] unless there is at least one part.
pub(crate) fn check_parts(k: usize) -> Result<()> {
    if k == 0 {
        return Err(CombError::InvalidArgument("number of parts must be positive".to_string()));
    }
    Ok(())
}
