use thiserror::Error;

use super::hash::HASH_LEN;

pub type Result<T, E = MerkleError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MerkleError {
    #[error("invalid leaf `{value}`: {source}")]
    InvalidLeafFormat {
        value: String,
        #[source]
        source: LeafFormatError,
    },
    #[error("cannot build a Merkle tree from zero leaves")]
    EmptyTree,
    /// `leaf_count` is `None` when the bound is unknown, as during verification.
    #[error("leaf index {index} out of range{}", count_hint(.leaf_count))]
    IndexOutOfRange {
        index: i128,
        leaf_count: Option<usize>,
    },
    #[error("leaf `{leaf}` not found")]
    LeafNotFound { leaf: String },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LeafFormatError {
    #[error("not valid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("expected {expected} bytes, got {actual}")]
    Length { expected: usize, actual: usize },
}

fn count_hint(leaf_count: &Option<usize>) -> String {
    leaf_count
        .map(|n| format!(" (leaf count {n})"))
        .unwrap_or_default()
}

impl MerkleError {
    pub(crate) fn invalid_leaf(value: &str, source: impl Into<LeafFormatError>) -> Self {
        Self::InvalidLeafFormat {
            value: value.to_owned(),
            source: source.into(),
        }
    }

    pub(crate) fn wrong_length(value: &str, actual: usize) -> Self {
        Self::invalid_leaf(
            value,
            LeafFormatError::Length {
                expected: HASH_LEN,
                actual,
            },
        )
    }
}
