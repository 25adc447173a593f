pub mod sha256;

pub use sha256::{digest, Sha256d};

/// Width in bytes of every leaf and node in the tree.
pub const HASH_LEN: usize = 32;

pub type InnerHash = [u8; HASH_LEN];

pub trait HashMethod {
    /// Hash a single buffer.
    fn hash_leaf(data: &[u8]) -> InnerHash;

    /// Hash two child nodes together, `left` first.
    fn hash_nodes(left: &[u8], right: &[u8]) -> InnerHash;
}
