use super::{HashMethod, InnerHash, HASH_LEN};
use sha2::{digest::FixedOutput, Digest, Sha256};

/// `SHA256(SHA256(a ++ b))`. Pass an empty `b` to hash a lone buffer.
pub fn digest(a: &[u8], b: &[u8]) -> InnerHash {
    let mut hasher = Sha256::new();
    hasher.update(a);
    hasher.update(b);
    let once = hasher.finalize_fixed();

    let mut hasher = Sha256::new();
    hasher.update(once);
    let mut out = [0u8; HASH_LEN];
    out.copy_from_slice(&hasher.finalize_fixed());
    out
}

/// Bitcoin's double SHA-256, used both for lone buffers and node pairs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sha256d;

impl HashMethod for Sha256d {
    fn hash_leaf(data: &[u8]) -> InnerHash {
        digest(data, &[])
    }

    fn hash_nodes(left: &[u8], right: &[u8]) -> InnerHash {
        digest(left, right)
    }
}
