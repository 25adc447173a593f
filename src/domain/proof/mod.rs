use serde::{Deserialize, Serialize};

use super::{
    error::MerkleError,
    hash::{HashMethod, InnerHash},
};

/// Inclusion proof for one leaf: the leaf as supplied, its position in the
/// leaf list and the sibling at every level, bottom to top.
///
/// Serialises as `{ "leafId", "leafIndex", "siblings" }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "ProofRecord", try_from = "ProofRecord")]
pub struct MerkleProof {
    pub leaf_id: String,
    pub leaf_index: usize,
    pub siblings: Vec<String>,
}

/// Wire form of a [`MerkleProof`]. The index is signed so that records
/// produced elsewhere with a negative index can still be read and rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofRecord {
    pub leaf_id: String,
    pub leaf_index: i64,
    pub siblings: Vec<String>,
}

impl MerkleProof {
    pub fn new(leaf_id: impl Into<String>, leaf_index: usize, siblings: Vec<String>) -> Self {
        Self {
            leaf_id: leaf_id.into(),
            leaf_index,
            siblings,
        }
    }

    /// Number of levels the proof climbs.
    pub fn depth(&self) -> usize {
        self.siblings.len()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl From<MerkleProof> for ProofRecord {
    fn from(proof: MerkleProof) -> Self {
        Self {
            leaf_id: proof.leaf_id,
            leaf_index: i64::try_from(proof.leaf_index).unwrap_or(i64::MAX),
            siblings: proof.siblings,
        }
    }
}

impl TryFrom<ProofRecord> for MerkleProof {
    type Error = MerkleError;

    fn try_from(record: ProofRecord) -> Result<Self, Self::Error> {
        let leaf_index =
            usize::try_from(record.leaf_index).map_err(|_| MerkleError::IndexOutOfRange {
                index: i128::from(record.leaf_index),
                leaf_count: None,
            })?;
        Ok(Self {
            leaf_id: record.leaf_id,
            leaf_index,
            siblings: record.siblings,
        })
    }
}

/// Recompute the root from a leaf, its index and its siblings.
///
/// An odd index means the target is the right operand at that level.
pub fn replay<Method, I>(leaf: InnerHash, leaf_index: usize, siblings: I) -> InnerHash
where
    Method: HashMethod,
    I: IntoIterator<Item = InnerHash>,
{
    let mut current = leaf;
    let mut index = leaf_index;

    for sibling in siblings {
        current = if index % 2 == 1 {
            Method::hash_nodes(&sibling, &current)
        } else {
            Method::hash_nodes(&current, &sibling)
        };
        index /= 2;
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::hash::{digest, Sha256d};

    #[test]
    fn test_no_steps_proof() {
        // With no siblings the leaf is the root
        let leaf = [0x42; 32];
        assert_eq!(replay::<Sha256d, _>(leaf, 0, Vec::<InnerHash>::new()), leaf);
    }

    #[test]
    fn test_single_step_orientation() {
        let leaf = [1; 32];
        let sibling = [2; 32];

        assert_eq!(
            replay::<Sha256d, _>(leaf, 0, [sibling]),
            digest(&leaf, &sibling),
            "Even index puts the target on the left"
        );
        assert_eq!(
            replay::<Sha256d, _>(leaf, 1, [sibling]),
            digest(&sibling, &leaf),
            "Odd index puts the target on the right"
        );
    }

    #[test]
    fn test_multi_step_proof() {
        //         R
        //       /   \
        //     N1     N2
        //    /  \   /  \
        //   A    B C    D
        let (a, b, c, d) = ([0xa; 32], [0xb; 32], [0xc; 32], [0xd; 32]);
        let n1 = digest(&a, &b);
        let n2 = digest(&c, &d);
        let r = digest(&n1, &n2);

        assert_eq!(replay::<Sha256d, _>(b, 1, [a, n2]), r);
        assert_eq!(replay::<Sha256d, _>(c, 2, [d, n1]), r);

        // Claiming the wrong position must not reproduce the root
        assert_ne!(replay::<Sha256d, _>(b, 0, [a, n2]), r);
    }

    #[test]
    fn test_json_shape() {
        let proof = MerkleProof::new("0xab", 3, vec!["cd".into(), "ef".into()]);
        let json = proof.to_json().unwrap();
        assert_eq!(
            json,
            r#"{"leafId":"0xab","leafIndex":3,"siblings":["cd","ef"]}"#
        );
        assert_eq!(MerkleProof::from_json(&json).unwrap(), proof);
    }

    #[test]
    fn test_negative_index_rejected() {
        let record = ProofRecord {
            leaf_id: "ab".into(),
            leaf_index: -1,
            siblings: vec![],
        };
        assert_eq!(
            MerkleProof::try_from(record),
            Err(MerkleError::IndexOutOfRange {
                index: -1,
                leaf_count: None,
            })
        );

        let err = MerkleProof::from_json(r#"{"leafId":"ab","leafIndex":-4,"siblings":[]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("out of range"), "got: {err}");
    }
}
