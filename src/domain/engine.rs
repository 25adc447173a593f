use itertools::Itertools;
use log::{debug, info};
use rayon::prelude::*;
use std::{marker::PhantomData, time::Instant};

use super::{
    encoding::ByteOrder,
    error::{MerkleError, Result},
    hash::{HashMethod, InnerHash, Sha256d},
    options::EngineOptions,
    proof::{replay, MerkleProof, ProofRecord},
    tree::{authentication_path, fold_to_root},
};

/// Builds roots and inclusion proofs over ordered hex leaf identifiers.
///
/// The byte order is fixed when the engine is constructed, so a proof can
/// only be verified under the same convention it was built with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MerkleEngine<Method: HashMethod = Sha256d> {
    options: EngineOptions,
    method: PhantomData<fn() -> Method>,
}

pub type MerkleEngineSha256d = MerkleEngine<Sha256d>;

impl MerkleEngine<Sha256d> {
    pub fn natural() -> Self {
        Self::new(EngineOptions::default().with_byte_order(ByteOrder::Natural))
    }

    pub fn reversed() -> Self {
        Self::new(EngineOptions::default().with_byte_order(ByteOrder::Reversed))
    }
}

impl<Method: HashMethod> MerkleEngine<Method> {
    pub fn new(options: EngineOptions) -> Self {
        Self {
            options,
            method: PhantomData,
        }
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.options.byte_order
    }

    pub fn decode_leaf(&self, leaf: &str) -> Result<InnerHash> {
        self.options.byte_order.decode(leaf)
    }

    pub fn encode_digest(&self, hash: &InnerHash) -> String {
        self.options
            .byte_order
            .encode(hash, self.options.prefix_output)
    }

    /// Decode every leaf. On failure the earliest offending leaf is reported.
    pub fn decode_leaves<S>(&self, leaves: &[S]) -> Result<Vec<InnerHash>>
    where
        S: AsRef<str> + Sync,
    {
        let decoded: Vec<Result<InnerHash>> = leaves
            .par_iter()
            .map(|leaf| self.decode_leaf(leaf.as_ref()))
            .collect();
        decoded.into_iter().collect()
    }

    /// Merkle root of `leaves`, encoded with the engine's byte order.
    pub fn compute_root<S>(&self, leaves: &[S]) -> Result<String>
    where
        S: AsRef<str> + Sync,
    {
        let total_start = Instant::now();

        let decode_start = Instant::now();
        let level = self.decode_leaves(leaves)?;
        debug!(
            "Decoding {} leaves took {:?}",
            level.len(),
            decode_start.elapsed()
        );

        let root = fold_to_root::<Method>(level)?;

        info!(
            "Total duration of compute_root over {} leaves: {:?}",
            leaves.len(),
            total_start.elapsed()
        );
        Ok(self.encode_digest(&root))
    }

    /// Inclusion proof for the leaf at `leaf_index`.
    pub fn build_proof<S>(&self, leaves: &[S], leaf_index: usize) -> Result<MerkleProof>
    where
        S: AsRef<str> + Sync,
    {
        let level = self.decode_leaves(leaves)?;
        let leaf = level.get(leaf_index).copied();

        let (root, path) = authentication_path::<Method>(level, leaf_index)?;

        if let Some(leaf) = leaf {
            debug_assert_eq!(
                replay::<Method, _>(leaf, leaf_index, path.iter().copied()),
                root,
                "Proof does not match the Merkle root"
            );
        }

        let siblings = path.iter().map(|hash| self.encode_digest(hash)).collect();
        Ok(MerkleProof::new(
            leaves[leaf_index].as_ref(),
            leaf_index,
            siblings,
        ))
    }

    /// Root reconstructed from `proof` alone. Comparing it against a trusted
    /// root is up to the caller; see [`MerkleEngine::verify`].
    pub fn verify_proof(&self, proof: &MerkleProof) -> Result<String> {
        let root = self.replay_proof(proof)?;
        Ok(self.encode_digest(&root))
    }

    /// Like [`MerkleEngine::verify_proof`] for a record read from the wire.
    pub fn verify_record(&self, record: &ProofRecord) -> Result<String> {
        let proof = MerkleProof::try_from(record.clone())?;
        self.verify_proof(&proof)
    }

    /// Whether `proof` reproduces `expected_root`. The comparison is on the
    /// decoded digests, so prefix and letter case do not matter.
    pub fn verify(&self, proof: &MerkleProof, expected_root: &str) -> Result<bool> {
        let expected = self.decode_leaf(expected_root)?;
        Ok(self.replay_proof(proof)? == expected)
    }

    /// Position of the first leaf equal to `leaf`, compared as digests.
    pub fn index_of<S>(&self, leaves: &[S], leaf: &str) -> Result<Option<usize>>
    where
        S: AsRef<str> + Sync,
    {
        let target = self.decode_leaf(leaf)?;
        let level = self.decode_leaves(leaves)?;
        Ok(level
            .iter()
            .find_position(|hash| **hash == target)
            .map(|(index, _)| index))
    }

    /// Inclusion proof for the first occurrence of `leaf` in `leaves`.
    pub fn prove_leaf<S>(&self, leaves: &[S], leaf: &str) -> Result<MerkleProof>
    where
        S: AsRef<str> + Sync,
    {
        let index = self
            .index_of(leaves, leaf)?
            .ok_or_else(|| MerkleError::LeafNotFound {
                leaf: leaf.to_owned(),
            })?;
        self.build_proof(leaves, index)
    }

    fn replay_proof(&self, proof: &MerkleProof) -> Result<InnerHash> {
        let leaf = self.decode_leaf(&proof.leaf_id)?;
        let siblings: Vec<InnerHash> = proof
            .siblings
            .iter()
            .map(|sibling| self.decode_leaf(sibling))
            .collect::<Result<_>>()?;

        Ok(replay::<Method, _>(leaf, proof.leaf_index, siblings))
    }
}
