use crate::domain::proof::ProofRecord;

/// Plain JS object mirroring the serialized proof record.
#[napi(object, js_name = "MerkleProof")]
#[derive(Clone)]
pub struct MerkleProofJs {
  pub leaf_id: String,
  pub leaf_index: i64,
  pub siblings: Vec<String>,
}

impl From<ProofRecord> for MerkleProofJs {
  fn from(record: ProofRecord) -> Self {
    Self {
      leaf_id: record.leaf_id,
      leaf_index: record.leaf_index,
      siblings: record.siblings,
    }
  }
}

impl From<MerkleProofJs> for ProofRecord {
  fn from(proof: MerkleProofJs) -> Self {
    Self {
      leaf_id: proof.leaf_id,
      leaf_index: proof.leaf_index,
      siblings: proof.siblings,
    }
  }
}
