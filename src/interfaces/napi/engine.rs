use super::{options::MerkleEngineOptionsJs, proof::MerkleProofJs, to_napi_error};
use crate::domain::{
  engine::MerkleEngine,
  options::EngineOptions,
  proof::{MerkleProof, ProofRecord},
};

#[napi(js_name = "MerkleEngine")]
pub struct MerkleEngineJs {
  inner: MerkleEngine,
}

#[napi]
impl MerkleEngineJs {
  #[napi(constructor)]
  pub fn new(options: Option<MerkleEngineOptionsJs>) -> napi::Result<Self> {
    let options = match options {
      Some(options) => EngineOptions::try_from(options)?,
      None => EngineOptions::default(),
    };
    Ok(Self {
      inner: MerkleEngine::new(options),
    })
  }

  #[napi]
  pub fn byte_order(&self) -> String {
    self.inner.byte_order().to_string()
  }

  #[napi]
  pub fn compute_root(&self, leaves: Vec<String>) -> napi::Result<String> {
    self.inner.compute_root(&leaves).map_err(to_napi_error)
  }

  #[napi]
  pub fn build_proof(&self, leaves: Vec<String>, leaf_index: u32) -> napi::Result<MerkleProofJs> {
    self
      .inner
      .build_proof(&leaves, leaf_index as usize)
      .map(|proof| ProofRecord::from(proof).into())
      .map_err(to_napi_error)
  }

  /// Return the root reconstructed from the proof.
  #[napi]
  pub fn verify_proof(&self, proof: MerkleProofJs) -> napi::Result<String> {
    self
      .inner
      .verify_record(&proof.into())
      .map_err(to_napi_error)
  }

  /// Return true when the proof reproduces `root`.
  #[napi]
  pub fn verify(&self, proof: MerkleProofJs, root: String) -> napi::Result<bool> {
    let proof = MerkleProof::try_from(ProofRecord::from(proof)).map_err(to_napi_error)?;
    self.inner.verify(&proof, &root).map_err(to_napi_error)
  }
}
