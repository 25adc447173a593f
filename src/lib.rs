#![deny(clippy::all)]

//! Merkle roots and inclusion proofs over ordered transaction ids, folded
//! the way Bitcoin builds a block's transaction tree.
//!
//! ```
//! use txid_merkle::MerkleEngine;
//!
//! let leaves = [
//!     "0x6c01cec5275b19bfa26413513111066732b6f4163581c203cdf6cbdd2385219b",
//!     "0xc308000b4e912907f53abea9d0517d30b634a827153b0f91e77ca34a480f440e",
//!     "0x12ebcdd62faeb8be30f27a8ac457a23ba37f641f4fd25a1e6e2460f90e29e268",
//! ];
//! let engine = MerkleEngine::natural();
//! let root = engine.compute_root(&leaves)?;
//! let proof = engine.build_proof(&leaves, 2)?;
//! assert_eq!(engine.verify_proof(&proof)?, root);
//! # Ok::<(), txid_merkle::MerkleError>(())
//! ```

#[cfg(feature = "napi")]
#[macro_use]
extern crate napi_derive;

pub mod application;
pub mod domain;
mod interfaces;

pub use domain::{
    encoding::ByteOrder,
    engine::MerkleEngine,
    error::{LeafFormatError, MerkleError},
    hash::{digest, HashMethod, InnerHash, Sha256d, HASH_LEN},
    options::EngineOptions,
    proof::{MerkleProof, ProofRecord},
};

#[cfg(feature = "napi")]
#[napi]
pub fn init() {
    std::panic::set_hook(Box::new(|_| {}));
    let _ = env_logger::try_init();
}
