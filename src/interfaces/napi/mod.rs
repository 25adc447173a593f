pub mod engine;
pub mod options;
pub mod proof;

use crate::domain::error::MerkleError;

pub(crate) fn to_napi_error(err: MerkleError) -> napi::Error {
    napi::Error::from_reason(err.to_string())
}
