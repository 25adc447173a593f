use serde::{Deserialize, Serialize};

use super::encoding::ByteOrder;

/// Settings fixed for the lifetime of a [`MerkleEngine`](super::engine::MerkleEngine).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineOptions {
    pub byte_order: ByteOrder,
    /// Emit roots and siblings with a `0x` prefix.
    pub prefix_output: bool,
}

impl EngineOptions {
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    pub fn with_prefix_output(mut self, prefix_output: bool) -> Self {
        self.prefix_output = prefix_output;
        self
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
