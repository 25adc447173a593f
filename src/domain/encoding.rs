use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{
    error::{MerkleError, Result},
    hash::{InnerHash, HASH_LEN},
};

/// How a leaf's hex string maps onto the bytes fed to the hash function.
///
/// Bitcoin displays txids byte-reversed relative to the little-endian
/// bytes that are actually hashed; `Reversed` models that, `Natural`
/// hashes the displayed bytes as-is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    #[default]
    Natural,
    Reversed,
}

impl ByteOrder {
    /// Decode a 32-byte hex identifier, with or without a `0x` prefix.
    pub fn decode(self, value: &str) -> Result<InnerHash> {
        let bytes = hex::decode(strip_prefix(value))
            .map_err(|err| MerkleError::invalid_leaf(value, err))?;

        let mut hash: InnerHash = bytes
            .as_slice()
            .try_into()
            .map_err(|_| MerkleError::wrong_length(value, bytes.len()))?;

        if self == ByteOrder::Reversed {
            hash.reverse();
        }
        Ok(hash)
    }

    /// Encode internal bytes back into the display hex form, lowercase.
    pub fn encode(self, hash: &InnerHash, prefixed: bool) -> String {
        let mut display = *hash;
        if self == ByteOrder::Reversed {
            display.reverse();
        }

        let mut out = String::with_capacity(2 * HASH_LEN + 2);
        if prefixed {
            out.push_str("0x");
        }
        out.push_str(&hex::encode(display));
        out
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteOrder::Natural => f.write_str("natural"),
            ByteOrder::Reversed => f.write_str("reversed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown byte order `{0}`, expected `natural` or `reversed`")]
pub struct UnknownByteOrder(pub String);

impl FromStr for ByteOrder {
    type Err = UnknownByteOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "natural" | "big-endian" | "be" => Ok(ByteOrder::Natural),
            "reversed" | "little-endian" | "le" => Ok(ByteOrder::Reversed),
            _ => Err(UnknownByteOrder(s.to_owned())),
        }
    }
}

fn strip_prefix(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}
