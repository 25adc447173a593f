use std::str::FromStr;

use crate::domain::{encoding::ByteOrder, options::EngineOptions};

#[napi(object, js_name = "MerkleEngineOptions")]
#[derive(Clone, Default)]
pub struct MerkleEngineOptionsJs {
  /// `"natural"` (default) or `"reversed"`.
  pub byte_order: Option<String>,
  pub prefix_output: Option<bool>,
}

impl TryFrom<MerkleEngineOptionsJs> for EngineOptions {
  type Error = napi::Error;

  fn try_from(value: MerkleEngineOptionsJs) -> napi::Result<Self> {
    let mut options = EngineOptions::default();
    if let Some(byte_order) = value.byte_order {
      let byte_order = ByteOrder::from_str(&byte_order)
        .map_err(|err| napi::Error::from_reason(err.to_string()))?;
      options = options.with_byte_order(byte_order);
    }
    if let Some(prefix_output) = value.prefix_output {
      options = options.with_prefix_output(prefix_output);
    }
    Ok(options)
  }
}
