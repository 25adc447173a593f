#[cfg(feature = "napi")]
pub mod napi;
