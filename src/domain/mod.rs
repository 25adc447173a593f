pub mod encoding;
pub mod engine;
pub mod error;
pub mod hash;
pub mod options;
pub mod proof;
pub mod tree;
