//! Block fixtures as written by the transaction scrapers: a JSON array of
//! `{ "blockhash", "transactions" }` records.

use anyhow::{anyhow, Context, Result};
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};
use std::{fs::File, io::Read, path::Path};

use crate::domain::{engine::MerkleEngine, hash::HashMethod, proof::MerkleProof};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockTransactions {
    pub blockhash: String,
    pub transactions: Vec<String>,
}

impl BlockTransactions {
    pub fn merkle_root<Method: HashMethod>(&self, engine: &MerkleEngine<Method>) -> Result<String> {
        engine
            .compute_root(&self.transactions)
            .with_context(|| format!("Computing Merkle root of block {}", self.blockhash))
    }
}

pub fn load_blocks<R: Read>(reader: R) -> Result<Vec<BlockTransactions>> {
    let blocks: Vec<BlockTransactions> =
        serde_json::from_reader(reader).context("Parsing block transactions")?;
    debug!("Loaded {} blocks", blocks.len());
    Ok(blocks)
}

pub fn load_blocks_from_path(path: impl AsRef<Path>) -> Result<Vec<BlockTransactions>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("Opening {}", path.display()))?;
    load_blocks(file).with_context(|| format!("Reading {}", path.display()))
}

/// Block hashes are compared case-insensitively and without a `0x` prefix.
pub fn find_block<'a>(
    blocks: &'a [BlockTransactions],
    blockhash: &str,
) -> Option<&'a BlockTransactions> {
    let wanted = normalize(blockhash);
    blocks.iter().find(|block| normalize(&block.blockhash) == wanted)
}

/// Inclusion proof for `txid` inside the block `blockhash`.
pub fn prove_transaction<Method: HashMethod>(
    engine: &MerkleEngine<Method>,
    blocks: &[BlockTransactions],
    blockhash: &str,
    txid: &str,
) -> Result<MerkleProof> {
    let block =
        find_block(blocks, blockhash).ok_or_else(|| anyhow!("Block {blockhash} not found"))?;

    let wanted = normalize(txid);
    let (index, _) = block
        .transactions
        .iter()
        .find_position(|tx| normalize(tx) == wanted)
        .ok_or_else(|| anyhow!("Transaction {txid} not found in block {blockhash}"))?;

    engine
        .build_proof(&block.transactions, index)
        .with_context(|| format!("Proving transaction {txid} in block {blockhash}"))
}

fn normalize(hash: &str) -> String {
    hash.to_ascii_lowercase().trim_start_matches("0x").to_owned()
}
