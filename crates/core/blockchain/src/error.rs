use alloy_primitives::TxHash;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BlockchainError {
    #[error("chain id mismatch: configured {expected}, node reports {reported}")]
    ChainIdMismatch { expected: u64, reported: u64 },
    #[error("transaction {0} reverted")]
    Reverted(TxHash),
    #[error("invalid private key")]
    InvalidPrivateKey,
}
