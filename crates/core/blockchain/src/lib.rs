pub use call::eth_call;
pub use connection::{check_chain_id, connect_http};
pub use error::BlockchainError;
pub use signer::TxSigner;
pub use submitter::TxSubmitter;

mod call;
mod connection;
mod error;
mod signer;
mod submitter;
