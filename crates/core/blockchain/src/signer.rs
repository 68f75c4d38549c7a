use std::fmt;
use std::str::FromStr;

use alloy::network::EthereumWallet;
use alloy::signers::local::PrivateKeySigner;
use alloy_primitives::{Address, B256};

use crate::BlockchainError;

/// The single signing identity of a script run.
#[derive(Clone)]
pub struct TxSigner {
    address: Address,
    wallet: PrivateKeySigner,
}

impl fmt::Debug for TxSigner {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("TxSigner").field("address", &self.address.to_string()).finish()
    }
}

impl TxSigner {
    pub fn new(wallet: PrivateKeySigner) -> TxSigner {
        TxSigner { address: wallet.address(), wallet }
    }

    /// Accepts a 32 byte hex key with or without the `0x` prefix.
    pub fn from_hex(private_key: &str) -> Result<TxSigner, BlockchainError> {
        let key = B256::from_str(private_key.trim()).map_err(|_| BlockchainError::InvalidPrivateKey)?;
        let wallet = PrivateKeySigner::from_bytes(&key).map_err(|_| BlockchainError::InvalidPrivateKey)?;
        Ok(TxSigner::new(wallet))
    }

    #[inline]
    pub fn address(&self) -> Address {
        self.address
    }

    pub fn wallet(&self) -> EthereumWallet {
        EthereumWallet::from(self.wallet.clone())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn test_from_hex() {
        let signer = TxSigner::from_hex(KEY).unwrap();
        assert_eq!(signer.address(), alloy_primitives::address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"));

        let unprefixed = TxSigner::from_hex(KEY.trim_start_matches("0x")).unwrap();
        assert_eq!(unprefixed.address(), signer.address());
    }

    #[test]
    fn test_invalid_keys() {
        assert_eq!(TxSigner::from_hex("0x1234").err(), Some(BlockchainError::InvalidPrivateKey));
        assert_eq!(TxSigner::from_hex("not a key").err(), Some(BlockchainError::InvalidPrivateKey));
        let zero = format!("0x{}", "0".repeat(64));
        assert_eq!(TxSigner::from_hex(&zero).err(), Some(BlockchainError::InvalidPrivateKey));
    }

    #[test]
    fn test_debug_hides_key() {
        let signer = TxSigner::from_hex(KEY).unwrap();
        let debug = format!("{signer:?}");
        assert!(debug.contains("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"));
        assert!(!debug.contains("ac0974bec"));
    }
}
