use alloy_primitives::{Address, U256};
use eyre::{eyre, Result};

use crate::FeeAmount;

/// Liquidity and slot0 of a pool as of one logical read. Advisory only: the chain may have moved on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PoolSnapshot {
    pub address: Address,
    pub fee: FeeAmount,
    pub liquidity: u128,
    pub sqrt_price_x96: U256,
    pub tick: i32,
    pub observation_index: u16,
    pub observation_cardinality: u16,
    pub observation_cardinality_next: u16,
    pub fee_protocol: u8,
    pub unlocked: bool,
}

impl PoolSnapshot {
    #[inline]
    pub fn tick_spacing(&self) -> i32 {
        self.fee.tick_spacing()
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        !self.sqrt_price_x96.is_zero()
    }

    pub fn validate(&self) -> Result<()> {
        if !self.is_initialized() {
            return Err(eyre!("POOL_NOT_INITIALIZED"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_validate() {
        let sqrt_price_x96 = U256::from(250541448375047931186413801569u128);
        let snapshot = PoolSnapshot { sqrt_price_x96, tick: 23027, unlocked: true, ..PoolSnapshot::default() };
        assert!(snapshot.validate().is_ok());
        assert_eq!(snapshot.tick_spacing(), 10);

        let uninitialized = PoolSnapshot::default();
        assert!(!uninitialized.is_initialized());
        assert_eq!(uninitialized.validate().err().unwrap().to_string(), "POOL_NOT_INITIALIZED");
    }
}
