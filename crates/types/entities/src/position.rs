use alloy_primitives::{Address, U256};

use crate::FeeAmount;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Position {
    pub pool: Address,
    pub token0: Address,
    pub token1: Address,
    pub fee: FeeAmount,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub liquidity: u128,
    /// token0 needed to mint `liquidity` at the snapshot price, rounded up
    pub amount0: U256,
    /// token1 needed to mint `liquidity` at the snapshot price, rounded up
    pub amount1: U256,
}
