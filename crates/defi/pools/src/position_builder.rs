use alloy::primitives::{Address, Bytes, U256};
use alloy::rpc::types::Log;
use chrono::{DateTime, Duration, Utc};
use eyre::{eyre, Result};
use tracing::debug;
use uniswap_sdk_core::prelude::{Percent, Token as UniswapToken, TokenMeta};
use uniswap_v3_sdk::prelude::{
    add_call_parameters, nearest_usable_tick, AddLiquidityOptions, AddLiquiditySpecificOptions, FeeAmount as UniswapFeeAmount,
    MintSpecificOptions, Pool, Position as UniswapPosition,
};

use javelin_defi_abi::uniswap_periphery::INonfungiblePositionManager::IncreaseLiquidity;
use javelin_types_entities::{FeeAmount, PoolSnapshot, Position, Token, TxIntent};

pub const DEFAULT_SLIPPAGE_BPS: u32 = 50;
pub const DEFAULT_DEADLINE_MINUTES: i64 = 20;
/// Range half-width in tick spacings.
pub const RANGE_SPACINGS: i32 = 2;

const BPS_DENOMINATOR: u32 = 10_000;

/// Calldata for `NonfungiblePositionManager.mint` plus what went into it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MintCall {
    pub calldata: Bytes,
    pub value: U256,
    pub amount0_min: U256,
    pub amount1_min: U256,
    pub deadline: u64,
}

impl MintCall {
    pub fn into_intent(self, position_manager: Address, gas_limit: u64) -> TxIntent {
        TxIntent::new("mint", position_manager, self.calldata).with_value(self.value).with_gas_limit(gas_limit)
    }

    /// `IncreaseLiquidity` emitted by the position manager in the mint receipt.
    pub fn minted(position_manager: Address, logs: &[Log]) -> Option<IncreaseLiquidity> {
        logs.iter()
            .filter(|log| log.address() == position_manager)
            .find_map(|log| log.log_decode::<IncreaseLiquidity>().ok())
            .map(|log| log.inner.data)
    }
}

/// Position sized against one snapshot. `position` is what the mint will deposit.
pub struct PositionPlan {
    pub position: Position,
    inner: UniswapPosition,
}

fn uniswap_fee(fee: FeeAmount) -> UniswapFeeAmount {
    match fee {
        FeeAmount::Lowest => UniswapFeeAmount::LOWEST,
        FeeAmount::Low => UniswapFeeAmount::LOW,
        FeeAmount::Medium => UniswapFeeAmount::MEDIUM,
        FeeAmount::High => UniswapFeeAmount::HIGH,
    }
}

fn uniswap_token(token: &Token) -> UniswapToken {
    UniswapToken {
        chain_id: token.get_chain_id(),
        decimals: token.get_decimals(),
        symbol: None,
        name: None,
        meta: TokenMeta { address: token.get_address(), buy_fee_bps: None, sell_fee_bps: None },
    }
}

/// Builds a symmetric position around the current tick from a pool snapshot.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    slippage_bps: u32,
    deadline_window: Duration,
    use_full_precision: bool,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self { slippage_bps: DEFAULT_SLIPPAGE_BPS, deadline_window: Duration::minutes(DEFAULT_DEADLINE_MINUTES), use_full_precision: false }
    }
}

impl PositionBuilder {
    pub fn new(slippage_bps: u32, deadline_window: Duration, use_full_precision: bool) -> Result<Self> {
        if slippage_bps >= BPS_DENOMINATOR {
            return Err(eyre!("SLIPPAGE_TOO_HIGH"));
        }
        Ok(Self { slippage_bps, deadline_window, use_full_precision })
    }

    pub fn with_full_precision(self, use_full_precision: bool) -> Self {
        Self { use_full_precision, ..self }
    }

    pub fn slippage_tolerance(&self) -> Percent {
        Percent::new(self.slippage_bps, BPS_DENOMINATOR)
    }

    /// `RANGE_SPACINGS` spacings either side of the usable tick nearest to `tick`.
    pub fn tick_range(tick: i32, tick_spacing: i32) -> (i32, i32) {
        let center = nearest_usable_tick(tick, tick_spacing);
        (center - RANGE_SPACINGS * tick_spacing, center + RANGE_SPACINGS * tick_spacing)
    }

    /// Largest position in the range that needs at most `amount0` of token0 and `amount1` of token1.
    pub fn build(&self, snapshot: &PoolSnapshot, token0: &Token, token1: &Token, amount0: U256, amount1: U256) -> Result<PositionPlan> {
        snapshot.validate()?;
        if !token0.sorts_before(token1)? {
            return Err(eyre!("TOKENS_NOT_SORTED"));
        }

        let pool = Pool::new(
            uniswap_token(token0),
            uniswap_token(token1),
            uniswap_fee(snapshot.fee),
            snapshot.sqrt_price_x96.to(),
            snapshot.liquidity,
        )?;
        let tick = pool.tick_current;
        let (tick_lower, tick_upper) = Self::tick_range(tick, snapshot.tick_spacing());

        let mut inner = UniswapPosition::from_amounts(pool, tick_lower, tick_upper, amount0, amount1, self.use_full_precision)?;
        let mint_amounts = inner.mint_amounts()?;
        debug!(
            tick,
            tick_lower,
            tick_upper,
            liquidity = inner.liquidity,
            amount0 = %mint_amounts.amount0,
            amount1 = %mint_amounts.amount1,
            "position built"
        );

        let position = Position {
            pool: snapshot.address,
            token0: token0.get_address(),
            token1: token1.get_address(),
            fee: snapshot.fee,
            tick_lower,
            tick_upper,
            liquidity: inner.liquidity,
            amount0: mint_amounts.amount0,
            amount1: mint_amounts.amount1,
        };
        Ok(PositionPlan { position, inner })
    }

    /// Mint calldata with slippage-protected minimums and a deadline of `now` plus the window.
    pub fn mint_call(&self, plan: &mut PositionPlan, recipient: Address, now: DateTime<Utc>) -> Result<MintCall> {
        let slippage_tolerance = self.slippage_tolerance();
        let minimums = plan.inner.mint_amounts_with_slippage(&slippage_tolerance)?;
        let deadline = u64::try_from((now + self.deadline_window).timestamp())?;

        let options = AddLiquidityOptions {
            slippage_tolerance,
            deadline: U256::from(deadline),
            use_native: None,
            token0_permit: None,
            token1_permit: None,
            specific_opts: AddLiquiditySpecificOptions::Mint(MintSpecificOptions { recipient, create_pool: false }),
        };
        let parameters = add_call_parameters(&mut plan.inner, options)?;

        Ok(MintCall {
            calldata: parameters.calldata,
            value: parameters.value,
            amount0_min: minimums.amount0,
            amount1_min: minimums.amount1,
            deadline,
        })
    }
}
