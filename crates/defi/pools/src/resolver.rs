use alloy::network::Ethereum;
use alloy::primitives::{Address, U160};
use alloy::providers::Provider;
use alloy::transports::Transport;
use async_trait::async_trait;
use eyre::{eyre, Result};
use tracing::info;

use javelin_core_blockchain::TxSubmitter;
use javelin_defi_abi::uniswap3::IUniswapV3Factory;
use javelin_defi_abi::AbiEncoderHelper;
use javelin_types_entities::{FeeAmount, TxIntent};
use uniswap_v3_sdk::prelude::encode_sqrt_ratio_x96;

/// Factory operations the resolver needs. `get_pool` returns the zero address for a missing pool.
#[async_trait]
pub trait PoolFactory: Send + Sync {
    async fn get_pool(&self, token_a: Address, token_b: Address, fee: FeeAmount) -> Result<Address>;

    /// Creates the pool and waits for inclusion. The new address is not returned; query `get_pool` again.
    async fn create_pool(&self, token_a: Address, token_b: Address, fee: FeeAmount) -> Result<()>;

    async fn initialize_pool(&self, pool: Address, sqrt_price_x96: U160) -> Result<()>;
}

pub struct UniswapV3FactoryClient<P, T> {
    factory: Address,
    submitter: TxSubmitter<P, T>,
    create_pool_gas: u64,
    initialize_pool_gas: u64,
}

impl<P, T> UniswapV3FactoryClient<P, T>
where
    T: Transport + Clone,
    P: Provider<T, Ethereum> + Clone + 'static,
{
    pub fn new(factory: Address, submitter: TxSubmitter<P, T>, create_pool_gas: u64, initialize_pool_gas: u64) -> Self {
        Self { factory, submitter, create_pool_gas, initialize_pool_gas }
    }
}

#[async_trait]
impl<P, T> PoolFactory for UniswapV3FactoryClient<P, T>
where
    T: Transport + Clone,
    P: Provider<T, Ethereum> + Clone + Send + Sync + 'static,
{
    async fn get_pool(&self, token_a: Address, token_b: Address, fee: FeeAmount) -> Result<Address> {
        let factory = IUniswapV3Factory::new(self.factory, self.submitter.client().clone());
        Ok(factory.getPool(token_a, token_b, fee.as_u24()).call().await?.pool)
    }

    async fn create_pool(&self, token_a: Address, token_b: Address, fee: FeeAmount) -> Result<()> {
        let calldata = AbiEncoderHelper::encode_uniswap3_create_pool(token_a, token_b, fee.as_u24());
        let intent = TxIntent::new("create_pool", self.factory, calldata).with_gas_limit(self.create_pool_gas);
        self.submitter.submit(intent).await?;
        Ok(())
    }

    async fn initialize_pool(&self, pool: Address, sqrt_price_x96: U160) -> Result<()> {
        let calldata = AbiEncoderHelper::encode_uniswap3_initialize(sqrt_price_x96);
        let intent = TxIntent::new("initialize_pool", pool, calldata).with_gas_limit(self.initialize_pool_gas);
        self.submitter.submit(intent).await?;
        Ok(())
    }
}

/// Q64.96 square root of `amount1 / amount0`, the price a new pool is initialized at.
pub fn initial_sqrt_price_x96(amount1: u64, amount0: u64) -> Result<U160> {
    if amount0 == 0 || amount1 == 0 {
        return Err(eyre!("INVALID_PRICE"));
    }
    Ok(U160::from(encode_sqrt_ratio_x96::<160, 3>(amount1, amount0)))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolResolution {
    Existing(Address),
    Created(Address),
}

impl PoolResolution {
    pub fn address(&self) -> Address {
        match self {
            PoolResolution::Existing(address) | PoolResolution::Created(address) => *address,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, PoolResolution::Created(_))
    }
}

pub struct PoolResolver<F> {
    factory: F,
}

impl<F: PoolFactory> PoolResolver<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Existing pool for the pair, `None` when the factory reports the zero address.
    pub async fn lookup(&self, token_a: Address, token_b: Address, fee: FeeAmount) -> Result<Option<Address>> {
        let pool = self.factory.get_pool(token_a, token_b, fee).await?;
        Ok((!pool.is_zero()).then_some(pool))
    }

    /// Existing pool, or a new one created and initialized at `initial_sqrt_price_x96`.
    /// A pool left created but uninitialized by an earlier failed run is returned as existing.
    pub async fn resolve(&self, token_a: Address, token_b: Address, fee: FeeAmount, initial_sqrt_price_x96: U160) -> Result<PoolResolution> {
        if let Some(pool) = self.lookup(token_a, token_b, fee).await? {
            info!(%pool, %fee, "pool exists");
            return Ok(PoolResolution::Existing(pool));
        }

        info!(%token_a, %token_b, %fee, "pool not found, creating");
        self.factory.create_pool(token_a, token_b, fee).await?;

        let pool = self.lookup(token_a, token_b, fee).await?.ok_or_else(|| eyre!("POOL_NOT_CREATED"))?;
        info!(%pool, "pool created");

        self.factory.initialize_pool(pool, initial_sqrt_price_x96).await?;
        info!(%pool, sqrt_price_x96 = %initial_sqrt_price_x96, "pool initialized");

        Ok(PoolResolution::Created(pool))
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;
    use alloy::primitives::address;

    const WETH: Address = address!("4200000000000000000000000000000000000006");
    const SYN: Address = address!("4A679253410272dd5232B3Ff7cF5dbB88f295319");

    type PoolKey = (Address, Address, FeeAmount);

    #[derive(Default)]
    struct MockFactoryState {
        pools: HashMap<PoolKey, Address>,
        prices: HashMap<Address, U160>,
        create_calls: usize,
        initialize_calls: usize,
    }

    /// In-memory factory that behaves like the on-chain one, including the zero-address sentinel.
    #[derive(Default)]
    struct MockFactory {
        state: Mutex<MockFactoryState>,
        fail_create: bool,
        forget_created: bool,
    }

    fn key(token_a: Address, token_b: Address, fee: FeeAmount) -> PoolKey {
        if token_a < token_b {
            (token_a, token_b, fee)
        } else {
            (token_b, token_a, fee)
        }
    }

    #[async_trait]
    impl PoolFactory for MockFactory {
        async fn get_pool(&self, token_a: Address, token_b: Address, fee: FeeAmount) -> Result<Address> {
            let state = self.state.lock().unwrap();
            Ok(state.pools.get(&key(token_a, token_b, fee)).copied().unwrap_or(Address::ZERO))
        }

        async fn create_pool(&self, token_a: Address, token_b: Address, fee: FeeAmount) -> Result<()> {
            if self.fail_create {
                return Err(eyre!("execution reverted"));
            }
            let mut state = self.state.lock().unwrap();
            state.create_calls += 1;
            if !self.forget_created {
                let address = Address::with_last_byte(state.pools.len() as u8 + 1);
                state.pools.insert(key(token_a, token_b, fee), address);
            }
            Ok(())
        }

        async fn initialize_pool(&self, pool: Address, sqrt_price_x96: U160) -> Result<()> {
            let mut state = self.state.lock().unwrap();
            state.initialize_calls += 1;
            if state.prices.insert(pool, sqrt_price_x96).is_some() {
                return Err(eyre!("AI"));
            }
            Ok(())
        }
    }

    fn ten_to_one() -> U160 {
        initial_sqrt_price_x96(10, 1).unwrap()
    }

    #[test]
    fn test_initial_sqrt_price() {
        assert_eq!(initial_sqrt_price_x96(1, 1).unwrap(), U160::from(1) << 96);
        assert_eq!(initial_sqrt_price_x96(10, 1).unwrap(), U160::from(250541448375047931186413801569u128));
        assert_eq!(initial_sqrt_price_x96(0, 1).unwrap_err().to_string(), "INVALID_PRICE");
        assert_eq!(initial_sqrt_price_x96(1, 0).unwrap_err().to_string(), "INVALID_PRICE");
    }

    #[tokio::test]
    async fn test_creates_missing_pool() -> Result<()> {
        let resolver = PoolResolver::new(MockFactory::default());

        let resolution = resolver.resolve(WETH, SYN, FeeAmount::Low, ten_to_one()).await?;
        assert!(resolution.is_created());
        assert!(!resolution.address().is_zero());

        // same address for either token order
        assert_eq!(resolver.lookup(WETH, SYN, FeeAmount::Low).await?, Some(resolution.address()));
        assert_eq!(resolver.lookup(SYN, WETH, FeeAmount::Low).await?, Some(resolution.address()));

        let state = resolver.factory().state.lock().unwrap();
        assert_eq!(state.create_calls, 1);
        assert_eq!(state.initialize_calls, 1);
        assert_eq!(state.prices[&resolution.address()], U160::from(250541448375047931186413801569u128));
        Ok(())
    }

    #[tokio::test]
    async fn test_existing_pool_is_not_recreated() -> Result<()> {
        let resolver = PoolResolver::new(MockFactory::default());
        let created = resolver.resolve(SYN, WETH, FeeAmount::Medium, ten_to_one()).await?;

        let resolved = resolver.resolve(WETH, SYN, FeeAmount::Medium, U160::from(1) << 96).await?;
        assert_eq!(resolved, PoolResolution::Existing(created.address()));

        let state = resolver.factory().state.lock().unwrap();
        assert_eq!(state.create_calls, 1);
        assert_eq!(state.initialize_calls, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_fee_tiers_are_distinct_pools() -> Result<()> {
        let resolver = PoolResolver::new(MockFactory::default());
        let low = resolver.resolve(WETH, SYN, FeeAmount::Low, ten_to_one()).await?;
        let high = resolver.resolve(WETH, SYN, FeeAmount::High, ten_to_one()).await?;
        assert_ne!(low.address(), high.address());
        assert_eq!(resolver.lookup(WETH, SYN, FeeAmount::Lowest).await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_create_failure_propagates() {
        let resolver = PoolResolver::new(MockFactory { fail_create: true, ..MockFactory::default() });
        let result = resolver.resolve(WETH, SYN, FeeAmount::Low, ten_to_one()).await;
        assert_eq!(result.err().unwrap().to_string(), "execution reverted");
        assert_eq!(resolver.factory().state.lock().unwrap().initialize_calls, 0);
    }

    #[tokio::test]
    async fn test_pool_missing_after_create() {
        let resolver = PoolResolver::new(MockFactory { forget_created: true, ..MockFactory::default() });
        let result = resolver.resolve(WETH, SYN, FeeAmount::Low, ten_to_one()).await;
        assert_eq!(result.err().unwrap().to_string(), "POOL_NOT_CREATED");
    }
}
