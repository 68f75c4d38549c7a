use std::marker::PhantomData;

use alloy::network::Ethereum;
use alloy::primitives::{Address, U256};
use alloy::providers::Provider;
use alloy::transports::Transport;
use async_trait::async_trait;
use eyre::Result;
use tracing::debug;

use javelin_defi_abi::uniswap3::IUniswapV3Pool;
use javelin_defi_abi::uniswap3::IUniswapV3Pool::slot0Return;
use javelin_types_entities::{FeeAmount, PoolSnapshot};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Slot0 {
    pub tick: i32,
    pub fee_protocol: u8,
    pub sqrt_price_x96: U256,
    pub unlocked: bool,
    pub observation_index: u16,
    pub observation_cardinality: u16,
    pub observation_cardinality_next: u16,
}

impl From<slot0Return> for Slot0 {
    fn from(value: slot0Return) -> Self {
        Self {
            tick: value.tick.try_into().unwrap_or_default(),
            fee_protocol: value.feeProtocol,
            observation_cardinality: value.observationCardinality,
            observation_cardinality_next: value.observationCardinalityNext,
            sqrt_price_x96: value.sqrtPriceX96.to(),
            unlocked: value.unlocked,
            observation_index: value.observationIndex,
        }
    }
}

/// The two independent pool reads a snapshot is assembled from.
#[async_trait]
pub trait PoolStateSource: Send + Sync {
    async fn liquidity(&self, pool: Address) -> Result<u128>;

    async fn slot0(&self, pool: Address) -> Result<Slot0>;
}

#[derive(Clone)]
pub struct RpcPoolStateSource<P, T> {
    client: P,
    _t: PhantomData<T>,
}

impl<P, T> RpcPoolStateSource<P, T>
where
    T: Transport + Clone,
    P: Provider<T, Ethereum> + Clone + Send + Sync + 'static,
{
    pub fn new(client: P) -> Self {
        Self { client, _t: PhantomData }
    }
}

#[async_trait]
impl<P, T> PoolStateSource for RpcPoolStateSource<P, T>
where
    T: Transport + Clone,
    P: Provider<T, Ethereum> + Clone + Send + Sync + 'static,
{
    async fn liquidity(&self, pool: Address) -> Result<u128> {
        let uni3_pool = IUniswapV3Pool::new(pool, self.client.clone());
        Ok(uni3_pool.liquidity().call().await?._0)
    }

    async fn slot0(&self, pool: Address) -> Result<Slot0> {
        let uni3_pool = IUniswapV3Pool::new(pool, self.client.clone());
        Ok(uni3_pool.slot0().call().await?.into())
    }
}

pub struct UniswapV3StateReader {}

impl UniswapV3StateReader {
    /// Issues both reads at once and joins them. The values may come from different blocks.
    pub async fn snapshot<S: PoolStateSource + ?Sized>(source: &S, pool: Address, fee: FeeAmount) -> Result<PoolSnapshot> {
        let (liquidity, slot0) = tokio::try_join!(source.liquidity(pool), source.slot0(pool))?;
        debug!(%pool, liquidity, tick = slot0.tick, sqrt_price_x96 = %slot0.sqrt_price_x96, "pool state read");

        Ok(PoolSnapshot {
            address: pool,
            fee,
            liquidity,
            sqrt_price_x96: slot0.sqrt_price_x96,
            tick: slot0.tick,
            observation_index: slot0.observation_index,
            observation_cardinality: slot0.observation_cardinality,
            observation_cardinality_next: slot0.observation_cardinality_next,
            fee_protocol: slot0.fee_protocol,
            unlocked: slot0.unlocked,
        })
    }

    /// Snapshot that passed [`PoolSnapshot::validate`]. An uninitialized pool is an error here.
    pub async fn checked_snapshot<S: PoolStateSource + ?Sized>(source: &S, pool: Address, fee: FeeAmount) -> Result<PoolSnapshot> {
        let snapshot = Self::snapshot(source, pool, fee).await?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use eyre::eyre;
    use uniswap_v3_sdk::prelude::encode_sqrt_ratio_x96;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct SlowSource {
        slot0: Slot0,
        liquidity: u128,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
    }

    impl SlowSource {
        fn new(slot0: Slot0, liquidity: u128) -> Self {
            Self { slot0, liquidity, in_flight: AtomicUsize::new(0), max_in_flight: AtomicUsize::new(0) }
        }

        async fn enter(&self) {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl PoolStateSource for SlowSource {
        async fn liquidity(&self, _pool: Address) -> Result<u128> {
            self.enter().await;
            Ok(self.liquidity)
        }

        async fn slot0(&self, _pool: Address) -> Result<Slot0> {
            self.enter().await;
            Ok(self.slot0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl PoolStateSource for FailingSource {
        async fn liquidity(&self, _pool: Address) -> Result<u128> {
            Ok(0)
        }

        async fn slot0(&self, _pool: Address) -> Result<Slot0> {
            Err(eyre!("CONNECTION_RESET"))
        }
    }

    fn ten_to_one() -> Slot0 {
        Slot0 { sqrt_price_x96: U256::from(encode_sqrt_ratio_x96::<256, 4>(10, 1)), tick: 23027, unlocked: true, ..Slot0::default() }
    }

    #[tokio::test]
    async fn test_snapshot_reads_concurrently() -> Result<()> {
        let source = SlowSource::new(ten_to_one(), 1_000);
        let pool = Address::repeat_byte(7);

        let snapshot = UniswapV3StateReader::snapshot(&source, pool, FeeAmount::Low).await?;
        assert_eq!(snapshot.address, pool);
        assert_eq!(snapshot.liquidity, 1_000);
        assert_eq!(snapshot.tick, 23027);
        assert_eq!(snapshot.tick_spacing(), 10);
        assert_eq!(source.max_in_flight.load(Ordering::SeqCst), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_read_error_propagates() {
        let result = UniswapV3StateReader::snapshot(&FailingSource, Address::ZERO, FeeAmount::Low).await;
        assert_eq!(result.err().unwrap().to_string(), "CONNECTION_RESET");
    }

    #[tokio::test]
    async fn test_checked_snapshot_rejects_uninitialized_pool() {
        let source = SlowSource::new(Slot0::default(), 0);
        let result = UniswapV3StateReader::checked_snapshot(&source, Address::ZERO, FeeAmount::Medium).await;
        assert_eq!(result.err().unwrap().to_string(), "POOL_NOT_INITIALIZED");

        let source = SlowSource::new(ten_to_one(), 0);
        assert!(UniswapV3StateReader::checked_snapshot(&source, Address::ZERO, FeeAmount::Low).await.is_ok());
    }
}
