use clap::Parser;
use eyre::Result;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use javelin_core_blockchain::{connect_http, TxSigner, TxSubmitter};
use javelin_core_config::ConfigArgs;
use javelin_defi_pools::state_readers::{RpcPoolStateSource, UniswapV3StateReader};
use javelin_defi_pools::{initial_sqrt_price_x96, PoolResolver, UniswapV3FactoryClient};
use javelin_types_entities::FeeAmount;

#[derive(Parser, Debug)]
#[command(name = "create_pool", about = "Create and initialize the WETH/SYN pool if it does not exist")]
struct Commands {
    #[command(flatten)]
    config: ConfigArgs,

    /// lowest, low, medium or high. Anything else means low
    #[arg(long, default_value = "medium")]
    pool_fee: String,

    /// Initial price as token1 per token0, numerator
    #[arg(long, default_value_t = 1)]
    price_amount1: u64,

    /// Initial price as token1 per token0, denominator
    #[arg(long, default_value_t = 1)]
    price_amount0: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,alloy_rpc_client=off,alloy_transport_http=off,hyper_util=off".into());
    let fmt_layer = fmt::Layer::default().with_file(false).with_line_number(true).with_filter(env_filter);
    tracing_subscriber::registry().with(fmt_layer).init();

    let args = Commands::parse();
    let config = args.config.load().await?;

    let signer = TxSigner::from_hex(&config.signer.private_key)?;
    let client = connect_http(&config.network.identity(), config.network.url()?, &signer).await?;
    let submitter = TxSubmitter::new(client.clone(), signer.address());

    let fee = FeeAmount::from_selector(&args.pool_fee);
    let initial_sqrt_price_x96 = initial_sqrt_price_x96(args.price_amount1, args.price_amount0)?;

    let factory = UniswapV3FactoryClient::new(config.contracts.factory, submitter, config.gas.create_pool, config.gas.initialize_pool);
    let resolver = PoolResolver::new(factory);
    let resolution = resolver.resolve(config.tokens.weth, config.tokens.synthetic, fee, initial_sqrt_price_x96).await?;

    let state_source = RpcPoolStateSource::new(client);
    let snapshot = UniswapV3StateReader::checked_snapshot(&state_source, resolution.address(), fee).await?;
    info!(
        pool = %snapshot.address,
        created = resolution.is_created(),
        %fee,
        liquidity = snapshot.liquidity,
        tick = snapshot.tick,
        sqrt_price_x96 = %snapshot.sqrt_price_x96,
        "pool ready"
    );

    Ok(())
}
