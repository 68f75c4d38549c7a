use alloy::primitives::U256;
use clap::Parser;
use eyre::Result;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use javelin_core_blockchain::{connect_http, TxSigner, TxSubmitter};
use javelin_core_config::{ConfigArgs, SwapDirectionArg};
use javelin_defi_pools::state_readers::{RpcPoolStateSource, UniswapV3QuoterV2StateReader, UniswapV3StateReader};
use javelin_defi_pools::{PoolResolver, UniswapV3FactoryClient};
use javelin_types_entities::{FeeAmount, SwapRoute};

#[derive(Parser, Debug)]
#[command(name = "quote_swap", about = "Quote an exact-input swap through the QuoterV2 contract")]
struct Commands {
    #[command(flatten)]
    config: ConfigArgs,

    /// lowest, low, medium or high. Anything else means low
    #[arg(long, default_value = "low")]
    pool_fee: String,

    #[arg(long, value_enum, default_value_t = SwapDirectionArg::WethSyn)]
    direction: SwapDirectionArg,

    /// Input amount in raw token units
    #[arg(long, default_value = "100000000")]
    amount_in: U256,
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
    let direction = args.direction.direction(&config.tokens);

    let factory = UniswapV3FactoryClient::new(config.contracts.factory, submitter, config.gas.create_pool, config.gas.initialize_pool);
    let resolver = PoolResolver::new(factory);
    let Some(pool) = resolver.lookup(*direction.from(), *direction.to(), fee).await? else {
        warn!("pool not exists, check params please");
        return Ok(());
    };

    let state_source = RpcPoolStateSource::new(client.clone());
    let snapshot = UniswapV3StateReader::checked_snapshot(&state_source, pool, fee).await?;
    info!(%pool, liquidity = snapshot.liquidity, tick = snapshot.tick, sqrt_price_x96 = %snapshot.sqrt_price_x96, "pool state");

    let route = SwapRoute::new(pool, fee, direction);
    let amount_out = UniswapV3QuoterV2StateReader::quote_exact_input(&client, config.contracts.quoter, &route, args.amount_in).await?;
    info!(token_in = %route.token_in(), token_out = %route.token_out(), amount_in = %args.amount_in, %amount_out, "quote");

    Ok(())
}
