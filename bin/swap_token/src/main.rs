use alloy::network::Ethereum;
use alloy::primitives::{Address, U256};
use alloy::providers::Provider;
use alloy::transports::Transport;
use clap::Parser;
use eyre::Result;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use javelin_core_blockchain::{connect_http, TxSigner, TxSubmitter};
use javelin_core_config::{ConfigArgs, SwapDirectionArg};
use javelin_defi_pools::state_readers::{ERC20StateReader, RpcPoolStateSource, UniswapV3QuoterV2StateReader, UniswapV3StateReader};
use javelin_defi_pools::{PoolResolver, SwapBuilder, UniswapV3FactoryClient};
use javelin_types_entities::{FeeAmount, SwapRoute, Token};

#[derive(Parser, Debug)]
#[command(name = "swap_token", about = "Swap an exact input amount through SwapRouter02")]
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

    /// Minimum output in raw token units. Zero accepts any price
    #[arg(long, default_value = "0")]
    amount_out_minimum: U256,
}

async fn log_balances<P: Provider<T, Ethereum>, T: Transport + Clone>(
    client: &P,
    tokens: &[&Token],
    account: Address,
    stage: &str,
) -> Result<()> {
    let addresses: Vec<Address> = tokens.iter().map(|token| token.get_address()).collect();
    let balances = ERC20StateReader::balances_of(client, &addresses, account).await?;
    for (token, balance) in tokens.iter().zip(balances) {
        info!(%stage, %token, balance = %token.format_amount(balance), "balance");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,alloy_rpc_client=off,alloy_transport_http=off,hyper_util=off".into());
    let fmt_layer = fmt::Layer::default().with_file(false).with_line_number(true).with_filter(env_filter);
    tracing_subscriber::registry().with(fmt_layer).init();

    let args = Commands::parse();
    let config = args.config.load().await?;
    let chain_id = config.network.chain_id;

    let signer = TxSigner::from_hex(&config.signer.private_key)?;
    let client = connect_http(&config.network.identity(), config.network.url()?, &signer).await?;
    let submitter = TxSubmitter::new(client.clone(), signer.address());

    let fee = FeeAmount::from_selector(&args.pool_fee);
    let direction = args.direction.direction(&config.tokens);

    let factory =
        UniswapV3FactoryClient::new(config.contracts.factory, submitter.clone(), config.gas.create_pool, config.gas.initialize_pool);
    let resolver = PoolResolver::new(factory);
    let Some(pool) = resolver.lookup(*direction.from(), *direction.to(), fee).await? else {
        warn!("pool not exists, check params please");
        return Ok(());
    };

    let state_source = RpcPoolStateSource::new(client.clone());
    let snapshot = UniswapV3StateReader::checked_snapshot(&state_source, pool, fee).await?;
    info!(%pool, liquidity = snapshot.liquidity, tick = snapshot.tick, sqrt_price_x96 = %snapshot.sqrt_price_x96, "pool state");

    let route = SwapRoute::new(pool, fee, direction);
    let token_in = Token::new(chain_id, route.token_in(), ERC20StateReader::decimals(&client, route.token_in()).await?);
    let token_out = Token::new(chain_id, route.token_out(), ERC20StateReader::decimals(&client, route.token_out()).await?);

    log_balances(&client, &[&token_in, &token_out], signer.address(), "before").await?;

    let amount_out = UniswapV3QuoterV2StateReader::quote_exact_input(&client, config.contracts.quoter, &route, args.amount_in).await?;
    info!(amount_in = %token_in.format_amount(args.amount_in), amount_out = %token_out.format_amount(amount_out), "quote");

    // approve then swap with consecutive nonces
    let approve = SwapBuilder::approve_intent(route.token_in(), config.contracts.swap_router, args.amount_in);
    let swap = SwapBuilder::exact_input_single_intent(&route, config.contracts.swap_router, signer.address(), args.amount_in, args.amount_out_minimum);
    let receipts = submitter.submit_in_order(vec![approve, swap]).await?;
    let Some(receipt) = receipts.last() else {
        return Ok(());
    };
    info!(tx_hash = %receipt.transaction_hash, "swap executed");

    log_balances(&client, &[&token_in, &token_out], signer.address(), "after").await?;

    Ok(())
}
