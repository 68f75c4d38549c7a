use alloy::primitives::utils::parse_units;
use alloy::primitives::U256;
use chrono::Utc;
use clap::Parser;
use eyre::Result;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use javelin_core_blockchain::{connect_http, TxSigner, TxSubmitter};
use javelin_core_config::ConfigArgs;
use javelin_defi_pools::state_readers::{RpcPoolStateSource, UniswapV3StateReader};
use javelin_defi_pools::{initial_sqrt_price_x96, MintCall, PoolResolver, PositionBuilder, SwapBuilder, UniswapV3FactoryClient};
use javelin_types_entities::{FeeAmount, Token};

#[derive(Parser, Debug)]
#[command(name = "add_liquidity", about = "Mint a WETH/SYN position around the current price")]
struct Commands {
    #[command(flatten)]
    config: ConfigArgs,

    /// lowest, low, medium or high. Anything else means low
    #[arg(long, default_value = "low")]
    pool_fee: String,

    /// WETH to deposit, in whole tokens
    #[arg(long, default_value = "10000000")]
    amount_weth: String,

    /// SYN to deposit, in whole tokens
    #[arg(long, default_value = "1000000")]
    amount_syn: String,

    /// Price for a newly created pool as token1 per token0, numerator
    #[arg(long, default_value_t = 10)]
    price_amount1: u64,

    /// Price for a newly created pool as token1 per token0, denominator
    #[arg(long, default_value_t = 1)]
    price_amount0: u64,

    /// Derive liquidity without truncating intermediate products
    #[arg(long)]
    full_precision: bool,
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
    let decimals = config.token_decimals();

    let weth = Token::new_with_symbol(chain_id, config.tokens.weth, decimals, "WETH");
    let syn = Token::new_with_symbol(chain_id, config.tokens.synthetic, decimals, "SYN");
    let amount_weth: U256 = parse_units(&args.amount_weth, decimals)?.into();
    let amount_syn: U256 = parse_units(&args.amount_syn, decimals)?.into();

    let (token0, token1) = Token::sort_pair(weth.clone(), syn.clone())?;
    let (amount0, amount1) = if token0 == weth { (amount_weth, amount_syn) } else { (amount_syn, amount_weth) };

    let signer = TxSigner::from_hex(config.signer.liquidity_key())?;
    let client = connect_http(&config.network.identity(), config.network.url()?, &signer).await?;
    let submitter = TxSubmitter::new(client.clone(), signer.address());

    let fee = FeeAmount::from_selector(&args.pool_fee);
    let initial_sqrt_price_x96 = initial_sqrt_price_x96(args.price_amount1, args.price_amount0)?;

    let factory =
        UniswapV3FactoryClient::new(config.contracts.factory, submitter.clone(), config.gas.create_pool, config.gas.initialize_pool);
    let resolver = PoolResolver::new(factory);
    let resolution = resolver.resolve(token0.get_address(), token1.get_address(), fee, initial_sqrt_price_x96).await?;

    let state_source = RpcPoolStateSource::new(client);
    let snapshot = UniswapV3StateReader::checked_snapshot(&state_source, resolution.address(), fee).await?;
    info!(pool = %snapshot.address, liquidity = snapshot.liquidity, tick = snapshot.tick, "pool state");

    let builder = PositionBuilder::default().with_full_precision(args.full_precision);
    let mut plan = builder.build(&snapshot, &token0, &token1, amount0, amount1)?;
    let position = &plan.position;
    info!(
        tick_lower = position.tick_lower,
        tick_upper = position.tick_upper,
        liquidity = position.liquidity,
        amount0 = %token0.format_amount(position.amount0),
        amount1 = %token1.format_amount(position.amount1),
        "position"
    );

    let mint = builder.mint_call(&mut plan, signer.address(), Utc::now())?;
    info!(amount0_min = %mint.amount0_min, amount1_min = %mint.amount1_min, deadline = mint.deadline, "minting");

    // approvals must land before the mint
    let intents = vec![
        SwapBuilder::approve_intent(token0.get_address(), config.contracts.position_manager, amount0),
        SwapBuilder::approve_intent(token1.get_address(), config.contracts.position_manager, amount1),
        mint.into_intent(config.contracts.position_manager, config.gas.mint),
    ];
    let receipts = submitter.submit_in_order(intents).await?;
    let Some(receipt) = receipts.last() else {
        return Ok(());
    };

    match MintCall::minted(config.contracts.position_manager, receipt.inner.logs()) {
        Some(minted) => info!(
            tx_hash = %receipt.transaction_hash,
            token_id = %minted.tokenId,
            liquidity = minted.liquidity,
            amount0 = %token0.format_amount(minted.amount0),
            amount1 = %token1.format_amount(minted.amount1),
            "liquidity added"
        ),
        None => info!(tx_hash = %receipt.transaction_hash, "liquidity added"),
    }

    Ok(())
}
