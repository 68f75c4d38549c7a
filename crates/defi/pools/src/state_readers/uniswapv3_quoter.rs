use alloy::network::Ethereum;
use alloy::primitives::aliases::U24;
use alloy::primitives::{Address, Bytes, U160, U256};
use alloy::providers::Provider;
use alloy::transports::Transport;
use alloy::sol_types::SolCall;
use eyre::{eyre, Result};

use javelin_core_blockchain::eth_call;
use javelin_defi_abi::uniswap_periphery::IQuoterV2;
use javelin_defi_abi::AbiEncoderHelper;
use javelin_types_entities::SwapRoute;

use crate::SwapBuilder;

pub struct UniswapV3QuoterV2Encoder {}

impl UniswapV3QuoterV2Encoder {
    pub fn quote_exact_input_encode(token_in: Address, token_out: Address, fee: U24, price_limit: U160, amount_in: U256) -> Bytes {
        AbiEncoderHelper::encode_quoter_quote_exact_input_single(token_in, token_out, fee, price_limit, amount_in)
    }

    pub fn quote_exact_input_result_decode(data: &[u8]) -> Result<U256> {
        let ret = IQuoterV2::quoteExactInputSingleCall::abi_decode_returns(data, false);
        match ret {
            Ok(r) => Ok(r.amountOut),
            Err(_) => Err(eyre!("CANNOT_DECODE_EXACT_INPUT_RETURN")),
        }
    }
}

pub struct UniswapV3QuoterV2StateReader {}

impl UniswapV3QuoterV2StateReader {
    /// Simulated exact-input quote along `route`. A revert inside the quoter, such as an empty pool, is returned as an error.
    pub async fn quote_exact_input<P: Provider<T, Ethereum>, T: Transport + Clone>(client: &P, quoter_address: Address, route: &SwapRoute, amount: U256) -> Result<U256> {
        let call_data = SwapBuilder::quote_calldata(route, amount);

        let value = eth_call(client, quoter_address, call_data).await?;

        SwapBuilder::decode_quote(&value)
    }
}
