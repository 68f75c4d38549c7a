use alloy::primitives::{Address, Bytes, U160, U256};
use eyre::Result;

use javelin_defi_abi::AbiEncoderHelper;
use javelin_types_entities::{SwapRoute, TxIntent};

use crate::state_readers::UniswapV3QuoterV2Encoder;

/// Single-pool exact-input quote and swap calls. No price limit is ever set.
pub struct SwapBuilder;

impl SwapBuilder {
    pub fn quote_calldata(route: &SwapRoute, amount_in: U256) -> Bytes {
        UniswapV3QuoterV2Encoder::quote_exact_input_encode(route.token_in(), route.token_out(), route.fee.as_u24(), U160::ZERO, amount_in)
    }

    pub fn decode_quote(data: &[u8]) -> Result<U256> {
        UniswapV3QuoterV2Encoder::quote_exact_input_result_decode(data)
    }

    /// Allowance for `spender` to pull `amount` of `token`. Must be accepted before the swap is sent.
    pub fn approve_intent(token: Address, spender: Address, amount: U256) -> TxIntent {
        TxIntent::new("approve", token, AbiEncoderHelper::encode_erc20_approve(spender, amount))
    }

    pub fn exact_input_single_intent(
        route: &SwapRoute,
        router: Address,
        recipient: Address,
        amount_in: U256,
        amount_out_minimum: U256,
    ) -> TxIntent {
        let calldata = AbiEncoderHelper::encode_router_exact_input_single(
            route.token_in(),
            route.token_out(),
            route.fee.as_u24(),
            recipient,
            amount_in,
            amount_out_minimum,
            U160::ZERO,
        );
        TxIntent::new("exact_input_single", router, calldata)
    }
}
