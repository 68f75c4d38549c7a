use alloy::primitives::aliases::U24;
use alloy::primitives::{Address, Bytes, U160, U256};
use alloy::sol_types::{SolCall, SolInterface};

use crate::uniswap3::{IUniswapV3Factory, IUniswapV3Pool};
use crate::uniswap_periphery::{IQuoterV2, ISwapRouter02};
use crate::IERC20;

pub struct AbiEncoderHelper;

impl AbiEncoderHelper {
    pub fn encode_erc20_balance_of(account: Address) -> Bytes {
        IERC20::IERC20Calls::balanceOf(IERC20::balanceOfCall { account }).abi_encode().into()
    }

    pub fn encode_erc20_approve(spender: Address, amount: U256) -> Bytes {
        IERC20::IERC20Calls::approve(IERC20::approveCall { spender, amount }).abi_encode().into()
    }

    pub fn encode_uniswap3_create_pool(token_a: Address, token_b: Address, fee: U24) -> Bytes {
        IUniswapV3Factory::IUniswapV3FactoryCalls::createPool(IUniswapV3Factory::createPoolCall { tokenA: token_a, tokenB: token_b, fee })
            .abi_encode()
            .into()
    }

    pub fn encode_uniswap3_initialize(sqrt_price_x96: U160) -> Bytes {
        IUniswapV3Pool::IUniswapV3PoolCalls::initialize(IUniswapV3Pool::initializeCall { sqrtPriceX96: sqrt_price_x96 }).abi_encode().into()
    }

    pub fn encode_quoter_quote_exact_input_single(token_in: Address, token_out: Address, fee: U24, price_limit: U160, amount_in: U256) -> Bytes {
        let params = IQuoterV2::QuoteExactInputSingleParams {
            tokenIn: token_in,
            tokenOut: token_out,
            amountIn: amount_in,
            fee,
            sqrtPriceLimitX96: price_limit,
        };
        IQuoterV2::quoteExactInputSingleCall { params }.abi_encode().into()
    }

    pub fn encode_router_exact_input_single(
        token_in: Address,
        token_out: Address,
        fee: U24,
        recipient: Address,
        amount_in: U256,
        amount_out_minimum: U256,
        price_limit: U160,
    ) -> Bytes {
        let params = ISwapRouter02::ExactInputSingleParams {
            tokenIn: token_in,
            tokenOut: token_out,
            fee,
            recipient,
            amountIn: amount_in,
            amountOutMinimum: amount_out_minimum,
            sqrtPriceLimitX96: price_limit,
        };
        ISwapRouter02::ISwapRouter02Calls::exactInputSingle(ISwapRouter02::exactInputSingleCall { params }).abi_encode().into()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloy::primitives::hex;

    #[test]
    fn test_selectors() {
        let approve = AbiEncoderHelper::encode_erc20_approve(Address::ZERO, U256::ZERO);
        assert_eq!(approve[..4], hex!("095ea7b3"));
        assert_eq!(approve.len(), 4 + 2 * 32);

        let create_pool = AbiEncoderHelper::encode_uniswap3_create_pool(Address::ZERO, Address::ZERO, U24::from(500));
        assert_eq!(create_pool[..4], hex!("a1671295"));

        let initialize = AbiEncoderHelper::encode_uniswap3_initialize(U160::from(1));
        assert_eq!(initialize[..4], hex!("f637731d"));
        assert_eq!(initialize.len(), 4 + 32);

        let balance_of = AbiEncoderHelper::encode_erc20_balance_of(Address::repeat_byte(7));
        assert_eq!(balance_of[..4], hex!("70a08231"));
    }

    #[test]
    fn test_swap_encoding() {
        let quote = AbiEncoderHelper::encode_quoter_quote_exact_input_single(
            Address::repeat_byte(1),
            Address::repeat_byte(2),
            U24::from(500),
            U160::ZERO,
            U256::from(100_000_000u64),
        );
        assert_eq!(quote[..4], hex!("c6a5026a"));
        assert_eq!(quote.len(), 4 + 5 * 32);

        let swap = AbiEncoderHelper::encode_router_exact_input_single(
            Address::repeat_byte(1),
            Address::repeat_byte(2),
            U24::from(500),
            Address::repeat_byte(3),
            U256::from(100_000_000u64),
            U256::ZERO,
            U160::ZERO,
        );
        assert_eq!(swap[..4], hex!("04e45aaf"));
        assert_eq!(swap.len(), 4 + 7 * 32);
    }
}
