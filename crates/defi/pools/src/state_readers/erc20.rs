use alloy::network::Ethereum;
use alloy::primitives::{Address, U256};
use alloy::providers::Provider;
use alloy::transports::Transport;
use alloy::sol_types::SolCall;
use eyre::Result;
use futures::future::try_join_all;

use javelin_core_blockchain::eth_call;
use javelin_defi_abi::{AbiEncoderHelper, IERC20};

pub struct ERC20StateReader {}

impl ERC20StateReader {
    pub async fn balance_of<P: Provider<T, Ethereum>, T: Transport + Clone>(client: &P, erc20_token: Address, account: Address) -> Result<U256> {
        let call_data_result = eth_call(client, erc20_token, AbiEncoderHelper::encode_erc20_balance_of(account)).await?;
        let call_return = IERC20::balanceOfCall::abi_decode_returns(&call_data_result, false)?;
        Ok(call_return._0)
    }

    /// Balances of `account` in every token, read concurrently.
    pub async fn balances_of<P: Provider<T, Ethereum>, T: Transport + Clone>(client: &P, erc20_tokens: &[Address], account: Address) -> Result<Vec<U256>> {
        try_join_all(erc20_tokens.iter().map(|token| Self::balance_of(client, *token, account))).await
    }

    pub async fn decimals<P: Provider<T, Ethereum>, T: Transport + Clone>(client: &P, erc20_token: Address) -> Result<u8> {
        let call_data_result = eth_call(client, erc20_token, IERC20::decimalsCall {}.abi_encode().into()).await?;
        let call_return = IERC20::decimalsCall::abi_decode_returns(&call_data_result, false)?;
        Ok(call_return._0)
    }
}
