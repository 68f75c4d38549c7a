use alloy::network::{Ethereum, TransactionBuilder};
use alloy::providers::Provider;
use alloy::rpc::types::TransactionRequest;
use alloy::transports::Transport;
use alloy_primitives::{Address, Bytes};
use eyre::Result;

/// Read-only `eth_call` against the latest block. Reverts surface as errors.
pub async fn eth_call<P, T>(client: &P, to: Address, calldata: Bytes) -> Result<Bytes>
where
    T: Transport + Clone,
    P: Provider<T, Ethereum>,
{
    let tx = TransactionRequest::default().with_to(to).with_input(calldata);
    let result = client.call(&tx).await?;
    Ok(result)
}
