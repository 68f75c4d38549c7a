use std::marker::PhantomData;

use alloy::network::Ethereum;
use alloy::providers::Provider;
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use alloy::transports::Transport;
use alloy_primitives::Address;
use eyre::Result;
use tracing::{debug, error, info};

use javelin_types_entities::TxIntent;

use crate::BlockchainError;

/// Sends intents one at a time and waits for each receipt. Nothing is retried.
#[derive(Clone)]
pub struct TxSubmitter<P, T> {
    client: P,
    from: Address,
    _t: PhantomData<T>,
}

impl<P, T> TxSubmitter<P, T>
where
    T: Transport + Clone,
    P: Provider<T, Ethereum> + Clone + 'static,
{
    pub fn new(client: P, from: Address) -> Self {
        Self { client, from, _t: PhantomData }
    }

    pub fn client(&self) -> &P {
        &self.client
    }

    pub fn sender(&self) -> Address {
        self.from
    }

    /// Next nonce of the sender as seen by the node.
    pub async fn nonce(&self) -> Result<u64> {
        Ok(self.client.get_transaction_count(self.from).await?)
    }

    pub async fn submit(&self, intent: TxIntent) -> Result<TransactionReceipt> {
        let label = intent.label.clone();
        let tx: TransactionRequest = intent.with_from(self.from).into();

        let pending = self.client.send_transaction(tx).await?;
        let tx_hash = *pending.tx_hash();
        info!(%label, %tx_hash, "transaction sent");

        let receipt = pending.get_receipt().await?;
        debug!(?receipt);
        info!(
            %label,
            %tx_hash,
            block = receipt.block_number.unwrap_or_default(),
            gas_used = receipt.gas_used,
            status = receipt.status(),
            "transaction confirmed"
        );

        if !receipt.status() {
            error!(%label, %tx_hash, "transaction reverted");
            return Err(BlockchainError::Reverted(tx_hash).into());
        }
        Ok(receipt)
    }

    /// Sends `intents` with consecutive nonces from the sender's next nonce.
    /// Each one is confirmed before the next is sent and a revert stops the sequence.
    pub async fn submit_in_order(&self, intents: Vec<TxIntent>) -> Result<Vec<TransactionReceipt>> {
        let nonce = self.nonce().await?;
        let mut receipts = Vec::with_capacity(intents.len());
        for (offset, intent) in (0u64..).zip(intents) {
            receipts.push(self.submit(intent.with_nonce(nonce + offset)).await?);
        }
        Ok(receipts)
    }
}
