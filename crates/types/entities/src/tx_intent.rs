use alloy::network::TransactionBuilder;
use alloy::rpc::types::TransactionRequest;
use alloy_primitives::{Address, Bytes, U256};

/// Encoded contract call ready to be signed and sent once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TxIntent {
    pub label: String,
    pub to: Address,
    pub calldata: Bytes,
    pub value: U256,
    pub from: Option<Address>,
    pub gas_limit: Option<u64>,
    pub nonce: Option<u64>,
}

impl TxIntent {
    pub fn new(label: impl Into<String>, to: Address, calldata: Bytes) -> Self {
        Self { label: label.into(), to, calldata, ..Self::default() }
    }

    pub fn with_value(self, value: U256) -> Self {
        Self { value, ..self }
    }

    pub fn with_from(self, from: Address) -> Self {
        Self { from: Some(from), ..self }
    }

    pub fn with_gas_limit(self, gas_limit: u64) -> Self {
        Self { gas_limit: Some(gas_limit), ..self }
    }

    pub fn with_nonce(self, nonce: u64) -> Self {
        Self { nonce: Some(nonce), ..self }
    }
}

impl From<TxIntent> for TransactionRequest {
    fn from(intent: TxIntent) -> Self {
        let mut tx = TransactionRequest::default().with_to(intent.to).with_input(intent.calldata).with_value(intent.value);
        if let Some(from) = intent.from {
            tx = tx.with_from(from);
        }
        if let Some(gas_limit) = intent.gas_limit {
            tx = tx.with_gas_limit(gas_limit);
        }
        if let Some(nonce) = intent.nonce {
            tx = tx.with_nonce(nonce);
        }
        tx
    }
}
