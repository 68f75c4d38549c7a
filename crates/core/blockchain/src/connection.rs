use alloy::network::Ethereum;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::transports::http::{Client, Http};
use alloy::transports::Transport;
use eyre::Result;
use tracing::info;
use url::Url;

use javelin_types_entities::NetworkIdentity;

use crate::{BlockchainError, TxSigner};

pub fn check_chain_id(network: &NetworkIdentity, reported_chain_id: u64) -> Result<(), BlockchainError> {
    if network.matches(reported_chain_id) {
        Ok(())
    } else {
        Err(BlockchainError::ChainIdMismatch { expected: network.chain_id, reported: reported_chain_id })
    }
}

async fn verify_chain_id<P, T>(client: &P, network: &NetworkIdentity) -> Result<()>
where
    T: Transport + Clone,
    P: Provider<T, Ethereum>,
{
    let reported_chain_id = client.get_chain_id().await?;
    check_chain_id(network, reported_chain_id)?;
    Ok(())
}

/// HTTP provider that signs with `signer` and fills gas, nonce and chain id. Fails if the node serves another chain.
pub async fn connect_http(network: &NetworkIdentity, url: Url, signer: &TxSigner) -> Result<impl Provider<Http<Client>, Ethereum> + Clone + 'static> {
    info!(%network, %url, signer = %signer.address(), "connecting");
    let client = ProviderBuilder::new().with_recommended_fillers().wallet(signer.wallet()).on_http(url);
    verify_chain_id(&client, network).await?;
    Ok(client)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_check_chain_id() {
        let network = NetworkIdentity::new("chain45207", 45207);
        assert!(check_chain_id(&network, 45207).is_ok());
        assert_eq!(check_chain_id(&network, 1).err(), Some(BlockchainError::ChainIdMismatch { expected: 45207, reported: 1 }));
    }

    #[tokio::test]
    async fn test_connect_unreachable_node() {
        let network = NetworkIdentity::new("localnet", 31337);
        let signer = TxSigner::from_hex("0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80").unwrap();
        let url = Url::parse("http://127.0.0.1:1").unwrap();
        assert!(connect_http(&network, url, &signer).await.is_err());
    }
}
