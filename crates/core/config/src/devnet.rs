use alloy_primitives::{address, Address};

use crate::config::{ContractsConfig, DexConfig, GasConfig, NetworkConfig, SignerConfig, TokensConfig};

#[non_exhaustive]
pub struct DevnetAddress;

impl DevnetAddress {
    pub const WETH: Address = address!("4200000000000000000000000000000000000006");
    pub const SYN: Address = address!("4A679253410272dd5232B3Ff7cF5dbB88f295319");
    pub const UNISWAP_V3_FACTORY: Address = address!("E6E340D132b5f46d1e472DebcD681B2aBc16e57E");
    pub const NONFUNGIBLE_POSITION_MANAGER: Address = address!("95401dc811bb5740090279Ba06cfA8fcF6113778");
    pub const SWAP_ROUTER_02: Address = address!("99bbA657f2BbC93c02D617f8bA121cB8Fc104Acf");
    pub const QUOTER_V2: Address = address!("4826533B4897376654Bb4d4AD88B7faFD0C98528");
}

pub const DEVNET_NAME: &str = "chain45207";
pub const DEVNET_CHAIN_ID: u64 = 45207;
pub const DEVNET_RPC_URL: &str = "http://devnet.nodekit.xyz/javelin-reverse/rpc";

/// Pre-funded development account. Public knowledge, never use it outside the devnet.
pub const DEVNET_PRIVATE_KEY: &str = "0x574f69c77680ca128d2ed233e69513070f66253a654a59327d8435c283379066";
/// Pre-funded development account that mints positions.
pub const DEVNET_LIQUIDITY_PRIVATE_KEY: &str = "0xa5d9350e81413bfce309fda540f8856df0fce4b9857b05efedef72d0b1fe1221";

impl DexConfig {
    pub fn devnet() -> Self {
        DexConfig {
            network: NetworkConfig { name: DEVNET_NAME.to_string(), chain_id: DEVNET_CHAIN_ID, rpc_url: DEVNET_RPC_URL.to_string() },
            signer: SignerConfig {
                private_key: DEVNET_PRIVATE_KEY.to_string(),
                liquidity_private_key: Some(DEVNET_LIQUIDITY_PRIVATE_KEY.to_string()),
            },
            contracts: ContractsConfig {
                factory: DevnetAddress::UNISWAP_V3_FACTORY,
                position_manager: DevnetAddress::NONFUNGIBLE_POSITION_MANAGER,
                swap_router: DevnetAddress::SWAP_ROUTER_02,
                quoter: DevnetAddress::QUOTER_V2,
            },
            tokens: TokensConfig { weth: DevnetAddress::WETH, synthetic: DevnetAddress::SYN, decimals: 18 },
            gas: GasConfig::default(),
        }
    }
}
