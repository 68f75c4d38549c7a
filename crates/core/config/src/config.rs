use std::fmt;
use std::path::PathBuf;

use alloy_primitives::Address;
use eyre::{eyre, Result};
use serde::Deserialize;
use url::Url;

use javelin_types_entities::NetworkIdentity;

use crate::load::{load_from_file, LoadConfigError};

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct NetworkConfig {
    pub name: String,
    pub chain_id: u64,
    pub rpc_url: String,
}

impl NetworkConfig {
    pub fn identity(&self) -> NetworkIdentity {
        NetworkIdentity::new(self.name.clone(), self.chain_id)
    }

    pub fn url(&self) -> Result<Url> {
        Ok(Url::parse(self.rpc_url.as_str())?)
    }
}

#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct SignerConfig {
    pub private_key: String,
    /// Key for minting positions. Falls back to `private_key`
    #[serde(default)]
    pub liquidity_private_key: Option<String>,
}

impl SignerConfig {
    pub fn new(private_key: impl Into<String>) -> Self {
        Self { private_key: private_key.into(), liquidity_private_key: None }
    }

    pub fn liquidity_key(&self) -> &str {
        self.liquidity_private_key.as_deref().unwrap_or(&self.private_key)
    }
}

impl fmt::Debug for SignerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignerConfig")
            .field("private_key", &"***")
            .field("liquidity_private_key", &self.liquidity_private_key.as_ref().map(|_| "***"))
            .finish()
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ContractsConfig {
    pub factory: Address,
    pub position_manager: Address,
    pub swap_router: Address,
    pub quoter: Address,
}

fn default_decimals() -> u8 {
    18
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct TokensConfig {
    pub weth: Address,
    pub synthetic: Address,
    #[serde(default = "default_decimals")]
    pub decimals: u8,
}

/// Gas ceilings for calls the node cannot estimate reliably on the devnet.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GasConfig {
    pub create_pool: u64,
    pub initialize_pool: u64,
    pub mint: u64,
}

impl Default for GasConfig {
    fn default() -> Self {
        Self { create_pool: 100_000_000, initialize_pool: 3_000_000, mint: 10_000_000 }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct DexConfig {
    pub network: NetworkConfig,
    pub signer: SignerConfig,
    pub contracts: ContractsConfig,
    pub tokens: TokensConfig,
    #[serde(default)]
    pub gas: GasConfig,
}

impl DexConfig {
    pub async fn from_file(file_path: PathBuf) -> Result<Self, LoadConfigError> {
        load_from_file(file_path).await
    }

    /// Loads `file_path` when given, otherwise falls back to the compiled-in devnet defaults.
    pub async fn resolve(file_path: Option<PathBuf>) -> Result<Self> {
        match file_path {
            Some(file_path) => Ok(Self::from_file(file_path).await?),
            None => Self::builtin(),
        }
    }

    #[cfg(feature = "devnet")]
    fn builtin() -> Result<Self> {
        Ok(Self::devnet())
    }

    #[cfg(not(feature = "devnet"))]
    fn builtin() -> Result<Self> {
        Err(eyre!("CONFIG_FILE_REQUIRED"))
    }

    pub fn token_decimals(&self) -> u8 {
        self.tokens.decimals
    }

    pub fn ensure_distinct_tokens(&self) -> Result<()> {
        if self.tokens.weth == self.tokens.synthetic {
            return Err(eyre!("SAME_TOKEN_ADDRESSES"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloy_primitives::address;

    const CONFIG: &str = r#"
[network]
name = "localnet"
chain_id = 31337
rpc_url = "http://127.0.0.1:8545"

[signer]
private_key = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"

[contracts]
factory = "0x1F98431c8aD98523631AE4a59f267346ea31F984"
position_manager = "0xC36442b4a4522E871399CD717aBDD847Ab11FE88"
swap_router = "0x68b3465833fb72A70ecDF485E0e4C7bD8665Fc45"
quoter = "0x61fFE014bA17989E743c5F6cB21bF9697530B21e"

[tokens]
weth = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"
synthetic = "0x6B175474E89094C44Da98b954EedeAC495271d0F"

[gas]
mint = 12000000
"#;

    #[test]
    fn test_deserialization() {
        let config: DexConfig = toml::from_str(CONFIG).unwrap();
        assert_eq!(config.network.identity(), NetworkIdentity::new("localnet", 31337));
        assert_eq!(config.contracts.factory, address!("1F98431c8aD98523631AE4a59f267346ea31F984"));
        assert_eq!(config.tokens.decimals, 18);
        assert_eq!(config.gas, GasConfig { mint: 12_000_000, ..GasConfig::default() });
        assert_eq!(config.gas.create_pool, 100_000_000);
        assert_eq!(config.signer.liquidity_key(), config.signer.private_key);
        assert!(config.ensure_distinct_tokens().is_ok());
    }

    #[test]
    fn test_liquidity_key() {
        let with_key = CONFIG.replace(
            "[contracts]",
            "liquidity_private_key = \"0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d\"\n\n[contracts]",
        );
        let config: DexConfig = toml::from_str(&with_key).unwrap();
        assert_eq!(config.signer.liquidity_key(), "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d");
        assert_eq!(config.signer.private_key, "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80");
        assert!(!format!("{:?}", config.signer).contains("59c6995e"));
    }

    #[test]
    fn test_missing_section() {
        let without_contracts = CONFIG.replace("[contracts]", "[unused]");
        assert!(toml::from_str::<DexConfig>(&without_contracts).is_err());
    }

    #[tokio::test]
    async fn test_from_file() {
        let file_path = std::env::temp_dir().join(format!("javelin-config-{}.toml", std::process::id()));
        tokio::fs::write(&file_path, CONFIG).await.unwrap();

        let config = DexConfig::resolve(Some(file_path.clone())).await.unwrap();
        assert_eq!(config.network.rpc_url, "http://127.0.0.1:8545");
        tokio::fs::remove_file(&file_path).await.unwrap();

        let missing = DexConfig::from_file(file_path).await;
        assert!(matches!(missing, Err(LoadConfigError::IoError(_))));
    }

    #[cfg(feature = "devnet")]
    #[tokio::test]
    async fn test_resolve_without_file() {
        let config = DexConfig::resolve(None).await.unwrap();
        assert_eq!(config, DexConfig::devnet());
    }
}
