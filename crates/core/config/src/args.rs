use std::path::PathBuf;

use alloy_primitives::Address;
use clap::{Args, ValueEnum};
use eyre::Result;

use javelin_types_entities::SwapDirection;

use crate::config::{DexConfig, SignerConfig, TokensConfig};

/// Connection, signer and contract flags shared by every script. Flags given on the command line win over the config file.
#[derive(Args, Clone, Debug, Default)]
pub struct ConfigArgs {
    /// TOML file with network, signer, contracts and tokens sections
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub rpc_url: Option<String>,

    #[arg(long)]
    pub chain_id: Option<u64>,

    #[arg(long, alias = "key")]
    pub private_key: Option<String>,

    #[arg(long)]
    pub factory: Option<Address>,

    #[arg(long)]
    pub position_manager: Option<Address>,

    #[arg(long, alias = "router")]
    pub swap_router: Option<Address>,

    #[arg(long)]
    pub quoter: Option<Address>,

    #[arg(long)]
    pub weth: Option<Address>,

    #[arg(long)]
    pub synthetic: Option<Address>,
}

impl ConfigArgs {
    pub async fn load(&self) -> Result<DexConfig> {
        let mut config = DexConfig::resolve(self.config.clone()).await?;
        self.apply(&mut config);
        config.ensure_distinct_tokens()?;
        Ok(config)
    }

    pub fn apply(&self, config: &mut DexConfig) {
        if let Some(rpc_url) = &self.rpc_url {
            config.network.rpc_url = rpc_url.clone();
        }
        if let Some(chain_id) = self.chain_id {
            config.network.chain_id = chain_id;
        }
        if let Some(private_key) = &self.private_key {
            config.signer = SignerConfig::new(private_key.clone());
        }
        if let Some(factory) = self.factory {
            config.contracts.factory = factory;
        }
        if let Some(position_manager) = self.position_manager {
            config.contracts.position_manager = position_manager;
        }
        if let Some(swap_router) = self.swap_router {
            config.contracts.swap_router = swap_router;
        }
        if let Some(quoter) = self.quoter {
            config.contracts.quoter = quoter;
        }
        if let Some(weth) = self.weth {
            config.tokens.weth = weth;
        }
        if let Some(synthetic) = self.synthetic {
            config.tokens.synthetic = synthetic;
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwapDirectionArg {
    #[default]
    WethSyn,
    SynWeth,
}

impl SwapDirectionArg {
    pub fn direction(&self, tokens: &TokensConfig) -> SwapDirection {
        match self {
            SwapDirectionArg::WethSyn => SwapDirection::new(tokens.weth, tokens.synthetic),
            SwapDirectionArg::SynWeth => SwapDirection::new(tokens.synthetic, tokens.weth),
        }
    }
}
