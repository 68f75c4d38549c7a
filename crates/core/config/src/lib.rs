pub use args::{ConfigArgs, SwapDirectionArg};
pub use config::{ContractsConfig, DexConfig, GasConfig, NetworkConfig, SignerConfig, TokensConfig};
#[cfg(feature = "devnet")]
pub use devnet::DevnetAddress;
pub use load::{load_from_file, LoadConfigError};

mod args;
mod config;
#[cfg(feature = "devnet")]
mod devnet;
mod load;
