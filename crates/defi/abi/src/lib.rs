pub use abi_helpers::AbiEncoderHelper;
pub use erc20::IERC20;

mod abi_helpers;

mod erc20;
pub mod uniswap3;
pub mod uniswap_periphery;
