pub use erc20::ERC20StateReader;
pub use uniswapv3::{PoolStateSource, RpcPoolStateSource, Slot0, UniswapV3StateReader};
pub use uniswapv3_quoter::{UniswapV3QuoterV2Encoder, UniswapV3QuoterV2StateReader};

mod erc20;
mod uniswapv3;
mod uniswapv3_quoter;
