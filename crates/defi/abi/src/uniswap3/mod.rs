pub use factory::IUniswapV3Factory;
pub use pool::IUniswapV3Pool;

mod factory;
mod pool;
