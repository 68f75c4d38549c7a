pub use position_builder::{MintCall, PositionBuilder, PositionPlan};
pub use resolver::{initial_sqrt_price_x96, PoolFactory, PoolResolution, PoolResolver, UniswapV3FactoryClient};
pub use swap_builder::SwapBuilder;

mod position_builder;
mod resolver;
pub mod state_readers;
mod swap_builder;
