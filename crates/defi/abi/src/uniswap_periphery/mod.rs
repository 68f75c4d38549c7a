pub use position_manager::INonfungiblePositionManager;
pub use quoter::IQuoterV2;
pub use swap_router::ISwapRouter02;

mod position_manager;
mod quoter;
mod swap_router;
