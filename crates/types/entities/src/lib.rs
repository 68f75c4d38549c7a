pub use fee_amount::FeeAmount;
pub use network::NetworkIdentity;
pub use pool_snapshot::PoolSnapshot;
pub use position::Position;
pub use swap_direction::{SwapDirection, SwapRoute};
pub use token::Token;
pub use tx_intent::TxIntent;

mod fee_amount;
mod network;
mod pool_snapshot;
mod position;
mod swap_direction;
mod token;
mod tx_intent;
