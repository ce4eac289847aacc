pub mod error;
pub mod networks;
pub mod provider;
pub mod rpc;
pub mod session;

pub use networks::{AvailableNetwork, ChainConfig};
pub use rpc::RpcWallet;
pub use session::WalletSession;
