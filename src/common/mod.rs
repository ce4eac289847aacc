pub mod commands;
pub mod events;
pub mod types;

pub use commands::WalletCommand;
pub use events::SessionEvent;
pub use types::Message;
