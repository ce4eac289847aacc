use std::future::Future;

use super::error::WalletError;
use super::networks::ChainConfig;

/// The connected account as reported by the wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signer {
    pub address: String,
}

/// Capability surface of a wallet. The session only ever talks to this.
pub trait WalletProvider: Send + Sync + 'static {
    fn request_chain_switch(
        &self,
        chain: &ChainConfig,
    ) -> impl Future<Output = Result<(), WalletError>> + Send;

    /// Asks the user to authorize account access.
    fn request_accounts(&self) -> impl Future<Output = Result<Vec<String>, WalletError>> + Send;

    /// `None` when the wallet has no authorized account to sign with.
    fn get_signer(&self) -> impl Future<Output = Result<Option<Signer>, WalletError>> + Send;

    /// Balance in the chain's smallest unit.
    fn get_balance(&self, address: &str) -> impl Future<Output = Result<u128, WalletError>> + Send;
}
