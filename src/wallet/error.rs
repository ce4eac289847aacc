use thiserror::Error;

/// Everything that can go wrong between the client and the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("Cannot find wallet provider")]
    ProviderMissing,
    /// The wallet refused the request; carries its message untouched.
    #[error("{0}")]
    Rejected(String),
    #[error("Wallet is not connected")]
    SignerUnavailable,
    #[error("{0}")]
    Transport(String),
}

impl From<reqwest::Error> for WalletError {
    fn from(err: reqwest::Error) -> Self {
        WalletError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        WalletError::Transport(format!("Malformed wallet response: {err}"))
    }
}
