/// Commands the UI sends to the wallet session task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletCommand {
    /// Switch chain, request accounts and read the signer.
    Connect,
    /// Forget the active session. The provider keeps its own permission grant.
    Disconnect,
    /// Re-read the balance of the connected address.
    RefreshBalance,
}
