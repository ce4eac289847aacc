use super::types::Message;

/// Events the wallet session (and, later, a message transport) report to the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Connected {
        address: String,
        balance: Option<String>,
    },
    /// Raw error text, shown to the user as is.
    ConnectFailed(String),
    Disconnected,
    BalanceUpdated(String),
    BalanceFailed(String),
    /// Delivered by a message transport; none is wired up yet.
    #[cfg_attr(not(test), allow(dead_code))]
    MessageReceived(Message),
}
