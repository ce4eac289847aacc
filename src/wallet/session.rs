use tokio::sync::mpsc;

use crate::common::{SessionEvent, WalletCommand};

use super::error::WalletError;
use super::networks::ChainConfig;
use super::provider::{Signer, WalletProvider};
use super::rpc::format_units;

/// Outcome of a successful connect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub address: String,
    /// `None` when the balance could not be read; the connect still counts.
    pub balance: Option<String>,
}

/// Owns the wallet handle and the currently connected signer.
pub struct WalletSession<W> {
    provider: Option<W>,
    chain: ChainConfig,
    active: Option<Signer>,
}

impl<W: WalletProvider> WalletSession<W> {
    pub fn new(provider: Option<W>, chain: ChainConfig) -> Self {
        Self {
            provider,
            chain,
            active: None,
        }
    }

    pub fn active_address(&self) -> Option<&str> {
        self.active.as_ref().map(|signer| signer.address.as_str())
    }

    /// Switches chain, requests accounts and reads the signer. Leaves the
    /// session untouched on failure.
    pub async fn connect(&mut self) -> Result<Connection, WalletError> {
        let provider = self.provider.as_ref().ok_or(WalletError::ProviderMissing)?;

        provider.request_chain_switch(&self.chain).await?;
        provider.request_accounts().await?;
        let signer = provider
            .get_signer()
            .await?
            .ok_or(WalletError::SignerUnavailable)?;

        let balance = match provider.get_balance(&signer.address).await {
            Ok(amount) => Some(format_units(amount, self.chain.native_currency.decimals)),
            Err(err) => {
                log::warn!("Connected but failed to read balance of {}: {err}", signer.address);
                None
            }
        };

        log::info!("Wallet connected as {} on {}", signer.address, self.chain.chain_name);
        let connection = Connection {
            address: signer.address.clone(),
            balance,
        };
        self.active = Some(signer);
        Ok(connection)
    }

    /// Forgets the signer locally. The wallet's own grant is not revoked.
    pub fn disconnect(&mut self) {
        if let Some(signer) = self.active.take() {
            log::info!("Wallet session for {} closed", signer.address);
        }
    }

    pub async fn refresh_balance(&self) -> Result<String, WalletError> {
        let provider = self.provider.as_ref().ok_or(WalletError::ProviderMissing)?;
        let signer = self.active.as_ref().ok_or(WalletError::SignerUnavailable)?;
        let amount = provider.get_balance(&signer.address).await?;
        Ok(format_units(amount, self.chain.native_currency.decimals))
    }

    /// Serves UI commands one at a time until either channel closes.
    pub async fn run(
        mut self,
        mut command_receiver: mpsc::Receiver<WalletCommand>,
        event_sender: mpsc::Sender<SessionEvent>,
    ) {
        log::info!("Wallet session loop started");

        while let Some(command) = command_receiver.recv().await {
            let event = self.handle_command(command).await;
            if let Err(err) = event_sender.send(event).await {
                log::warn!("UI dropped, stopping wallet session: {err}");
                break;
            }
        }

        match self.active_address() {
            Some(address) => log::info!("Wallet session loop stopped with {address} connected"),
            None => log::info!("Wallet session loop stopped"),
        }
    }

    async fn handle_command(&mut self, command: WalletCommand) -> SessionEvent {
        match command {
            WalletCommand::Connect => match self.connect().await {
                Ok(Connection { address, balance }) => SessionEvent::Connected { address, balance },
                Err(err) => {
                    log::warn!("Wallet connect failed: {err}");
                    SessionEvent::ConnectFailed(err.to_string())
                }
            },
            WalletCommand::Disconnect => {
                self.disconnect();
                SessionEvent::Disconnected
            }
            WalletCommand::RefreshBalance => match self.refresh_balance().await {
                Ok(balance) => SessionEvent::BalanceUpdated(balance),
                Err(err) => {
                    log::warn!("Balance refresh failed: {err}");
                    SessionEvent::BalanceFailed(err.to_string())
                }
            },
        }
    }
}
