mod common;
mod config;
mod store;
mod ui;
mod wallet;

use clap::Parser;
use dotenvy::dotenv;
use tokio::sync::mpsc;
use ui::ChatApp;
use wallet::{AvailableNetwork, RpcWallet, WalletSession};

use crate::config::AppConfig;

#[derive(Parser)]
#[command(
    name = "quilt_chat",
    version,
    about = "Wallet-authenticated chat client"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// JSON-RPC endpoint of the wallet bridge
    #[arg(long, value_name = "URL")]
    wallet_url: Option<String>,
    /// Network to switch the wallet to
    #[arg(long, value_enum)]
    network: Option<AvailableNetwork>,
    /// Do not try to connect the wallet at startup
    #[arg(long)]
    no_auto_connect: bool,
}

impl Cli {
    fn resolve_config(&self) -> AppConfig {
        let mut app_config = config::load_config(&self.config)
            .apply_env(std::env::var(config::WALLET_URL_ENV).ok());

        if let Some(url) = &self.wallet_url {
            app_config.wallet_url = Some(url.clone());
        }
        if let Some(network) = self.network {
            app_config.network = network;
        }
        if self.no_auto_connect {
            app_config.auto_connect = false;
        }
        app_config
    }
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    env_logger::init();

    let app_config = Cli::parse().resolve_config();
    run_client(app_config).await
}

async fn run_client(app_config: AppConfig) -> Result<(), eframe::Error> {
    // UI -> wallet session
    let (cmd_tx, cmd_rx) = mpsc::channel(16);
    // wallet session -> UI
    let (event_tx, event_rx) = mpsc::channel(16);

    let provider = RpcWallet::detect(app_config.wallet_url.as_deref());
    match &provider {
        Some(wallet) => log::info!("Using wallet bridge at {}", wallet.endpoint()),
        None => log::warn!("No wallet bridge configured; connect will fail"),
    }

    let session = WalletSession::new(provider, app_config.chain());
    tokio::spawn(session.run(cmd_rx, event_tx));

    let options = eframe::NativeOptions::default();
    let mut event_rx = Some(event_rx);

    eframe::run_native(
        "Quilt",
        options,
        Box::new(move |cc| {
            let event_receiver = event_rx
                .take()
                .expect("ChatApp should only be initialized once");

            log::info!("Client started on {}", app_config.chain().chain_name);

            Ok(Box::new(ChatApp::new(
                cc,
                &app_config,
                cmd_tx.clone(),
                event_receiver,
            )))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags_override_file_config() {
        let cli = Cli::parse_from([
            "quilt_chat",
            "--config",
            "missing/config.json",
            "--wallet-url",
            "http://127.0.0.1:8545",
            "--network",
            "avalanche",
            "--no-auto-connect",
        ]);
        let config = cli.resolve_config();

        assert_eq!(config.wallet_url.as_deref(), Some("http://127.0.0.1:8545"));
        assert_eq!(config.network, AvailableNetwork::Avalanche);
        assert!(!config.auto_connect);
    }

    #[test]
    fn defaults_without_flags() {
        let cli = Cli::parse_from(["quilt_chat", "--config", "missing/config.json"]);
        assert_eq!(cli.config, "missing/config.json");
        assert!(cli.network.is_none());
        assert!(!cli.no_auto_connect);
    }
}
