use serde::{Deserialize, Serialize};

/// Networks the client knows how to ask the wallet to switch to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AvailableNetwork {
    #[default]
    Fuji,
    Avalanche,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// Payload of `wallet_addEthereumChain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfig {
    /// 0x-prefixed hex chain id.
    pub chain_id: String,
    pub chain_name: String,
    pub native_currency: NativeCurrency,
    pub rpc_urls: Vec<String>,
    pub block_explorer_urls: Vec<String>,
}

fn avax() -> NativeCurrency {
    NativeCurrency {
        name: "Avalanche".to_string(),
        symbol: "AVAX".to_string(),
        decimals: 18,
    }
}

impl AvailableNetwork {
    pub fn chain_config(self) -> ChainConfig {
        match self {
            AvailableNetwork::Fuji => ChainConfig {
                chain_id: format!("{:#x}", 43113),
                chain_name: "Avalanche Fuji Testnet".to_string(),
                native_currency: avax(),
                rpc_urls: vec!["https://api.avax-test.network/ext/bc/C/rpc".to_string()],
                block_explorer_urls: vec!["https://testnet.snowtrace.io/".to_string()],
            },
            AvailableNetwork::Avalanche => ChainConfig {
                chain_id: format!("{:#x}", 43114),
                chain_name: "Avalanche C-Chain".to_string(),
                native_currency: avax(),
                rpc_urls: vec!["https://api.avax.network/ext/bc/C/rpc".to_string()],
                block_explorer_urls: vec!["https://snowtrace.io/".to_string()],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuji_payload_shape() {
        let json = serde_json::to_value(AvailableNetwork::Fuji.chain_config()).unwrap();
        assert_eq!(json["chainId"], "0xa869");
        assert_eq!(json["nativeCurrency"]["symbol"], "AVAX");
        assert_eq!(json["nativeCurrency"]["decimals"], 18);
        assert!(json["rpcUrls"].is_array());
        assert!(json["blockExplorerUrls"].is_array());
    }

    #[test]
    fn mainnet_chain_id() {
        assert_eq!(AvailableNetwork::Avalanche.chain_config().chain_id, "0xa86a");
    }

    #[test]
    fn parses_lowercase_names() {
        let network: AvailableNetwork = serde_json::from_str("\"avalanche\"").unwrap();
        assert_eq!(network, AvailableNetwork::Avalanche);
    }
}
