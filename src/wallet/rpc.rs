use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::Client as HttpClient;
use reqwest::StatusCode;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Value, json};

use super::error::WalletError;
use super::networks::ChainConfig;
use super::provider::{Signer, WalletProvider};

#[derive(Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Deserialize)]
struct RpcResponse {
    /// `Some(Value::Null)` for an explicit `"result": null`, `None` when absent.
    #[serde(default, deserialize_with = "present")]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

#[derive(Deserialize)]
struct RpcErrorObject {
    #[serde(default)]
    code: i64,
    message: String,
}

/// Wallet reached through an EIP-1193 style JSON-RPC bridge over HTTP.
pub struct RpcWallet {
    http: HttpClient,
    endpoint: String,
    next_id: AtomicU64,
}

impl RpcWallet {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            endpoint: endpoint.into(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Returns a wallet only when a bridge endpoint is configured.
    pub fn detect(endpoint: Option<&str>) -> Option<Self> {
        endpoint
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(Self::new)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn call(&self, method: &str, params: Value) -> Result<Value, WalletError> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method,
            params,
        };
        log::debug!("wallet rpc -> {method}");

        let resp = self.http.post(&self.endpoint).json(&request).send().await?;
        let status = resp.status();
        let body = match resp.json::<RpcResponse>().await {
            Ok(body) => body,
            Err(_) if !status.is_success() => {
                return Err(WalletError::Transport(format!("HTTP {status}")));
            }
            Err(err) => return Err(err.into()),
        };

        decode_response(status, body)
    }
}

/// A JSON-RPC error object wins over the HTTP status; otherwise a non-2xx
/// status or an envelope without `result` is a transport failure.
fn decode_response(status: StatusCode, body: RpcResponse) -> Result<Value, WalletError> {
    if let Some(error) = body.error {
        log::debug!("wallet rpc error {}: {}", error.code, error.message);
        return Err(WalletError::Rejected(error.message));
    }
    if !status.is_success() {
        return Err(WalletError::Transport(format!("HTTP {status}")));
    }
    body.result.ok_or_else(|| {
        WalletError::Transport("Malformed wallet response: missing result".to_string())
    })
}

/// Parses a JSON-RPC hex quantity such as `0x1bc16d674ec80000`.
pub fn parse_quantity(value: &str) -> Result<u128, WalletError> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    if digits.is_empty() {
        return Ok(0);
    }
    u128::from_str_radix(digits, 16)
        .map_err(|_| WalletError::Transport(format!("Invalid quantity `{value}`")))
}

/// Renders `amount` smallest units as a decimal with `decimals` places,
/// trailing zeros dropped.
pub fn format_units(amount: u128, decimals: u8) -> String {
    let Some(scale) = 10u128.checked_pow(u32::from(decimals)) else {
        return amount.to_string();
    };
    let whole = amount / scale;
    let fraction = amount % scale;
    if fraction == 0 {
        return whole.to_string();
    }

    let fraction = format!("{:0width$}", fraction, width = usize::from(decimals));
    format!("{whole}.{}", fraction.trim_end_matches('0'))
}

impl WalletProvider for RpcWallet {
    async fn request_chain_switch(&self, chain: &ChainConfig) -> Result<(), WalletError> {
        self.call("wallet_addEthereumChain", json!([chain])).await?;
        Ok(())
    }

    async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
        let accounts = self.call("eth_requestAccounts", json!([])).await?;
        Ok(serde_json::from_value(accounts)?)
    }

    async fn get_signer(&self) -> Result<Option<Signer>, WalletError> {
        let accounts: Vec<String> = serde_json::from_value(self.call("eth_accounts", json!([])).await?)?;
        Ok(accounts
            .into_iter()
            .next()
            .map(|address| Signer { address }))
    }

    async fn get_balance(&self, address: &str) -> Result<u128, WalletError> {
        let balance = self
            .call("eth_getBalance", json!([address, "latest"]))
            .await?;
        match balance.as_str() {
            Some(quantity) => parse_quantity(quantity),
            None => Err(WalletError::Transport(format!(
                "Unexpected balance value {balance}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;
    use crate::wallet::networks::AvailableNetwork;

    #[test]
    fn detect_requires_endpoint() {
        assert!(RpcWallet::detect(None).is_none());
        assert!(RpcWallet::detect(Some("   ")).is_none());
        let wallet = RpcWallet::detect(Some(" http://127.0.0.1:8545 ")).unwrap();
        assert_eq!(wallet.endpoint(), "http://127.0.0.1:8545");
    }

    #[test]
    fn error_object_becomes_rejection() {
        let body: RpcResponse = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": { "code": 4001, "message": "User rejected the request" }
        }))
        .unwrap();
        assert_eq!(
            decode_response(StatusCode::OK, body),
            Err(WalletError::Rejected("User rejected the request".into()))
        );
    }

    #[test]
    fn null_result_is_success() {
        let body: RpcResponse =
            serde_json::from_value(json!({ "jsonrpc": "2.0", "id": 1, "result": null })).unwrap();
        assert_eq!(decode_response(StatusCode::OK, body), Ok(Value::Null));
    }

    #[test]
    fn missing_result_is_malformed() {
        let body: RpcResponse = serde_json::from_value(json!({ "jsonrpc": "2.0", "id": 1 })).unwrap();
        assert!(matches!(
            decode_response(StatusCode::OK, body),
            Err(WalletError::Transport(_))
        ));
    }

    #[test]
    fn error_status_without_error_object_fails() {
        let body: RpcResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(
            decode_response(StatusCode::INTERNAL_SERVER_ERROR, body),
            Err(WalletError::Transport("HTTP 500 Internal Server Error".into()))
        );
    }

    /// Answers a single HTTP request with `status` and `body`, returns the URL.
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let read = socket.read(&mut chunk).await.unwrap();
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..read]);
                if request_complete(&request) {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{addr}")
    }

    fn request_complete(request: &[u8]) -> bool {
        let text = String::from_utf8_lossy(request);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        request.len() >= header_end + 4 + content_length
    }

    #[tokio::test]
    async fn chain_switch_fails_on_http_error() {
        let url = serve_once("500 Internal Server Error", "{}").await;
        let wallet = RpcWallet::new(url);

        let result = wallet
            .request_chain_switch(&AvailableNetwork::Fuji.chain_config())
            .await;
        assert_eq!(
            result,
            Err(WalletError::Transport("HTTP 500 Internal Server Error".into()))
        );
    }

    #[tokio::test]
    async fn chain_switch_rejection_survives_error_status() {
        let url = serve_once(
            "400 Bad Request",
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":4902,"message":"Unrecognized chain ID"}}"#,
        )
        .await;
        let wallet = RpcWallet::new(url);

        let result = wallet
            .request_chain_switch(&AvailableNetwork::Fuji.chain_config())
            .await;
        assert_eq!(result, Err(WalletError::Rejected("Unrecognized chain ID".into())));
    }

    #[tokio::test]
    async fn chain_switch_accepts_null_result() {
        let url = serve_once("200 OK", r#"{"jsonrpc":"2.0","id":1,"result":null}"#).await;
        let wallet = RpcWallet::new(url);

        let result = wallet
            .request_chain_switch(&AvailableNetwork::Fuji.chain_config())
            .await;
        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn empty_envelope_is_not_a_success() {
        let url = serve_once("200 OK", "{}").await;
        let wallet = RpcWallet::new(url);

        assert!(matches!(
            wallet.request_accounts().await,
            Err(WalletError::Transport(_))
        ));
    }

    #[test]
    fn request_envelope() {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: 7,
            method: "eth_requestAccounts",
            params: json!([]),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "jsonrpc": "2.0", "id": 7, "method": "eth_requestAccounts", "params": [] })
        );
    }

    #[test]
    fn parses_hex_quantities() {
        assert_eq!(parse_quantity("0x0"), Ok(0));
        assert_eq!(parse_quantity("0x"), Ok(0));
        assert_eq!(parse_quantity("0x1bc16d674ec80000"), Ok(2_000_000_000_000_000_000));
        assert!(parse_quantity("0xzz").is_err());
    }

    #[test]
    fn formats_units() {
        assert_eq!(format_units(0, 18), "0");
        assert_eq!(format_units(2_000_000_000_000_000_000, 18), "2");
        assert_eq!(format_units(1_500_000_000_000_000_000, 18), "1.5");
        assert_eq!(format_units(1, 18), "0.000000000000000001");
        assert_eq!(format_units(1234, 0), "1234");
    }
}
