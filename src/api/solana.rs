// ============================================================================
// API Client : Solana JSON-RPC
// ============================================================================
// Récupère le solde d'un portefeuille via la méthode `getBalance`
//
// Requête :
//   {"id":1,"jsonrpc":"2.0","method":"getBalance","params":["<adresse>"]}
// Réponse :
//   {"jsonrpc":"2.0","result":{"context":{"slot":1},"value":1500000000},"id":1}
// ============================================================================

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

use crate::models::WalletAddress;

/// Endpoint public du mainnet Solana
pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

// ============================================================================
// Structures JSON-RPC
// ============================================================================

/// Requête JSON-RPC 2.0
#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    id: u64,
    jsonrpc: &'static str,
    method: &'static str,
    params: [&'a str; 1],
}

/// Réponse JSON-RPC : soit `result`, soit `error`
#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<BalanceResult>,
    error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
struct BalanceResult {
    value: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

// ============================================================================
// Client
// ============================================================================

/// Client RPC Solana
///
/// CONCEPT RUST : Réutilisation du client HTTP
/// - reqwest::Client garde un pool de connexions
/// - Cloner le client est peu coûteux (Arc interne)
#[derive(Debug, Clone)]
pub struct SolanaRpc {
    client: reqwest::Client,
    url: String,
}

impl SolanaRpc {
    /// Crée un client pour l'endpoint donné
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("nucleus/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(15))
            .build()
            .context("Échec de la création du client HTTP")?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Récupère le solde (en lamports) d'une adresse
    ///
    /// - `result.value` absent : solde considéré nul
    /// - objet `error` dans la réponse : erreur remontée à l'appelant
    #[instrument(skip(self, address), fields(address = %address.short()))]
    pub async fn get_balance(&self, address: &WalletAddress) -> Result<u64> {
        let request = RpcRequest {
            id: 1,
            jsonrpc: "2.0",
            method: "getBalance",
            params: [address.as_str()],
        };

        debug!(url = %self.url, "Sending getBalance request");
        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .context("Échec de la requête HTTP vers le RPC Solana")?;

        let status = response.status();
        debug!(status = %status, "Received HTTP response");

        if !status.is_success() {
            error!(status = %status, "Solana RPC returned error status");
            anyhow::bail!("Le RPC Solana a retourné une erreur : HTTP {}", status);
        }

        let rpc_response: RpcResponse = response
            .json()
            .await
            .context("Échec du parsing JSON de la réponse RPC")?;

        if let Some(err) = rpc_response.error {
            error!(code = err.code, message = %err.message, "Solana RPC error");
            anyhow::bail!("Erreur RPC {} : {}", err.code, err.message);
        }

        let lamports = match rpc_response.result.and_then(|r| r.value) {
            Some(value) => value,
            None => {
                warn!("getBalance response without result.value, assuming 0");
                0
            }
        };

        info!(lamports, "Balance fetched");
        Ok(lamports)
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEMO_ADDRESS;
    use mockito::Matcher;

    fn demo() -> WalletAddress {
        WalletAddress::parse(DEMO_ADDRESS).unwrap()
    }

    #[tokio::test]
    async fn test_get_balance_sends_json_rpc_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "jsonrpc": "2.0",
                "method": "getBalance",
                "params": [DEMO_ADDRESS],
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"jsonrpc":"2.0","result":{"context":{"slot":42},"value":2500000000},"id":1}"#)
            .create_async()
            .await;

        let rpc = SolanaRpc::new(server.url()).unwrap();
        let lamports = rpc.get_balance(&demo()).await.unwrap();

        assert_eq!(lamports, 2_500_000_000);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_missing_value_is_zero() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(200)
            .with_body(r#"{"jsonrpc":"2.0","result":{"context":{"slot":42}},"id":1}"#)
            .create_async()
            .await;

        let rpc = SolanaRpc::new(server.url()).unwrap();
        assert_eq!(rpc.get_balance(&demo()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_rpc_error_is_reported() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(200)
            .with_body(r#"{"jsonrpc":"2.0","error":{"code":-32602,"message":"Invalid param: WrongSize"},"id":1}"#)
            .create_async()
            .await;

        let rpc = SolanaRpc::new(server.url()).unwrap();
        let err = rpc.get_balance(&demo()).await.unwrap_err();
        assert!(err.to_string().contains("WrongSize"));
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(429)
            .create_async()
            .await;

        let rpc = SolanaRpc::new(server.url()).unwrap();
        assert!(rpc.get_balance(&demo()).await.is_err());
    }
}
