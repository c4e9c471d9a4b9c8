// ============================================================================
// API Client : CoinGecko
// ============================================================================
// Deux endpoints publics (offre gratuite) :
// - /simple/price   : prix spot du SOL en USD (+ variation 24h)
// - /coins/markets  : classement des cryptomonnaies par capitalisation
// ============================================================================

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, error, info, instrument};

use crate::models::MarketToken;

/// Base de l'API publique CoinGecko v3
pub const DEFAULT_PRICE_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Nombre de tokens demandés par défaut pour l'écran Market
pub const DEFAULT_MARKET_SIZE: u32 = 50;

// ============================================================================
// Structures pour parser la réponse JSON
// ============================================================================

/// Réponse de /simple/price?ids=solana : {"solana":{"usd":145.2,"usd_24h_change":2.4}}
#[derive(Debug, Deserialize)]
struct SimplePriceResponse {
    solana: Option<UsdQuote>,
}

#[derive(Debug, Deserialize)]
struct UsdQuote {
    usd: f64,
    usd_24h_change: Option<f64>,
}

/// Prix spot d'un actif
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotPrice {
    pub usd: f64,
    pub change_24h: Option<f64>,
}

// ============================================================================
// Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct CoinGecko {
    client: reqwest::Client,
    base_url: String,
}

impl CoinGecko {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("nucleus/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(15))
            .build()
            .context("Échec de la création du client HTTP")?;

        // Évite les doubles slashes lors de la construction des URLs
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Récupère le prix spot du SOL en USD
    #[instrument(skip(self))]
    pub async fn sol_price(&self) -> Result<SpotPrice> {
        let url = format!(
            "{}/simple/price?ids=solana&vs_currencies=usd&include_24hr_change=true",
            self.base_url
        );

        let response: SimplePriceResponse = self.get_json(&url).await?;

        let quote = response
            .solana
            .context("Prix du SOL absent de la réponse CoinGecko")?;

        info!(usd = quote.usd, change_24h = ?quote.usd_24h_change, "SOL price fetched");
        Ok(SpotPrice {
            usd: quote.usd,
            change_24h: quote.usd_24h_change,
        })
    }

    /// Récupère les `per_page` premiers tokens par capitalisation
    ///
    /// Une réponse qui n'est pas un tableau JSON (ex : objet d'erreur
    /// du rate limiting) est une erreur.
    #[instrument(skip(self))]
    pub async fn markets(&self, per_page: u32) -> Result<Vec<MarketToken>> {
        let url = format!(
            "{}/coins/markets?vs_currency=usd&order=market_cap_desc&per_page={}&page=1&sparkline=false&price_change_percentage=24h",
            self.base_url, per_page
        );

        let tokens: Vec<MarketToken> = self.get_json(&url).await?;

        info!(count = tokens.len(), "Market data fetched");
        Ok(tokens)
    }

    /// GET + vérification du statut + parsing JSON
    ///
    /// CONCEPT RUST : Générique avec trait bound
    /// - T: DeserializeOwned : tout type désérialisable sans emprunt
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url = %url, "Sending HTTP request to CoinGecko");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Échec de la requête HTTP vers CoinGecko")?;

        let status = response.status();
        debug!(status = %status, "Received HTTP response");

        if !status.is_success() {
            error!(status = %status, "CoinGecko returned error status");
            anyhow::bail!("CoinGecko a retourné une erreur : HTTP {}", status);
        }

        response
            .json()
            .await
            .context("Échec du parsing JSON de la réponse CoinGecko")
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_sol_price() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/simple/price")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("ids".into(), "solana".into()),
                Matcher::UrlEncoded("vs_currencies".into(), "usd".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"solana":{"usd":145.2,"usd_24h_change":2.41}}"#)
            .create_async()
            .await;

        let api = CoinGecko::new(format!("{}/", server.url())).unwrap();
        let price = api.sol_price().await.unwrap();

        assert_eq!(price.usd, 145.2);
        assert_eq!(price.change_24h, Some(2.41));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_sol_price_missing_asset() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/simple/price")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let api = CoinGecko::new(server.url()).unwrap();
        assert!(api.sol_price().await.is_err());
    }

    #[tokio::test]
    async fn test_markets() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/coins/markets")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("vs_currency".into(), "usd".into()),
                Matcher::UrlEncoded("order".into(), "market_cap_desc".into()),
                Matcher::UrlEncoded("per_page".into(), "2".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"[
                {"id":"bitcoin","symbol":"btc","name":"Bitcoin","image":"https://img/btc.png",
                 "current_price":64250.0,"price_change_percentage_24h":1.52,
                 "market_cap":1265000000000,"total_volume":31000000000},
                {"id":"ethereum","symbol":"eth","name":"Ethereum","image":"https://img/eth.png",
                 "current_price":3120.4,"price_change_percentage_24h":-0.8,
                 "market_cap":375000000000,"total_volume":15000000000}
            ]"#,
            )
            .create_async()
            .await;

        let api = CoinGecko::new(server.url()).unwrap();
        let tokens = api.markets(2).await.unwrap();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].symbol, "btc");
        assert_eq!(tokens[1].price_change_percentage_24h, Some(-0.8));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_markets_rejects_non_array() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/coins/markets")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"status":{"error_code":429,"error_message":"rate limited"}}"#)
            .create_async()
            .await;

        let api = CoinGecko::new(server.url()).unwrap();
        assert!(api.markets(50).await.is_err());
    }

    #[tokio::test]
    async fn test_markets_http_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/coins/markets")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let api = CoinGecko::new(server.url()).unwrap();
        assert!(api.markets(50).await.is_err());
    }
}
