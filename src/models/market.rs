// ============================================================================
// Structure : MarketToken
// ============================================================================
// Une ligne du classement des cryptomonnaies renvoyé par CoinGecko.
// Les champs sont repris tels quels depuis la réponse JSON.
// ============================================================================

use serde::Deserialize;

use crate::models::format::{format_compact, format_price};

/// Un token du marché (endpoint /coins/markets)
///
/// CONCEPT RUST : Option pour les champs nullables
/// - CoinGecko renvoie parfois `null` pour le prix ou la variation
/// - serde mappe `null` (ou un champ absent) sur None
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MarketToken {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub current_price: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub market_cap: Option<f64>,
    pub total_volume: Option<f64>,
}

impl MarketToken {
    /// true si le token est en hausse sur 24h (variation inconnue = hausse)
    pub fn is_up(&self) -> bool {
        self.price_change_percentage_24h
            .map(|c| c >= 0.0)
            .unwrap_or(true)
    }

    /// Prix formaté : "$64,250.00", "$0.1235" ou "N/A"
    pub fn price_label(&self) -> String {
        self.current_price
            .map(|p| format!("${}", format_price(p)))
            .unwrap_or_else(|| "N/A".to_string())
    }

    /// Variation formatée en valeur absolue, la flèche porte le signe
    pub fn change_label(&self) -> String {
        match self.price_change_percentage_24h {
            Some(change) => {
                let arrow = if change >= 0.0 { "▲" } else { "▼" };
                format!("{} {:.2}%", arrow, change.abs())
            }
            None => "–".to_string(),
        }
    }

    pub fn market_cap_label(&self) -> String {
        self.market_cap
            .map(|m| format!("${}", format_compact(m)))
            .unwrap_or_default()
    }
}

/// Filtre les tokens selon la recherche de l'utilisateur
///
/// - Recherche vide : tous les tokens
/// - Sinon : sous-chaîne insensible à la casse sur le nom OU le symbole
///
/// CONCEPT RUST : Lifetimes implicites
/// - Le Vec retourné emprunte les tokens de la slice d'entrée
pub fn filter_tokens<'a>(tokens: &'a [MarketToken], query: &str) -> Vec<&'a MarketToken> {
    let query = query.trim().to_lowercase();

    if query.is_empty() {
        return tokens.iter().collect();
    }

    tokens
        .iter()
        .filter(|t| {
            t.name.to_lowercase().contains(&query) || t.symbol.to_lowercase().contains(&query)
        })
        .collect()
}

#[cfg(test)]
pub(crate) fn sample_token(id: &str, symbol: &str, name: &str, price: f64, change: f64) -> MarketToken {
    MarketToken {
        id: id.to_string(),
        symbol: symbol.to_string(),
        name: name.to_string(),
        image: String::new(),
        current_price: Some(price),
        price_change_percentage_24h: Some(change),
        market_cap: Some(price * 1_000_000.0),
        total_volume: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market() -> Vec<MarketToken> {
        vec![
            sample_token("bitcoin", "btc", "Bitcoin", 64250.0, 1.5),
            sample_token("ethereum", "eth", "Ethereum", 3120.4, -0.8),
            sample_token("solana", "sol", "Solana", 145.2, 4.1),
            sample_token("wrapped-bitcoin", "wbtc", "Wrapped Bitcoin", 64100.0, 1.4),
        ]
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let tokens = market();
        assert_eq!(filter_tokens(&tokens, "").len(), 4);
        assert_eq!(filter_tokens(&tokens, "   ").len(), 4);
    }

    #[test]
    fn test_filter_by_name_case_insensitive() {
        let tokens = market();
        let found = filter_tokens(&tokens, "BITCOIN");
        let ids: Vec<&str> = found.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["bitcoin", "wrapped-bitcoin"]);
    }

    #[test]
    fn test_filter_by_symbol() {
        let tokens = market();
        let found = filter_tokens(&tokens, "sol");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Solana");
    }

    #[test]
    fn test_filter_no_match() {
        let tokens = market();
        assert!(filter_tokens(&tokens, "dogecoin").is_empty());
    }

    #[test]
    fn test_labels() {
        let tokens = market();
        assert_eq!(tokens[0].price_label(), "$64,250.00");
        assert_eq!(tokens[1].change_label(), "▼ 0.80%");
        assert!(!tokens[1].is_up());
        assert!(tokens[2].is_up());
    }

    #[test]
    fn test_deserialize_with_nulls() {
        let json = r#"{
            "id": "new-coin",
            "symbol": "new",
            "name": "New Coin",
            "image": "https://example.com/new.png",
            "current_price": null,
            "price_change_percentage_24h": null,
            "market_cap": 1000,
            "total_volume": 50
        }"#;

        let token: MarketToken = serde_json::from_str(json).unwrap();
        assert_eq!(token.current_price, None);
        assert_eq!(token.price_label(), "N/A");
        assert!(token.is_up());
    }
}
