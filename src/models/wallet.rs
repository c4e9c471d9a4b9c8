// ============================================================================
// Structures : WalletAddress et Portfolio
// ============================================================================
// Adresse du portefeuille suivi et valeurs affichées sur le dashboard.
//
// CONCEPTS RUST :
// 1. Newtype pattern : WalletAddress enveloppe une String validée
// 2. Constructeur faillible : parse() retourne Result
// 3. Méthodes dérivées : la valeur nette est calculée, jamais stockée
// ============================================================================

use std::fmt;

use anyhow::{bail, Result};

/// Longueur minimale d'une adresse acceptée à l'onboarding
pub const MIN_ADDRESS_LEN: usize = 32;

/// Portefeuille de démonstration proposé aux nouveaux utilisateurs
pub const DEMO_ADDRESS: &str = "9B5XszUGdMaxCZ7uSQhPzdks5ZQSmWxrmzCSvtJ6Ns6g";

/// Nombre de lamports dans un SOL
pub const LAMPORTS_PER_SOL: f64 = 1_000_000_000.0;

/// Adresse publique d'un compte Solana, saisie par l'utilisateur
///
/// CONCEPT RUST : Newtype
/// - Une fois construite, l'adresse est garantie valide
/// - Impossible de passer une String quelconque là où une adresse est attendue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletAddress(String);

impl WalletAddress {
    /// Valide et construit une adresse
    ///
    /// Les espaces autour sont ignorés (cas du copier-coller).
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();

        if trimmed.chars().count() < MIN_ADDRESS_LEN {
            bail!(
                "Adresse trop courte : {} caractères (minimum {})",
                trimmed.chars().count(),
                MIN_ADDRESS_LEN
            );
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Indique si une saisie en cours est acceptable (bouton "Launch" actif)
    pub fn is_acceptable(raw: &str) -> bool {
        raw.trim().chars().count() >= MIN_ADDRESS_LEN
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Forme courte pour l'affichage : "9B5X...Ns6g"
    pub fn short(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        let head: String = chars.iter().take(4).collect();
        let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Convertit des lamports en SOL
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL
}

/// Salutation affichée en haut du dashboard selon l'heure locale
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good Morning",
        12..=16 => "Good Afternoon",
        _ => "Good Evening",
    }
}

/// Valeurs du portefeuille affichées sur le dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Portfolio {
    /// Solde en SOL
    pub balance_sol: f64,

    /// Prix spot du SOL en USD
    pub price_usd: f64,

    /// Variation du prix sur 24h en pourcentage (si l'API la fournit)
    pub change_24h: Option<f64>,
}

impl Portfolio {
    pub fn new(balance_sol: f64, price_usd: f64, change_24h: Option<f64>) -> Self {
        Self {
            balance_sol,
            price_usd,
            change_24h,
        }
    }

    /// Valeur nette = solde × prix
    pub fn net_worth(&self) -> f64 {
        self.balance_sol * self.price_usd
    }

    /// Valeur nette arrondie à 2 décimales, séparée en (entier, décimales)
    ///
    /// Le dashboard affiche les deux parties avec des styles différents.
    pub fn net_worth_parts(&self) -> (String, String) {
        let fixed = format!("{:.2}", self.net_worth());
        match fixed.split_once('.') {
            Some((whole, decimals)) => (whole.to_string(), decimals.to_string()),
            None => (fixed, "00".to_string()),
        }
    }

    /// true si la variation 24h est positive ou inconnue
    pub fn is_up(&self) -> bool {
        self.change_24h.map(|c| c >= 0.0).unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_short_address() {
        assert!(WalletAddress::parse("abc").is_err());
        assert!(WalletAddress::parse(&"x".repeat(31)).is_err());
        assert!(WalletAddress::parse(&"x".repeat(32)).is_ok());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let address = WalletAddress::parse(&format!("  {}\n", DEMO_ADDRESS)).unwrap();
        assert_eq!(address.as_str(), DEMO_ADDRESS);
    }

    #[test]
    fn test_short_address() {
        let address = WalletAddress::parse(DEMO_ADDRESS).unwrap();
        assert_eq!(address.short(), "9B5X...Ns6g");
    }

    #[test]
    fn test_lamports_to_sol() {
        assert_eq!(lamports_to_sol(0), 0.0);
        assert_eq!(lamports_to_sol(1_500_000_000), 1.5);
    }

    #[test]
    fn test_greeting_for_hour() {
        assert_eq!(greeting_for_hour(0), "Good Morning");
        assert_eq!(greeting_for_hour(11), "Good Morning");
        assert_eq!(greeting_for_hour(12), "Good Afternoon");
        assert_eq!(greeting_for_hour(16), "Good Afternoon");
        assert_eq!(greeting_for_hour(17), "Good Evening");
        assert_eq!(greeting_for_hour(23), "Good Evening");
    }

    #[test]
    fn test_net_worth_is_balance_times_price() {
        let portfolio = Portfolio::new(2.5, 146.0, Some(1.2));
        assert_eq!(portfolio.net_worth(), 365.0);
        assert_eq!(
            portfolio.net_worth_parts(),
            ("365".to_string(), "00".to_string())
        );
    }

    #[test]
    fn test_net_worth_parts_rounding() {
        let portfolio = Portfolio::new(1.23456, 10.0, None);
        assert_eq!(
            portfolio.net_worth_parts(),
            ("12".to_string(), "35".to_string())
        );
        assert!(portfolio.is_up());
    }

    #[test]
    fn test_empty_portfolio() {
        let portfolio = Portfolio::default();
        assert_eq!(
            portfolio.net_worth_parts(),
            ("0".to_string(), "00".to_string())
        );
    }
}
