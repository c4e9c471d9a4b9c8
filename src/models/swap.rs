// ============================================================================
// Simulateur de swap SOL <-> USDC
// ============================================================================
// Aucun échange réel : le taux est fixe et la "cotation" est simulée.
//
// CONCEPTS RUST :
// 1. Enum pour la direction du swap (deux états, flip())
// 2. State machine pour la cotation : Idle -> Debouncing -> Loading -> Idle
// 3. Le temps est passé en paramètre (Instant) : logique testable sans sleep
// ============================================================================

use std::fmt;
use std::time::{Duration, Instant};

/// 1 SOL ≈ 145.20 USDC
pub const SOL_TO_USDC_RATE: f64 = 145.2;

/// 1 USDC ≈ 0.0069 SOL
pub const USDC_TO_SOL_RATE: f64 = 0.0069;

/// Solde fictif affiché dans le badge "Max"
pub const MOCK_SOL_BALANCE: f64 = 125.45;

/// Délai sans frappe avant de demander une cotation
pub const QUOTE_DEBOUNCE: Duration = Duration::from_millis(500);

/// Latence simulée de la cotation
pub const QUOTE_LATENCY: Duration = Duration::from_millis(500);

/// Tokens échangeables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapToken {
    Sol,
    Usdc,
}

impl SwapToken {
    pub fn symbol(&self) -> &'static str {
        match self {
            SwapToken::Sol => "SOL",
            SwapToken::Usdc => "USDC",
        }
    }

    /// Valeur approximative d'une unité en USD
    pub fn usd_value(&self) -> f64 {
        match self {
            SwapToken::Sol => SOL_TO_USDC_RATE,
            SwapToken::Usdc => 1.0,
        }
    }
}

impl fmt::Display for SwapToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Sens du swap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwapDirection {
    /// On paie en SOL, on reçoit des USDC
    #[default]
    SolToUsdc,

    /// On paie en USDC, on reçoit des SOL
    UsdcToSol,
}

impl SwapDirection {
    pub fn pay_token(&self) -> SwapToken {
        match self {
            SwapDirection::SolToUsdc => SwapToken::Sol,
            SwapDirection::UsdcToSol => SwapToken::Usdc,
        }
    }

    pub fn receive_token(&self) -> SwapToken {
        match self {
            SwapDirection::SolToUsdc => SwapToken::Usdc,
            SwapDirection::UsdcToSol => SwapToken::Sol,
        }
    }

    /// Taux appliqué au montant payé
    pub fn rate(&self) -> f64 {
        match self {
            SwapDirection::SolToUsdc => SOL_TO_USDC_RATE,
            SwapDirection::UsdcToSol => USDC_TO_SOL_RATE,
        }
    }

    pub fn flip(&self) -> Self {
        match self {
            SwapDirection::SolToUsdc => SwapDirection::UsdcToSol,
            SwapDirection::UsdcToSol => SwapDirection::SolToUsdc,
        }
    }
}

/// Calcule le montant reçu pour une saisie donnée
///
/// Retourne None si la saisie est vide, invalide, ou ≤ 0.
/// Le résultat est formaté avec une seule décimale.
pub fn quote(pay_amount: &str, direction: SwapDirection) -> Option<String> {
    let amount: f64 = pay_amount.trim().parse().ok()?;

    if !amount.is_finite() || amount <= 0.0 {
        return None;
    }

    Some(format!("{:.1}", amount * direction.rate()))
}

/// État de la cotation en cours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    Idle,
    Debouncing { since: Instant },
    Loading { since: Instant },
}

/// Formulaire de swap
#[derive(Debug, Clone)]
pub struct SwapForm {
    direction: SwapDirection,
    pay_amount: String,
    receive_amount: String,
    state: QuoteState,
}

impl SwapForm {
    pub fn new() -> Self {
        Self {
            direction: SwapDirection::default(),
            pay_amount: String::new(),
            receive_amount: String::new(),
            state: QuoteState::Idle,
        }
    }

    pub fn direction(&self) -> SwapDirection {
        self.direction
    }

    pub fn pay_amount(&self) -> &str {
        &self.pay_amount
    }

    pub fn receive_amount(&self) -> &str {
        &self.receive_amount
    }

    /// true pendant la latence simulée (affiche un indicateur de chargement)
    pub fn is_loading_quote(&self) -> bool {
        matches!(self.state, QuoteState::Loading { .. })
    }

    /// true tant qu'une cotation est attendue (debounce ou chargement)
    pub fn is_quote_pending(&self) -> bool {
        self.state != QuoteState::Idle
    }

    /// Ajoute un caractère à la saisie du montant payé
    ///
    /// Seuls les chiffres et un unique séparateur décimal sont acceptés.
    /// Retourne false si le caractère a été ignoré.
    pub fn push_char(&mut self, c: char, now: Instant) -> bool {
        let accepted = match c {
            '0'..='9' => true,
            '.' | ',' => !self.pay_amount.contains('.'),
            _ => false,
        };

        if !accepted {
            return false;
        }

        self.pay_amount.push(if c == ',' { '.' } else { c });
        self.schedule_quote(now);
        true
    }

    /// Supprime le dernier caractère saisi
    pub fn backspace(&mut self, now: Instant) {
        if self.pay_amount.pop().is_some() {
            self.schedule_quote(now);
        }
    }

    /// Vide la saisie
    pub fn clear(&mut self, now: Instant) {
        self.pay_amount.clear();
        self.schedule_quote(now);
    }

    /// Remplit le montant payé avec le solde maximum (SOL uniquement)
    pub fn fill_max(&mut self, max_balance: Option<f64>, now: Instant) -> bool {
        match (self.direction, max_balance) {
            (SwapDirection::SolToUsdc, Some(max)) => {
                self.pay_amount = format!("{:.2}", max);
                self.schedule_quote(now);
                true
            }
            _ => false,
        }
    }

    /// Inverse le sens du swap
    ///
    /// Les montants payé et reçu sont échangés, puis une nouvelle
    /// cotation est programmée pour le nouveau montant payé.
    pub fn flip(&mut self, now: Instant) {
        self.direction = self.direction.flip();
        std::mem::swap(&mut self.pay_amount, &mut self.receive_amount);
        self.schedule_quote(now);
    }

    /// Fait avancer la state machine de cotation
    ///
    /// CONCEPT : Timer piloté par les ticks de l'event loop
    /// - Debouncing : attend QUOTE_DEBOUNCE sans nouvelle frappe
    /// - Loading : attend QUOTE_LATENCY puis publie le montant reçu
    ///
    /// Retourne true si l'état affiché a changé.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.state {
            QuoteState::Debouncing { since } if now.duration_since(since) >= QUOTE_DEBOUNCE => {
                self.state = QuoteState::Loading { since: now };
                true
            }
            QuoteState::Loading { since } if now.duration_since(since) >= QUOTE_LATENCY => {
                self.receive_amount = quote(&self.pay_amount, self.direction).unwrap_or_default();
                self.state = QuoteState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Valeur estimée en USD du montant payé
    pub fn fiat_estimate(&self) -> f64 {
        let amount: f64 = self.pay_amount.parse().unwrap_or(0.0);
        amount * self.direction.pay_token().usd_value()
    }

    /// Libellé du taux : "1 SOL ≈ 145.20 USDC"
    pub fn rate_label(&self) -> String {
        format!("1 SOL ≈ {:.2} USDC", SOL_TO_USDC_RATE)
    }

    /// Programme une cotation, ou vide le montant reçu si la saisie est invalide
    fn schedule_quote(&mut self, now: Instant) {
        if quote(&self.pay_amount, self.direction).is_some() {
            self.state = QuoteState::Debouncing { since: now };
        } else {
            self.receive_amount.clear();
            self.state = QuoteState::Idle;
        }
    }
}

impl Default for SwapForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_amount(form: &mut SwapForm, amount: &str, now: Instant) {
        for c in amount.chars() {
            form.push_char(c, now);
        }
    }

    /// Avance le temps jusqu'à la publication de la cotation
    fn settle(form: &mut SwapForm, start: Instant) -> Instant {
        let after_debounce = start + QUOTE_DEBOUNCE;
        form.tick(after_debounce);
        let after_latency = after_debounce + QUOTE_LATENCY;
        form.tick(after_latency);
        after_latency
    }

    #[test]
    fn test_quote_uses_fixed_rates() {
        assert_eq!(quote("2", SwapDirection::SolToUsdc), Some("290.4".to_string()));
        assert_eq!(quote("1000", SwapDirection::UsdcToSol), Some("6.9".to_string()));
        assert_eq!(quote("0", SwapDirection::SolToUsdc), None);
        assert_eq!(quote("", SwapDirection::SolToUsdc), None);
        assert_eq!(quote("abc", SwapDirection::SolToUsdc), None);
    }

    #[test]
    fn test_input_accepts_single_decimal_separator() {
        let now = Instant::now();
        let mut form = SwapForm::new();
        assert!(form.push_char('1', now));
        assert!(form.push_char(',', now));
        assert!(!form.push_char('.', now));
        assert!(!form.push_char('x', now));
        assert!(form.push_char('5', now));
        assert_eq!(form.pay_amount(), "1.5");
    }

    #[test]
    fn test_quote_waits_for_debounce_then_latency() {
        let start = Instant::now();
        let mut form = SwapForm::new();
        type_amount(&mut form, "2", start);

        assert!(form.is_quote_pending());
        assert!(!form.is_loading_quote());

        // Pas encore de cotation avant la fin du debounce
        assert!(!form.tick(start + Duration::from_millis(100)));
        assert_eq!(form.receive_amount(), "");

        // Fin du debounce : passage en chargement
        let loading_at = start + QUOTE_DEBOUNCE;
        assert!(form.tick(loading_at));
        assert!(form.is_loading_quote());

        // Fin de la latence : montant reçu publié
        assert!(form.tick(loading_at + QUOTE_LATENCY));
        assert!(!form.is_quote_pending());
        assert_eq!(form.receive_amount(), "290.4");
    }

    #[test]
    fn test_new_keystroke_restarts_debounce() {
        let start = Instant::now();
        let mut form = SwapForm::new();
        form.push_char('1', start);

        let later = start + Duration::from_millis(400);
        form.push_char('0', later);

        // 500ms après la première frappe, mais seulement 100ms après la seconde
        assert!(!form.tick(start + QUOTE_DEBOUNCE));
        assert!(!form.is_loading_quote());

        settle(&mut form, later);
        assert_eq!(form.receive_amount(), "1452.0");
    }

    #[test]
    fn test_clearing_input_clears_receive() {
        let start = Instant::now();
        let mut form = SwapForm::new();
        type_amount(&mut form, "3", start);
        let now = settle(&mut form, start);
        assert_eq!(form.receive_amount(), "435.6");

        form.backspace(now);
        assert_eq!(form.pay_amount(), "");
        assert_eq!(form.receive_amount(), "");
        assert!(!form.is_quote_pending());
    }

    #[test]
    fn test_flip_swaps_amounts_and_requotes() {
        let start = Instant::now();
        let mut form = SwapForm::new();
        type_amount(&mut form, "10", start);
        let now = settle(&mut form, start);
        assert_eq!(form.receive_amount(), "1452.0");

        form.flip(now);
        assert_eq!(form.direction(), SwapDirection::UsdcToSol);
        assert_eq!(form.direction().pay_token(), SwapToken::Usdc);
        assert_eq!(form.pay_amount(), "1452.0");
        assert_eq!(form.receive_amount(), "10");

        settle(&mut form, now);
        assert_eq!(form.receive_amount(), "10.0");
    }

    #[test]
    fn test_fill_max_only_when_paying_sol() {
        let now = Instant::now();
        let mut form = SwapForm::new();
        assert!(!form.fill_max(None, now));
        assert!(form.fill_max(Some(MOCK_SOL_BALANCE), now));
        assert_eq!(form.pay_amount(), "125.45");

        form.flip(now);
        assert!(!form.fill_max(Some(MOCK_SOL_BALANCE), now));
    }

    #[test]
    fn test_fiat_estimate_follows_pay_token() {
        let now = Instant::now();
        let mut form = SwapForm::new();
        type_amount(&mut form, "2", now);
        assert!((form.fiat_estimate() - 290.4).abs() < 1e-9);

        form.clear(now);
        form.flip(now);
        type_amount(&mut form, "50", now);
        assert_eq!(form.fiat_estimate(), 50.0);
    }
}
