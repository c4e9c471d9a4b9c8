// ============================================================================
// Module : models
// ============================================================================
// Ce module contient toutes les structures de données de l'application
// (état de vue transitoire, rien n'est persisté)
// ============================================================================

pub mod format;   // Formatage des montants et des prix
pub mod market;   // Tokens du classement CoinGecko
pub mod settings; // Sections et interrupteurs de l'écran Settings
pub mod swap;     // Simulateur de cotation SOL <-> USDC
pub mod wallet;   // Adresse du portefeuille et valeur nette

// Re-export des structures principales pour simplifier les imports
pub use market::{filter_tokens, MarketToken};
pub use settings::{SettingAction, Settings};
pub use swap::{SwapDirection, SwapForm, SwapToken};
pub use wallet::{Portfolio, WalletAddress, DEMO_ADDRESS};
