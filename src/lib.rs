// ============================================================================
// Nucleus - Library
// ============================================================================
// Expose les modules publics pour le binaire et les tests
// ============================================================================

pub mod api;       // Solana JSON-RPC et API de prix CoinGecko
pub mod app;       // État de l'application
pub mod config;    // Ligne de commande et configuration
pub mod models;    // Structures de données
pub mod ui;        // Interface utilisateur
